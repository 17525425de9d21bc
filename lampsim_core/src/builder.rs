//! Type-state builder for `Lamp` and generic `build_lamp` constructor.
//!
//! The builder enforces at compile time that a power source and a profile are
//! provided before `build()` is available; `try_build()` is always available
//! for dynamic checks. This is what makes a lamp with no wired power source
//! unrepresentable.

use std::marker::PhantomData;

use lampsim_traits::PowerSource;

use crate::error::{BuildError, Result};
use crate::lamp::LampCore;
use crate::profile::LampProfile;

// ── Public dynamic-dispatch wrapper ──────────────────────────────────────────

/// Public dynamic (boxed) lamp that preserves the core API via composition.
pub struct Lamp {
    pub(crate) inner: LampCore<Box<dyn PowerSource>>,
}

impl core::fmt::Debug for Lamp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Lamp")
            .field("name", &self.inner.name)
            .field("amps_needed", &self.inner.profile.amps_needed)
            .field("operational", &self.inner.operational)
            .finish()
    }
}

impl Lamp {
    /// Start building a Lamp.
    pub fn builder() -> LampBuilder<Missing, Missing> {
        LampBuilder::default()
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn profile(&self) -> &LampProfile {
        self.inner.profile()
    }

    /// False once an over-voltage sample has burned the lamp out.
    pub fn is_operational(&self) -> bool {
        self.inner.is_operational()
    }

    /// Telemetry: the sample received on the most recent attempt.
    pub fn last_sample(&self) -> Option<lampsim_traits::Electricity> {
        self.inner.last_sample()
    }

    /// One turn-on attempt.
    pub fn turn_on(&mut self) -> Result<crate::status::LampStatus> {
        self.inner.turn_on()
    }
}

// ── Type-state markers ───────────────────────────────────────────────────────

pub struct Missing;
pub struct Set;

/// Builder for `Lamp`. The profile is validated on `build()`.
pub struct LampBuilder<P, R> {
    power: Option<Box<dyn PowerSource>>,
    profile: Option<LampProfile>,
    name: Option<String>,
    _p: PhantomData<P>,
    _r: PhantomData<R>,
}

impl Default for LampBuilder<Missing, Missing> {
    fn default() -> Self {
        Self {
            power: None,
            profile: None,
            name: None,
            _p: PhantomData,
            _r: PhantomData,
        }
    }
}

/// Validate the profile and construct a `LampCore`.
///
/// Single source of truth for validation and construction, used by both
/// `LampBuilder::try_build()` and `build_lamp()`.
fn validate_and_build<P: PowerSource>(
    name: String,
    profile: LampProfile,
    power: P,
) -> Result<LampCore<P>> {
    profile
        .validate()
        .map_err(|msg| eyre::Report::new(BuildError::InvalidProfile(msg)))?;

    Ok(LampCore {
        name,
        profile,
        power,
        operational: true,
        last_sample: None,
    })
}

impl<P, R> LampBuilder<P, R> {
    /// Fallible build available in any type-state; returns a typed error for
    /// each missing piece.
    pub fn try_build(self) -> Result<Lamp> {
        let power = self
            .power
            .ok_or_else(|| eyre::Report::new(BuildError::MissingPower))?;
        let profile = self
            .profile
            .ok_or_else(|| eyre::Report::new(BuildError::MissingProfile))?;
        let name = self
            .name
            .ok_or_else(|| eyre::Report::new(BuildError::MissingName))?;

        let inner = validate_and_build(name, profile, power)?;
        Ok(Lamp { inner })
    }

    /// Chainable setter that does not affect type-state.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

// Setters that advance type-state

impl<R> LampBuilder<Missing, R> {
    pub fn with_power(self, power: impl PowerSource + 'static) -> LampBuilder<Set, R> {
        LampBuilder {
            power: Some(Box::new(power)),
            profile: self.profile,
            name: self.name,
            _p: PhantomData,
            _r: PhantomData,
        }
    }
}

impl<P> LampBuilder<P, Missing> {
    pub fn with_profile(self, profile: LampProfile) -> LampBuilder<P, Set> {
        LampBuilder {
            power: self.power,
            profile: Some(profile),
            name: self.name,
            _p: PhantomData,
            _r: PhantomData,
        }
    }
}

impl LampBuilder<Set, Set> {
    /// Validate and build the Lamp. Only available when power and profile are
    /// both set.
    pub fn build(self) -> Result<Lamp> {
        self.try_build()
    }
}

/// Build a generic, statically-dispatched `LampCore` from a concrete source.
///
/// Delegates to the shared `validate_and_build`, so validation lives in one place.
pub fn build_lamp<P>(name: impl Into<String>, profile: LampProfile, power: P) -> Result<LampCore<P>>
where
    P: PowerSource + 'static,
{
    validate_and_build(name.into(), profile, power)
}
