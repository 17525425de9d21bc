//! The turn-on state machine.
//!
//! One attempt per call: request current, apply the over-voltage burnout
//! latch, decide lit or dark. The happy path is stateless: a healthy lamp on
//! a healthy source lights identically every time.

use lampsim_traits::{Electricity, PowerSource};

use crate::error::{LampError, Result};
use crate::profile::LampProfile;
use crate::status::{DarkReason, LampStatus};

/// Unified lamp core for both boxed and statically-dispatched power sources.
pub struct LampCore<P: PowerSource> {
    pub(crate) name: String,
    pub(crate) profile: LampProfile,
    pub(crate) power: P,
    pub(crate) operational: bool,
    pub(crate) last_sample: Option<Electricity>,
}

impl<P: PowerSource> core::fmt::Debug for LampCore<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LampCore")
            .field("name", &self.name)
            .field("amps_needed", &self.profile.amps_needed)
            .field("operational", &self.operational)
            .finish()
    }
}

impl<P: PowerSource> LampCore<P> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &LampProfile {
        &self.profile
    }

    /// False once an over-voltage sample has burned the lamp out.
    pub fn is_operational(&self) -> bool {
        self.operational
    }

    /// Telemetry: the sample received on the most recent attempt.
    pub fn last_sample(&self) -> Option<Electricity> {
        self.last_sample
    }

    /// One turn-on attempt.
    pub fn turn_on(&mut self) -> Result<LampStatus> {
        let sample = self
            .power
            .request_power(self.profile.amps_needed)
            .map_err(|e| {
                eyre::Report::new(LampError::Source(e.to_string())).wrap_err("requesting power")
            })?;
        self.last_sample = Some(sample);

        // Too much voltage burns the lamp out, permanently.
        if sample.volts() > self.profile.max_voltage {
            tracing::warn!(
                lamp = %self.name,
                volts = sample.volts(),
                max_voltage = self.profile.max_voltage,
                "over-voltage sample, lamp burned out"
            );
            self.operational = false;
        }

        if !self.operational {
            tracing::info!(lamp = %self.name, "stays dark (burned out)");
            return Ok(LampStatus::Dark(DarkReason::BurnedOut));
        }
        if sample.amps() < self.profile.amps_needed {
            tracing::info!(
                lamp = %self.name,
                amps = sample.amps(),
                amps_needed = self.profile.amps_needed,
                "stays dark (not enough current)"
            );
            return Ok(LampStatus::Dark(DarkReason::InsufficientCurrent));
        }

        tracing::info!(lamp = %self.name, lumens = self.profile.lumens, "lit");
        Ok(LampStatus::Lit {
            lumens: self.profile.lumens,
        })
    }
}
