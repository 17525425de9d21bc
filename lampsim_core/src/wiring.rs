//! Wiring-strategy adapters: how a lamp obtains its power source.
//!
//! Injection is the primary configuration: build a source, move it into the
//! lamp's builder. `SharedPower` gives many lamps one latched instance
//! through a cloneable handle constructed by the composition root, never
//! through implicit process-wide state. `PerCallPower` rebuilds the source on
//! every request, which hides the fault latch; it is kept as a demonstration
//! of the anti-pattern, not a recommendation.

use std::sync::{Arc, Mutex};

use lampsim_traits::{Electricity, PowerSource};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Cloneable handle to one shared power source.
///
/// Every clone talks to the same instance, so a circuit blown through one
/// handle is visible to every lamp on the others.
pub struct SharedPower {
    inner: Arc<Mutex<Box<dyn PowerSource + Send>>>,
}

impl SharedPower {
    pub fn new(source: impl PowerSource + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(source))),
        }
    }

    /// Run a closure against the underlying source, e.g. to inspect its
    /// latch state in tests.
    pub fn with_source<T>(
        &self,
        f: impl FnOnce(&mut (dyn PowerSource + Send)) -> T,
    ) -> Result<T, BoxError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| -> BoxError { "shared power source lock poisoned".into() })?;
        Ok(f(guard.as_mut()))
    }
}

impl Clone for SharedPower {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl PowerSource for SharedPower {
    fn request_power(&mut self, amps_requested: f64) -> Result<Electricity, BoxError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| -> BoxError { "shared power source lock poisoned".into() })?;
        guard.request_power(amps_requested)
    }
}

/// Builds a brand-new source for every request (owned-per-call strategy).
///
/// Fault state never persists between requests, so a blown circuit on one
/// attempt is invisible to the next. That masking behavior is what this
/// adapter exists to illustrate.
pub struct PerCallPower<F> {
    factory: F,
}

impl<F> PerCallPower<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<S, F> PowerSource for PerCallPower<F>
where
    S: PowerSource,
    F: FnMut() -> S,
{
    fn request_power(&mut self, amps_requested: f64) -> Result<Electricity, BoxError> {
        (self.factory)().request_power(amps_requested)
    }
}
