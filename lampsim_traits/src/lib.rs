pub mod clock;

pub use clock::{Clock, MonotonicClock, TestClock};

/// One delivery of electrical power: an immutable (volts, amps) pair.
///
/// Created fresh by a power source on every request and owned solely by the
/// caller that received it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Electricity {
    volts: f64,
    amps: f64,
}

impl Electricity {
    /// The zero sample: what a blown or depleted source delivers.
    pub const ZERO: Self = Self {
        volts: 0.0,
        amps: 0.0,
    };

    pub const fn new(volts: f64, amps: f64) -> Self {
        Self { volts, amps }
    }

    pub const fn volts(&self) -> f64 {
        self.volts
    }

    pub const fn amps(&self) -> f64 {
        self.amps
    }

    /// Derived wattage of this sample.
    pub fn watts(&self) -> f64 {
        self.volts * self.amps
    }

    pub fn is_zero(&self) -> bool {
        self.volts == 0.0 && self.amps == 0.0
    }
}

/// Anything that can supply electrical power on demand.
///
/// Over-capacity is not an error: sources express it through the zero sample
/// and their own latched state. The error channel exists for adapters whose
/// delegation itself can fail (for example a poisoned shared lock).
pub trait PowerSource {
    fn request_power(
        &mut self,
        amps_requested: f64,
    ) -> Result<Electricity, Box<dyn std::error::Error + Send + Sync>>;
}

impl<P: PowerSource + ?Sized> PowerSource for Box<P> {
    fn request_power(
        &mut self,
        amps_requested: f64,
    ) -> Result<Electricity, Box<dyn std::error::Error + Send + Sync>> {
        (**self).request_power(amps_requested)
    }
}
