//! Lamp electrical/photometric ratings.

/// Fixed ratings for one lamp: what it draws, what it tolerates, what it
/// emits. One record replaces a hierarchy of per-lamp types that differ only
/// by constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampProfile {
    /// Current the lamp needs to light, in amps.
    pub amps_needed: f64,
    /// Highest voltage the lamp survives; anything above burns it out.
    pub max_voltage: f64,
    /// Nominal output when successfully lit.
    pub lumens: f64,
}

impl LampProfile {
    /// Ordinary floor lamp.
    pub const FLOOR: Self = Self::new(15.0, 120.0, 30.0);
    /// Stage wash drawing far more than a household circuit allows.
    pub const HIGH_OUTPUT: Self = Self::new(1500.0, 120.0, 9001.0);

    pub const fn new(amps_needed: f64, max_voltage: f64, lumens: f64) -> Self {
        Self {
            amps_needed,
            max_voltage,
            lumens,
        }
    }

    /// Field checks shared by the builder and the config layer.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.amps_needed.is_finite() || self.amps_needed < 0.0 {
            return Err("amps_needed must be finite and >= 0");
        }
        if !self.max_voltage.is_finite() || self.max_voltage <= 0.0 {
            return Err("max_voltage must be finite and > 0");
        }
        if !self.lumens.is_finite() || self.lumens < 0.0 {
            return Err("lumens must be finite and >= 0");
        }
        Ok(())
    }
}
