//! Outcome of a single turn-on attempt.

/// What happened when the lamp was asked to light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LampStatus {
    /// Lit at the profile's nominal output.
    Lit { lumens: f64 },
    /// Stayed dark. A normal outcome, not a fault.
    Dark(DarkReason),
}

impl LampStatus {
    pub fn is_lit(&self) -> bool {
        matches!(self, LampStatus::Lit { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DarkReason {
    /// An earlier over-voltage sample burned the lamp out; it never recovers.
    BurnedOut,
    /// The delivered sample did not carry the current the lamp needs.
    InsufficientCurrent,
}
