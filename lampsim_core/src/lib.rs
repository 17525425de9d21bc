#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! The lamp model: profiles, the turn-on state machine, the type-state
//! builder, and the wiring-strategy adapters.
//!
//! A lamp is always built around a wired power source; the builder refuses
//! anything else, so "turn on a lamp with no source" is unrepresentable. All
//! model-level failure (a dark lamp, a blown circuit, a depleted reserve) is
//! a normal return value, never an error.

pub mod builder;
pub mod conversions;
pub mod error;
pub mod lamp;
pub mod profile;
pub mod status;
pub mod wiring;

pub use builder::{Lamp, LampBuilder, build_lamp};
pub use error::{BuildError, LampError, Result};
pub use lamp::LampCore;
pub use profile::LampProfile;
pub use status::{DarkReason, LampStatus};
pub use wiring::{PerCallPower, SharedPower};

pub use lampsim_traits::{Clock, Electricity, MonotonicClock, PowerSource};
