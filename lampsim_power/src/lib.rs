//! Concrete power-source implementations behind the `PowerSource` seam.
//!
//! Two supplies are provided: `GridSupply`, a fixed-voltage feed with a hard
//! amperage ceiling and a one-way fault latch, and `ReserveSupply`, a
//! battery-style feed that depletes a watt-hour reserve and degrades to
//! partial delivery before going dark.

use std::time::Duration;

use lampsim_traits::{Clock, Electricity, PowerSource};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Start-up cost per amp of capacity, matching the idea that bigger supplies
/// are more expensive to bring online. Cosmetic; see [`GridSupply::spin_up`].
const SPIN_UP_MS_PER_AMP: f64 = 15.0;

/// A fixed-voltage supply with a hard amperage ceiling.
///
/// A request above `max_amperage` blows the circuit: the latch never resets,
/// and every request from then on (including the triggering one) delivers the
/// zero sample.
#[derive(Debug)]
pub struct GridSupply {
    voltage: f64,
    max_amperage: f64,
    circuit_blown: bool,
}

impl GridSupply {
    pub fn new(voltage: f64, max_amperage: f64) -> Self {
        tracing::info!(voltage, max_amperage, "grid supply online");
        Self {
            voltage,
            max_amperage,
            circuit_blown: false,
        }
    }

    /// Household mains feed.
    pub fn mains() -> Self {
        Self::new(120.0, 1000.0)
    }

    /// Heavy feed sized for an office building.
    pub fn industrial() -> Self {
        Self::new(120.0, 1500.0)
    }

    /// Small feed sized for a single fixture.
    pub fn lightweight() -> Self {
        Self::new(120.0, 15.0)
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub fn max_amperage(&self) -> f64 {
        self.max_amperage
    }

    /// True once an over-capacity request has tripped the latch.
    pub fn is_blown(&self) -> bool {
        self.circuit_blown
    }

    /// Simulate the start-up cost of an expensive supply: 15 ms per amp of
    /// capacity, spent through the given clock. Purely cosmetic; skipping it
    /// changes nothing, and a test clock makes it deterministic.
    pub fn spin_up(&self, clock: &impl Clock) {
        let cost = Duration::from_millis((self.max_amperage * SPIN_UP_MS_PER_AMP).max(0.0) as u64);
        tracing::debug!(cost_ms = cost.as_millis() as u64, "spinning up supply");
        clock.sleep(cost);
    }
}

impl PowerSource for GridSupply {
    fn request_power(&mut self, amps_requested: f64) -> Result<Electricity, BoxError> {
        if amps_requested > self.max_amperage {
            if !self.circuit_blown {
                tracing::warn!(
                    amps_requested,
                    max_amperage = self.max_amperage,
                    "over-capacity request, circuit blown"
                );
            }
            self.circuit_blown = true;
        }
        if self.circuit_blown {
            return Ok(Electricity::ZERO);
        }
        tracing::trace!(amps_requested, volts = self.voltage, "delivering");
        Ok(Electricity::new(self.voltage, amps_requested))
    }
}

/// A battery-style supply that depletes a fixed watt-hour reserve.
///
/// Each request draws for a nominal `draw_hours` interval, so a request for
/// `a` amps costs `voltage * a * draw_hours` watt-hours. When the remaining
/// reserve cannot cover a full request the supply degrades once to a partial
/// sample at full voltage; after that it is empty and delivers the zero
/// sample. The over-amperage latch applies exactly as for `GridSupply`.
#[derive(Debug)]
pub struct ReserveSupply {
    voltage: f64,
    max_amperage: f64,
    reserve_wh: f64,
    drawn_wh: f64,
    draw_hours: f64,
    circuit_blown: bool,
}

impl ReserveSupply {
    pub fn new(voltage: f64, max_amperage: f64, reserve_wh: f64) -> Self {
        tracing::info!(voltage, max_amperage, reserve_wh, "reserve supply online");
        Self {
            voltage,
            max_amperage,
            reserve_wh,
            drawn_wh: 0.0,
            draw_hours: 1.0,
            circuit_blown: false,
        }
    }

    /// Override the nominal draw interval per request (default 1 hour).
    pub fn with_draw_hours(mut self, hours: f64) -> Self {
        self.draw_hours = hours;
        self
    }

    pub fn voltage(&self) -> f64 {
        self.voltage
    }

    pub fn max_amperage(&self) -> f64 {
        self.max_amperage
    }

    /// Watt-hours still available.
    pub fn remaining_wh(&self) -> f64 {
        (self.reserve_wh - self.drawn_wh).max(0.0)
    }

    pub fn is_depleted(&self) -> bool {
        self.remaining_wh() <= 0.0
    }

    pub fn is_blown(&self) -> bool {
        self.circuit_blown
    }
}

impl PowerSource for ReserveSupply {
    fn request_power(&mut self, amps_requested: f64) -> Result<Electricity, BoxError> {
        if amps_requested > self.max_amperage {
            if !self.circuit_blown {
                tracing::warn!(
                    amps_requested,
                    max_amperage = self.max_amperage,
                    "over-capacity request, circuit blown"
                );
            }
            self.circuit_blown = true;
        }
        if self.circuit_blown {
            return Ok(Electricity::ZERO);
        }

        let wh_per_amp = self.voltage * self.draw_hours;
        if wh_per_amp <= 0.0 {
            return Ok(Electricity::ZERO);
        }
        let wanted_wh = wh_per_amp * amps_requested;
        let remaining = self.remaining_wh();
        if remaining <= 0.0 {
            tracing::trace!(amps_requested, "reserve empty");
            return Ok(Electricity::ZERO);
        }
        if wanted_wh <= remaining {
            self.drawn_wh += wanted_wh;
            tracing::trace!(
                amps_requested,
                remaining_wh = self.remaining_wh(),
                "delivering from reserve"
            );
            return Ok(Electricity::new(self.voltage, amps_requested));
        }

        // Final, partial delivery: whatever the reserve still covers.
        let amps = remaining / wh_per_amp;
        self.drawn_wh = self.reserve_wh;
        tracing::debug!(amps_requested, amps_delivered = amps, "reserve depleted, partial delivery");
        Ok(Electricity::new(self.voltage, amps))
    }
}
