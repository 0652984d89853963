use chrono::{NaiveTime, TimeDelta};

use crate::{
    core::battery::Battery,
    quantity::{distance::Kilometers, speed::KilometersPerHour, time::Hours},
};

/// Simulation state threaded through the loop.
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct State {
    pub battery: Battery,

    /// Never exceeds the total route distance.
    pub distance_travelled: Kilometers,

    departure: NaiveTime,
    elapsed: TimeDelta,
}

impl State {
    pub const fn new(battery: Battery, departure: NaiveTime) -> Self {
        Self {
            battery,
            distance_travelled: Kilometers::ZERO,
            departure,
            elapsed: TimeDelta::zero(),
        }
    }

    /// Current wall clock time, wrapping past midnight.
    #[must_use]
    pub fn clock(&self) -> NaiveTime {
        self.departure.overflowing_add_signed(self.elapsed).0
    }

    #[must_use]
    pub const fn elapsed(&self) -> TimeDelta {
        self.elapsed
    }

    #[must_use]
    pub fn remaining(&self, total: Kilometers) -> Kilometers {
        (total - self.distance_travelled).max(Kilometers::ZERO)
    }

    /// Drive the leg at the constant speed.
    ///
    /// A leg covering the rest of the route snaps the travelled distance to the total.
    pub fn drive(&mut self, leg: Kilometers, speed: KilometersPerHour, total: Kilometers) {
        self.wait(leg / speed);
        self.battery.discharge(leg);
        if leg >= self.remaining(total) {
            self.distance_travelled = total;
        } else {
            self.distance_travelled += leg;
        }
    }

    pub fn wait(&mut self, duration: Hours) {
        self.elapsed += TimeDelta::from(duration);
    }
}
