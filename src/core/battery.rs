use serde::Serialize;

use crate::quantity::{distance::Kilometers, percent::Percent};

/// Battery state of charge expressed as the remaining driving range.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Battery {
    capacity: Kilometers,

    /// Always within `0..=capacity`.
    range: Kilometers,
}

impl Battery {
    pub fn new(capacity: Kilometers, state_of_charge: Percent) -> Self {
        let mut this = Self { capacity, range: Kilometers::ZERO };
        this.set_range(capacity * state_of_charge);
        this
    }

    pub const fn capacity(&self) -> Kilometers {
        self.capacity
    }

    pub const fn range(&self) -> Kilometers {
        self.range
    }

    pub fn state_of_charge(&self) -> Percent {
        Percent(100.0 * (self.range / self.capacity))
    }

    /// Fraction of the full capacity.
    pub fn share(&self, percent: Percent) -> Kilometers {
        self.capacity * percent
    }

    pub fn discharge(&mut self, distance: Kilometers) {
        self.set_range(self.range - distance);
    }

    pub fn charge(&mut self, distance: Kilometers) {
        self.set_range(self.range + distance);
    }

    fn set_range(&mut self, range: Kilometers) {
        self.range = range.max(Kilometers::ZERO).min(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn new_from_percent() {
        let battery = Battery::new(Kilometers(300.0), Percent(90.0));
        assert_abs_diff_eq!(battery.range().0, 270.0);
        assert_abs_diff_eq!(battery.state_of_charge().0, 90.0);
    }

    #[test]
    fn clamped_to_capacity() {
        let mut battery = Battery::new(Kilometers(300.0), Percent(90.0));
        battery.charge(Kilometers(100.0));
        assert_eq!(battery.range(), Kilometers(300.0));
    }

    #[test]
    fn clamped_to_zero() {
        let mut battery = Battery::new(Kilometers(300.0), Percent(5.0));
        battery.discharge(Kilometers(100.0));
        assert_eq!(battery.range(), Kilometers::ZERO);
    }
}
