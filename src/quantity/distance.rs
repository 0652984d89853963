use std::ops::{Div, Mul};

use crate::quantity::{
    efficiency::KilometersPerKilowattHour,
    energy::KilowattHours,
    percent::Percent,
    speed::KilometersPerHour,
    time::Hours,
};

quantity!(Kilometers, suffix: "km", precision: 1);

impl Kilometers {
    pub fn from_meters(meters: f64) -> Self {
        Self(meters * 0.001)
    }

    /// Round to the nearest 100 meters.
    #[must_use]
    pub fn round_to_tenth(self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }
}

impl Mul<Percent> for Kilometers {
    type Output = Self;

    fn mul(self, percent: Percent) -> Self::Output {
        self * percent.to_ratio()
    }
}

impl Div<KilometersPerHour> for Kilometers {
    type Output = Hours;

    fn div(self, speed: KilometersPerHour) -> Self::Output {
        Hours(self.0 / speed.0)
    }
}

impl Div<Hours> for Kilometers {
    type Output = KilometersPerHour;

    fn div(self, hours: Hours) -> Self::Output {
        KilometersPerHour(self.0 / hours.0)
    }
}

impl Div<KilometersPerKilowattHour> for Kilometers {
    type Output = KilowattHours;

    fn div(self, efficiency: KilometersPerKilowattHour) -> Self::Output {
        KilowattHours(self.0 / efficiency.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn from_meters_rounded() {
        assert_eq!(Kilometers::from_meters(123_456.0).round_to_tenth(), Kilometers(123.5));
        assert_eq!(Kilometers::from_meters(99_949.0).round_to_tenth(), Kilometers(99.9));
    }

    #[test]
    fn percent_of_capacity() {
        assert_abs_diff_eq!((Kilometers(300.0) * Percent(20.0)).0, 60.0);
    }

    #[test]
    fn driving_time() {
        assert_abs_diff_eq!((Kilometers(150.0) / KilometersPerHour(100.0)).0, 1.5);
    }

    #[test]
    fn energy_needed() {
        assert_abs_diff_eq!((Kilometers(255.0) / KilometersPerKilowattHour(6.0)).0, 42.5);
    }

    #[test]
    fn ordering() {
        assert_eq!(Kilometers(10.0).max(Kilometers(13.5)), Kilometers(13.5));
        assert_eq!(Kilometers(10.0).min(Kilometers(-1.0)), Kilometers(-1.0));
    }
}
