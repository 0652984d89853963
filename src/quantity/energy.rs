use std::ops::Div;

use crate::quantity::{power::Kilowatts, time::Hours};

quantity!(KilowattHours, suffix: "kWh", precision: 1);

impl Div<Kilowatts> for KilowattHours {
    type Output = Hours;

    fn div(self, rhs: Kilowatts) -> Self::Output {
        Hours(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn charging_time() {
        assert_abs_diff_eq!((KilowattHours(42.5) / Kilowatts(50.0)).0, 0.85);
    }
}
