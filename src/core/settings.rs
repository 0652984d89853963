use clap::Parser;

use crate::{
    core::simulator::SimulationError,
    quantity::{
        efficiency::KilometersPerKilowattHour,
        percent::Percent,
        power::Kilowatts,
        speed::KilometersPerHour,
    },
};

/// Charging model and reserve policy used by the trip simulation.
#[derive(Copy, Clone, Debug, Parser)]
pub struct SimulationSettings {
    /// Battery reserve kept on arrival at the final destination.
    #[clap(
        long = "min-battery-percent-at-destination",
        default_value = "20",
        env = "MIN_BATTERY_PERCENT_AT_DESTINATION"
    )]
    pub min_battery_at_destination: Percent,

    /// Desired battery level when reaching a charging stop.
    #[clap(
        long = "target-battery-percent-at-charger-arrival",
        default_value = "15",
        env = "TARGET_BATTERY_PERCENT_AT_CHARGER_ARRIVAL"
    )]
    pub target_battery_at_charger_arrival: Percent,

    /// Nominal battery level after charging.
    #[clap(
        long = "default-charge-up-to-percent",
        default_value = "80",
        env = "DEFAULT_CHARGE_UP_TO_PERCENT"
    )]
    pub default_charge_up_to: Percent,

    /// Vehicle efficiency.
    #[clap(long = "km-per-kwh", default_value = "6", env = "KM_PER_KWH")]
    pub efficiency: KilometersPerKilowattHour,

    /// Charger power.
    #[clap(long = "charging-rate-kw", default_value = "50", env = "CHARGING_RATE_KW")]
    pub charging_power: Kilowatts,

    /// Driving speed when the route itself does not tell one.
    #[clap(long = "fallback-avg-speed-kmh", default_value = "80", env = "FALLBACK_AVG_SPEED_KMH")]
    pub fallback_average_speed: KilometersPerHour,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            min_battery_at_destination: Percent(20.0),
            target_battery_at_charger_arrival: Percent(15.0),
            default_charge_up_to: Percent(80.0),
            efficiency: KilometersPerKilowattHour(6.0),
            charging_power: Kilowatts(50.0),
            fallback_average_speed: KilometersPerHour(80.0),
        }
    }
}

impl SimulationSettings {
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, percent) in [
            ("destination reserve", self.min_battery_at_destination),
            ("charger arrival target", self.target_battery_at_charger_arrival),
            ("charge-up-to level", self.default_charge_up_to),
        ] {
            if !(Percent::ZERO..=Percent::HUNDRED).contains(&percent) {
                return Err(SimulationError::InvalidInput(format!(
                    "{name} must be within 0-100%, got {percent}"
                )));
            }
        }
        if !(self.efficiency.is_finite() && self.efficiency > KilometersPerKilowattHour::ZERO) {
            return Err(SimulationError::InvalidInput(format!(
                "efficiency must be positive, got {}",
                self.efficiency
            )));
        }
        if !(self.charging_power.is_finite() && self.charging_power > Kilowatts::ZERO) {
            return Err(SimulationError::InvalidInput(format!(
                "charging power must be positive, got {}",
                self.charging_power
            )));
        }
        if !(self.fallback_average_speed.is_finite()
            && self.fallback_average_speed > KilometersPerHour::ZERO)
        {
            return Err(SimulationError::InvalidInput(format!(
                "fallback speed must be positive, got {}",
                self.fallback_average_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationSettings::default().validate().is_ok());
    }

    #[test]
    fn command_line_defaults_match() {
        let settings = SimulationSettings::parse_from(["evtrip"]);
        let defaults = SimulationSettings::default();
        assert_eq!(settings.min_battery_at_destination, defaults.min_battery_at_destination);
        assert_eq!(
            settings.target_battery_at_charger_arrival,
            defaults.target_battery_at_charger_arrival
        );
        assert_eq!(settings.default_charge_up_to, defaults.default_charge_up_to);
        assert_eq!(settings.efficiency, defaults.efficiency);
        assert_eq!(settings.charging_power, defaults.charging_power);
        assert_eq!(settings.fallback_average_speed, defaults.fallback_average_speed);
    }

    #[test]
    fn overrides() {
        let settings = SimulationSettings::parse_from([
            "evtrip",
            "--km-per-kwh",
            "5.5",
            "--charging-rate-kw",
            "150",
        ]);
        assert_eq!(settings.efficiency, KilometersPerKilowattHour(5.5));
        assert_eq!(settings.charging_power, Kilowatts(150.0));
    }

    #[test]
    fn rejects_non_positive_power() {
        let settings = SimulationSettings { charging_power: Kilowatts::ZERO, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_reserve_above_hundred() {
        let settings = SimulationSettings {
            min_battery_at_destination: Percent(120.0),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
