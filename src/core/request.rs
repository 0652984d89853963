use bon::Builder;
use chrono::NaiveTime;

use crate::{
    core::{
        location::ResolvedLocation,
        preferences::UserPreferences,
        simulator::SimulationError,
    },
    quantity::{distance::Kilometers, percent::Percent},
};

/// Everything the user tells about the trip.
#[must_use]
#[derive(Clone, Debug, Builder)]
pub struct TripRequest {
    pub source: ResolvedLocation,
    pub destination: ResolvedLocation,

    /// Current state of charge.
    pub battery_percent: Percent,

    /// Driving range on a full battery.
    pub range: Kilometers,

    /// Wall clock departure time.
    pub departure: NaiveTime,

    #[builder(default)]
    pub preferences: UserPreferences,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(Percent::ZERO..=Percent::HUNDRED).contains(&self.battery_percent) {
            return Err(SimulationError::InvalidInput(format!(
                "battery level must be within 0-100%, got {}",
                self.battery_percent,
            )));
        }
        if !(self.range.is_finite() && self.range > Kilometers::ZERO) {
            return Err(SimulationError::InvalidInput(format!(
                "vehicle range must be positive, got {}",
                self.range,
            )));
        }
        Ok(())
    }
}
