use crate::{
    core::{battery::Battery, settings::SimulationSettings, simulator::SimulationError},
    quantity::distance::Kilometers,
};

/// Shortest leg worth driving to a charger.
const MIN_LEG: Kilometers = Kilometers(10.0);

/// Longest leg when the battery is already near the arrival target.
const MAX_LOW_BATTERY_LEG: Kilometers = Kilometers(70.0);

/// Longest leg between two stops.
const MAX_LEG: Kilometers = Kilometers(300.0);

/// Check whether the destination is reachable while keeping the reserve.
#[must_use]
pub fn can_reach_destination(
    battery: &Battery,
    remaining: Kilometers,
    reserve: Kilometers,
) -> bool {
    battery.range() - reserve >= remaining
}

/// Choose how far to drive before the next forced charging stop.
///
/// The leg never overshoots the destination: when it would, the final stretch
/// is driven directly instead.
pub fn next_leg(
    battery: &Battery,
    remaining: Kilometers,
    settings: &SimulationSettings,
) -> Result<Kilometers, SimulationError> {
    let range = battery.range();
    let target_on_arrival = battery.share(settings.target_battery_at_charger_arrival);
    let estimate = range - target_on_arrival;

    let mut leg = if estimate <= Kilometers::ZERO {
        // Already at the arrival target, look for the closest charger:
        let leg = (range * 0.9).min(remaining * 0.5).min(MAX_LOW_BATTERY_LEG).max(MIN_LEG);
        if range < leg + battery.capacity() * 0.05 {
            return Err(SimulationError::BatteryCriticallyLow {
                state_of_charge: battery.state_of_charge(),
            });
        }
        leg
    } else {
        estimate.min(remaining * 0.9).min(MAX_LEG).max(MIN_LEG)
    };

    if leg >= remaining {
        leg = remaining * 0.95;
        if leg < MIN_LEG {
            leg = remaining;
        }
    }

    if range < leg {
        return Err(SimulationError::InsufficientBattery);
    }
    Ok(leg)
}
