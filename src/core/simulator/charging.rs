use crate::{
    core::{battery::Battery, settings::SimulationSettings},
    quantity::{distance::Kilometers, energy::KilowattHours, time::Hours},
};

/// Chargers are never left earlier than this.
pub const MIN_DWELL_TIME: Hours = Hours::from_minutes(15.0);

/// Range to charge up to at a stop.
///
/// Normally, that is the default charge level. When the rest of the trip needs more,
/// charge enough to cover it with a small margin. Always add at least 10% of the capacity.
#[must_use]
pub fn charge_target(
    battery: &Battery,
    needed_for_rest: Kilometers,
    settings: &SimulationSettings,
) -> Kilometers {
    let capacity = battery.capacity();
    let mut target = battery.share(settings.default_charge_up_to);
    if target < needed_for_rest {
        target = capacity.min(needed_for_rest + capacity * 0.05);
    }
    target.max(battery.range() + capacity * 0.1).min(capacity)
}

/// Range added by charging up to the target.
#[must_use]
pub fn charge_amount(battery: &Battery, target: Kilometers) -> Kilometers {
    let amount = target - battery.range();
    if amount > Kilometers::ZERO { amount } else { battery.capacity() * 0.1 }
}

/// Energy and time needed to charge the range. The time is never less than [`MIN_DWELL_TIME`].
#[must_use]
pub fn dwell_time(amount: Kilometers, settings: &SimulationSettings) -> (KilowattHours, Hours) {
    let energy = amount / settings.efficiency;
    (energy, (energy / settings.charging_power).max(MIN_DWELL_TIME))
}
