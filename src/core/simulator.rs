mod charging;
mod error;
mod leg;
mod state;

use bon::Builder;
use chrono::TimeDelta;

pub use self::error::SimulationError;
use self::{
    charging::{charge_amount, charge_target, dwell_time},
    leg::{can_reach_destination, next_leg},
    state::State,
};
use crate::{
    api::ActivityAdvisor,
    core::{
        battery::Battery,
        plan::{ChargingStop, Notice, TripPlan},
        request::TripRequest,
        route::{RouteFacts, RouteSummary},
        settings::SimulationSettings,
        timeline::Event,
    },
    fmt::FormattedClock,
    prelude::*,
    quantity::{distance::Kilometers, speed::KilometersPerHour, time::Hours},
};

/// Walks the vehicle along the route, placing charging stops where the battery forces them.
#[must_use]
#[derive(Builder)]
pub struct Simulator<'a> {
    request: &'a TripRequest,
    route: &'a RouteFacts,
    settings: &'a SimulationSettings,
}

impl Simulator<'_> {
    #[instrument(
        skip_all,
        fields(
            distance = %self.route.distance,
            battery = %self.request.battery_percent,
            range = %self.request.range,
        ),
    )]
    pub async fn run(self, advisor: &dyn ActivityAdvisor) -> Result<TripPlan, SimulationError> {
        self.validate()?;

        let total = self.route.distance;
        let speed = self.average_speed();
        let source = &self.request.source.display_name;
        let destination = &self.request.destination.display_name;
        debug!(%speed, "average speed");
        let route_summary =
            RouteSummary::new(self.route, &self.request.source, &self.request.destination);

        let battery = Battery::new(self.request.range, self.request.battery_percent);
        let reserve = battery.share(self.settings.min_battery_at_destination);
        let mut state = State::new(battery, self.request.departure);

        let mut notices = Vec::new();
        if !advisor.is_available() {
            notices.push(Notice::ActivityAdvisorUnavailable);
        }

        let mut timeline = vec![Event::depart(state.clock(), source)];
        let mut charging_stops = Vec::new();
        let mut charging_required = false;

        if total == Kilometers::ZERO {
            timeline.push(Event::arrive_at(state.clock(), destination));
        }

        while state.distance_travelled < total {
            let remaining = state.remaining(total);
            if can_reach_destination(&state.battery, remaining, reserve) {
                debug!(%remaining, range = %state.battery.range(), "driving to the destination");
                state.drive(remaining, speed, total);
                timeline.push(Event::arrive_at(state.clock(), destination));
                break;
            }

            charging_required = true;
            let leg = next_leg(&state.battery, remaining, self.settings)?;
            debug!(%leg, %remaining, range = %state.battery.range(), "driving to the next charger");
            state.drive(leg, speed, total);
            if state.distance_travelled >= total {
                timeline.push(Event::arrive_at(state.clock(), destination));
                break;
            }

            let station = self.station_label(&route_summary, charging_stops.len() + 1);
            let eta = state.clock();
            timeline.push(Event::stop_at(eta, &station));

            let range_on_arrival = state.battery.range();
            let target =
                charge_target(&state.battery, state.remaining(total) + reserve, self.settings);
            let amount = charge_amount(&state.battery, target);
            let (energy, dwell_time) = dwell_time(amount, self.settings);
            let activities_nearby =
                advisor.suggest_or_fallback(&station, dwell_time, self.request.preferences).await;

            state.wait(dwell_time);
            state.battery.charge(amount);
            info!(
                %station,
                eta = %FormattedClock(eta),
                dwell_time = %dwell_time,
                before = %range_on_arrival,
                after = %state.battery.range(),
                "charging stop",
            );

            timeline.push(Event::resume_from(state.clock(), &station));
            charging_stops.push(ChargingStop {
                station,
                eta: FormattedClock(eta).to_string(),
                charging_time: format!("{:.0} min", dwell_time.as_minutes().round()),
                activities_nearby,
                energy,
                range_on_arrival,
                range_on_departure: state.battery.range(),
            });
        }

        if !timeline.last().is_some_and(|event| event.is_arrival_at(destination)) {
            return Err(SimulationError::Infeasible);
        }
        info!(
            n_stops = charging_stops.len(),
            travel_time = ?state.elapsed(),
            range_on_arrival = %state.battery.range(),
            "planned",
        );

        Ok(TripPlan {
            source: source.clone(),
            destination: destination.clone(),
            route_summary,
            charging_required,
            charging_stops,
            timeline,
            notices,
        })
    }

    fn validate(&self) -> Result<(), SimulationError> {
        self.request.validate()?;
        self.settings.validate()?;
        if !(self.route.distance.is_finite() && self.route.distance >= Kilometers::ZERO) {
            return Err(SimulationError::InvalidInput(format!(
                "route distance must be non-negative, got {}",
                self.route.distance,
            )));
        }
        if self.route.duration < TimeDelta::zero() {
            return Err(SimulationError::InvalidInput(format!(
                "route duration must be non-negative, got {}",
                self.route.duration,
            )));
        }
        Ok(())
    }

    /// Single speed for the whole trip.
    fn average_speed(&self) -> KilometersPerHour {
        if self.route.distance > Kilometers::ZERO && self.route.duration > TimeDelta::zero() {
            self.route.distance / Hours::from(self.route.duration)
        } else {
            self.settings.fallback_average_speed
        }
    }

    /// Label of the `n`-th stop, counting from one.
    ///
    /// Named after the summary waypoint with the same index, which may be a direction hint.
    fn station_label(&self, route_summary: &RouteSummary, n: usize) -> String {
        let near = route_summary
            .major_waypoints
            .get(n - 1)
            .map(String::as_str)
            .filter(|waypoint| !waypoint.is_empty())
            .or_else(|| Some(self.request.destination.short_name()).filter(|name| !name.is_empty()))
            .unwrap_or("next stop");
        format!("SimuCharge Station #{n} (near {near})")
    }
}
