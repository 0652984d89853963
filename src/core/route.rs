use chrono::TimeDelta;
use serde::Serialize;

use crate::{
    core::location::ResolvedLocation,
    fmt::FormattedDuration,
    quantity::distance::Kilometers,
};

/// What the route provider knows about the drive.
#[must_use]
#[derive(Clone, Debug, PartialEq)]
pub struct RouteFacts {
    pub distance: Kilometers,
    pub duration: TimeDelta,

    /// Named intermediate points in the driving order, may be empty.
    pub waypoints: Vec<String>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteSummary {
    #[serde(rename = "distance_km")]
    pub distance: Kilometers,

    /// Human-readable driving time, for example: `6 hr 40 min`.
    pub duration: String,

    pub major_waypoints: Vec<String>,
    pub actual_source_address: String,
    pub actual_destination_address: String,
}

impl RouteSummary {
    pub fn new(
        route: &RouteFacts,
        source: &ResolvedLocation,
        destination: &ResolvedLocation,
    ) -> Self {
        Self {
            distance: route.distance,
            duration: FormattedDuration(route.duration).to_string(),
            major_waypoints: display_waypoints(route, destination),
            actual_source_address: source.display_name.clone(),
            actual_destination_address: destination.display_name.clone(),
        }
    }
}

/// Route waypoints, or a rough direction hint when the provider returned none.
fn display_waypoints(route: &RouteFacts, destination: &ResolvedLocation) -> Vec<String> {
    if !route.waypoints.is_empty() {
        return route.waypoints.clone();
    }
    if route.distance > Kilometers(150.0) {
        vec![format!("General direction of {}", destination.short_name())]
    } else if route.distance > Kilometers(50.0) {
        vec![format!("Towards {}", destination.short_name())]
    } else {
        Vec::new()
    }
}
