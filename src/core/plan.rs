use std::fmt::{Display, Formatter};

use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    core::{route::RouteSummary, timeline::Event},
    quantity::{distance::Kilometers, energy::KilowattHours},
};

/// Successful simulation result.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, Serialize)]
pub struct TripPlan {
    pub source: String,
    pub destination: String,
    pub route_summary: RouteSummary,
    pub charging_required: bool,
    pub charging_stops: Vec<ChargingStop>,

    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub timeline: Vec<Event>,

    /// Degraded content the caller may want to point out.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub notices: Vec<Notice>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChargingStop {
    pub station: String,

    /// Arrival clock time, for example: `10:45 AM`.
    pub eta: String,

    /// For example: `40 min`.
    pub charging_time: String,

    pub activities_nearby: Vec<String>,

    #[serde(rename = "energy_kwh")]
    pub energy: KilowattHours,

    #[serde(rename = "range_on_arrival_km")]
    pub range_on_arrival: Kilometers,

    #[serde(rename = "range_on_departure_km")]
    pub range_on_departure: Kilometers,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Activity suggestions fell back to the static text because no advisor is configured.
    ActivityAdvisorUnavailable,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActivityAdvisorUnavailable => {
                write!(f, "Activity advisor is not configured, activity suggestions are disabled.")
            }
        }
    }
}
