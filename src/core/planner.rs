use std::fmt::{Display, Formatter};

use crate::{
    api::{ActivityAdvisor, LocationResolver, RouteProvider},
    core::{
        location::{Coordinates, ResolvedLocation},
        plan::TripPlan,
        request::TripRequest,
        settings::SimulationSettings,
        simulator::{SimulationError, Simulator},
    },
    prelude::*,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Destination => write!(f, "destination"),
        }
    }
}

/// The first terminal failure of the planning pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PlanningError {
    #[error("could not resolve the {endpoint} `{query}`: {reason}")]
    Resolution { endpoint: Endpoint, query: String, reason: String },

    #[error("no {endpoint} matches `{query}`")]
    NotFound { endpoint: Endpoint, query: String },

    #[error("could not find a route from {from} to {to}: {reason}")]
    Routing { from: String, to: String, reason: String },

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Resolve the user input into a trip endpoint.
///
/// Input parsing as `latitude,longitude` is reverse-geocoded for the display name,
/// and keeps the raw coordinates as the name if that fails.
#[instrument(skip_all, fields(endpoint = %endpoint, input = input))]
pub async fn resolve(
    resolver: &dyn LocationResolver,
    endpoint: Endpoint,
    input: &str,
) -> Result<ResolvedLocation, PlanningError> {
    if let Ok(coordinates) = input.parse::<Coordinates>() {
        return Ok(match resolver.reverse(coordinates).await {
            Ok(location) => location,
            Err(error) => {
                warn!("failed to reverse-geocode: {error:#}");
                ResolvedLocation::from(coordinates)
            }
        });
    }
    let candidates = resolver.search(input, 1).await.map_err(|error| {
        PlanningError::Resolution {
            endpoint,
            query: input.to_owned(),
            reason: format!("{error:#}"),
        }
    })?;
    let location = candidates
        .into_iter()
        .next()
        .ok_or_else(|| PlanningError::NotFound { endpoint, query: input.to_owned() })?;
    info!(display_name = %location.display_name, "resolved");
    Ok(location)
}

/// Routing, then simulation, with the collaborators injected.
pub struct Planner<'a> {
    pub route_provider: &'a dyn RouteProvider,
    pub advisor: &'a dyn ActivityAdvisor,
    pub settings: &'a SimulationSettings,
}

impl Planner<'_> {
    #[instrument(
        skip_all,
        fields(
            source = %request.source.display_name,
            destination = %request.destination.display_name,
        ),
    )]
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan, PlanningError> {
        request.validate()?;
        let route = self
            .route_provider
            .get_route(request.source.coordinates, request.destination.coordinates)
            .await
            .map_err(|error| PlanningError::Routing {
                from: request.source.display_name.clone(),
                to: request.destination.display_name.clone(),
                reason: format!("{error:#}"),
            })?;
        info!(distance = %route.distance, duration = ?route.duration, "route");
        Ok(Simulator::builder()
            .request(request)
            .route(&route)
            .settings(self.settings)
            .build()
            .run(self.advisor)
            .await?)
    }
}
