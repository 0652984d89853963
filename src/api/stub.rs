//! Deterministic collaborators for the tests.

use async_trait::async_trait;

use crate::{
    api::{ActivityAdvisor, LocationResolver, RouteProvider},
    core::{
        location::{Coordinates, ResolvedLocation},
        preferences::UserPreferences,
        route::RouteFacts,
    },
    prelude::*,
    quantity::time::Hours,
};

pub struct FixedRoute(pub RouteFacts);

#[async_trait]
impl RouteProvider for FixedRoute {
    async fn get_route(&self, _: Coordinates, _: Coordinates) -> Result<RouteFacts> {
        Ok(self.0.clone())
    }
}

pub struct NoRoute;

#[async_trait]
impl RouteProvider for NoRoute {
    async fn get_route(&self, _: Coordinates, _: Coordinates) -> Result<RouteFacts> {
        bail!("OSRM could not find a route: NoRoute")
    }
}

/// Suggests one activity echoing the station and the rounded dwell time.
pub struct EchoAdvisor;

#[async_trait]
impl ActivityAdvisor for EchoAdvisor {
    async fn suggest(
        &self,
        station: &str,
        dwell_time: Hours,
        _: UserPreferences,
    ) -> Result<Vec<String>> {
        Ok(vec![format!(
            "Stretch your legs near {station} for {:.0} min",
            dwell_time.as_minutes().round(),
        )])
    }
}

pub struct FailingAdvisor;

#[async_trait]
impl ActivityAdvisor for FailingAdvisor {
    async fn suggest(&self, _: &str, _: Hours, _: UserPreferences) -> Result<Vec<String>> {
        bail!("the service is down")
    }
}

pub struct SilentAdvisor;

#[async_trait]
impl ActivityAdvisor for SilentAdvisor {
    async fn suggest(&self, _: &str, _: Hours, _: UserPreferences) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Knows a fixed list of places and matches them by the display name prefix.
pub struct KnownPlaces(pub Vec<ResolvedLocation>);

#[async_trait]
impl LocationResolver for KnownPlaces {
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<ResolvedLocation>> {
        let query = query.to_lowercase();
        Ok(self
            .0
            .iter()
            .filter(|location| location.display_name.to_lowercase().starts_with(&query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn reverse(&self, coordinates: Coordinates) -> Result<ResolvedLocation> {
        self.0
            .iter()
            .find(|location| location.coordinates == coordinates)
            .cloned()
            .context("unable to geocode")
    }
}
