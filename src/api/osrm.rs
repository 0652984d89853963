//! [OSRM](https://project-osrm.org/docs/v5.24.0/api/#route-service) route provider.

use async_trait::async_trait;
use chrono::TimeDelta;
use itertools::Itertools;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::{
    api::RouteProvider,
    core::{location::Coordinates, route::RouteFacts},
    prelude::*,
    quantity::distance::Kilometers,
};

/// Public demo server.
pub const DEFAULT_URL: &str = "https://router.project-osrm.org";

/// Step name prefixes which are routing instructions rather than places.
const BOILERPLATE_PREFIXES: [&str; 6] = ["turn", "continue", "merge", "exit", "keep", "use the"];

const MAX_CANDIDATES: usize = 10;
const MAX_WAYPOINTS: usize = 5;

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub const fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn route_url(&self, from: Coordinates, to: Coordinates) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("invalid base URL"))?
            .pop_if_empty()
            .extend(["route", "v1", "driving"])
            .push(&format!(
                "{},{};{},{}",
                from.longitude, from.latitude, to.longitude, to.latitude,
            ));
        url.query_pairs_mut()
            .append_pair("steps", "true")
            .append_pair("alternatives", "false")
            .append_pair("overview", "false");
        Ok(url)
    }
}

#[async_trait]
impl RouteProvider for Api {
    #[instrument(skip_all, fields(from = %from, to = %to))]
    async fn get_route(&self, from: Coordinates, to: Coordinates) -> Result<RouteFacts> {
        let response: Response = self
            .client
            .get(self.route_url(from, to)?)
            .send()
            .await
            .context("failed to call OSRM")?
            .json()
            .await
            .context("failed to deserialize the OSRM response")?;
        let route = response.into_route()?;
        debug!(distance_meters = route.distance, duration_secs = route.duration, "fetched");
        Ok(route.into())
    }
}

#[derive(Deserialize)]
struct Response {
    code: String,

    #[serde(default)]
    message: Option<String>,

    #[serde(default)]
    routes: Vec<Route>,
}

impl Response {
    fn into_route(self) -> Result<Route> {
        if self.code != "Ok" {
            match self.message {
                Some(message) => bail!("OSRM could not find a route: {} ({message})", self.code),
                None => bail!("OSRM could not find a route: {}", self.code),
            }
        }
        self.routes.into_iter().next().context("OSRM returned no routes")
    }
}

#[derive(Deserialize)]
struct Route {
    /// Meters.
    distance: f64,

    /// Seconds.
    duration: f64,

    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Deserialize)]
struct Leg {
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Deserialize)]
struct Step {
    #[serde(default)]
    name: String,
}

impl From<Route> for RouteFacts {
    #[expect(clippy::cast_possible_truncation)]
    fn from(route: Route) -> Self {
        Self {
            distance: Kilometers::from_meters(route.distance).round_to_tenth(),
            duration: TimeDelta::seconds(route.duration.round() as i64),
            waypoints: extract_waypoints(
                route.legs.iter().flat_map(|leg| &leg.steps).map(|step| step.name.as_str()),
            ),
        }
    }
}

/// Pick the recognizable place names out of the turn-by-turn step names.
fn extract_waypoints<'a>(step_names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut candidates: Vec<&str> = Vec::new();
    for name in step_names {
        let name = name.split(" (").next().unwrap_or_default();
        if candidates.len() < MAX_CANDIDATES && is_place_name(name) && !candidates.contains(&name)
        {
            candidates.push(name);
        }
    }
    candidates.into_iter().unique().take(MAX_WAYPOINTS).map(str::to_owned).collect()
}

fn is_place_name(name: &str) -> bool {
    if name.chars().count() <= 3 {
        return false;
    }
    if name.starts_with(|c: char| c.is_ascii_digit() || c.is_whitespace()) {
        return false;
    }
    let lowercase = name.to_lowercase();
    !BOILERPLATE_PREFIXES.iter().any(|prefix| lowercase.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 45237.4,
            "duration": 2712.6,
            "legs": [{
                "steps": [
                    {"name": "Prins Hendrikkade"},
                    {"name": ""},
                    {"name": "A10 (Ring Amsterdam)"},
                    {"name": "Ring Amsterdam"},
                    {"name": "Rijksweg A2 (E35)"},
                    {"name": "Prins Hendrikkade"},
                    {"name": "Continue on A2"},
                    {"name": "12e Straat"},
                    {"name": "Weg"},
                    {"name": "Merge onto A27"},
                    {"name": "Waterlinieweg"},
                    {"name": "Biltstraat"},
                    {"name": "Maliebaan"}
                ]
            }]
        }]
    }"#;

    #[test]
    fn parse_route_ok() -> Result {
        let route: RouteFacts = serde_json::from_str::<Response>(RESPONSE)?.into_route()?.into();
        assert_eq!(route.distance, Kilometers(45.2));
        assert_eq!(route.duration, TimeDelta::seconds(2713));
        assert_eq!(
            route.waypoints,
            ["Prins Hendrikkade", "Ring Amsterdam", "Rijksweg A2", "Waterlinieweg", "Biltstraat"],
        );
        Ok(())
    }

    #[test]
    fn parse_no_route() {
        let response: Response = serde_json::from_str(
            r#"{"code": "NoRoute", "message": "Impossible route between points"}"#,
        )
        .unwrap();
        let error = response.into_route().err().unwrap();
        assert_eq!(
            error.to_string(),
            "OSRM could not find a route: NoRoute (Impossible route between points)",
        );
    }

    #[test]
    fn parse_empty_routes() {
        let response: Response = serde_json::from_str(r#"{"code": "Ok", "routes": []}"#).unwrap();
        assert!(response.into_route().is_err());
    }

    #[test]
    fn waypoints_are_capped() {
        let names = ["Aaaa", "Bbbb", "Cccc", "Dddd", "Eeee", "Ffff", "Gggg"];
        assert_eq!(extract_waypoints(names), ["Aaaa", "Bbbb", "Cccc", "Dddd", "Eeee"]);
    }

    #[test]
    fn boilerplate_is_skipped() {
        assert!(!is_place_name("Use the left lane"));
        assert!(!is_place_name("turn right"));
        assert!(!is_place_name("Keep left"));
        assert!(!is_place_name(" Dorpsstraat"));
        assert!(!is_place_name("201 Main Street"));
        assert!(is_place_name("N201"));
        assert!(is_place_name("Exeter Road"));
    }

    #[test]
    fn route_url() -> Result {
        let api = Api::new(Client::new(), Url::parse(DEFAULT_URL)?);
        let url = api.route_url(Coordinates::new(52.37, 4.9), Coordinates::new(52.09, 5.12))?;
        assert_eq!(
            url.as_str(),
            "https://router.project-osrm.org/route/v1/driving/4.9,52.37;5.12,52.09\
             ?steps=true&alternatives=false&overview=false",
        );
        Ok(())
    }

    #[tokio::test]
    #[ignore = "online test"]
    async fn get_route_ok() -> Result {
        let api = Api::new(Client::new(), Url::parse(DEFAULT_URL)?);
        let route =
            api.get_route(Coordinates::new(52.37, 4.90), Coordinates::new(52.09, 5.12)).await?;
        assert!(route.distance > Kilometers(30.0));
        Ok(())
    }
}
