//! [Nominatim](https://nominatim.org/release-docs/latest/api/Overview/) location resolver.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::{
    api::LocationResolver,
    core::location::{Coordinates, OsmReference, ResolvedLocation},
    prelude::*,
};

pub const DEFAULT_URL: &str = "https://nominatim.openstreetmap.org";

pub struct Api {
    client: Client,
    base_url: Url,
}

impl Api {
    pub const fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("invalid base URL"))?
            .pop_if_empty()
            .push(endpoint);
        url.query_pairs_mut().append_pair("format", "json").append_pair("addressdetails", "1");
        Ok(url)
    }
}

#[async_trait]
impl LocationResolver for Api {
    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<ResolvedLocation>> {
        let mut url = self.url("search")?;
        url.query_pairs_mut().append_pair("q", query).append_pair("limit", &limit.to_string());
        let places: Vec<Place> = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to call Nominatim")?
            .error_for_status()
            .context("Nominatim search failed")?
            .json()
            .await
            .context("failed to deserialize the Nominatim response")?;
        debug!(n_places = places.len(), "fetched");
        Ok(places.into_iter().map(ResolvedLocation::from).collect())
    }

    #[instrument(skip_all, fields(coordinates = %coordinates))]
    async fn reverse(&self, coordinates: Coordinates) -> Result<ResolvedLocation> {
        let mut url = self.url("reverse")?;
        url.query_pairs_mut()
            .append_pair("lat", &coordinates.latitude.to_string())
            .append_pair("lon", &coordinates.longitude.to_string());
        let response: ReverseResponse = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to call Nominatim")?
            .error_for_status()
            .context("Nominatim reverse geocoding failed")?
            .json()
            .await
            .context("failed to deserialize the Nominatim response")?;
        response.into_location(coordinates)
    }
}

#[serde_as]
#[derive(Deserialize)]
struct Place {
    #[serde_as(as = "DisplayFromStr")]
    lat: f64,

    #[serde_as(as = "DisplayFromStr")]
    lon: f64,

    display_name: String,

    #[serde(default)]
    osm_type: Option<String>,

    #[serde(default)]
    osm_id: Option<u64>,
}

impl From<Place> for ResolvedLocation {
    fn from(place: Place) -> Self {
        Self {
            coordinates: Coordinates::new(place.lat, place.lon),
            display_name: place.display_name,
            osm_reference: place
                .osm_type
                .zip(place.osm_id)
                .map(|(kind, id)| OsmReference { kind, id }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReverseResponse {
    Place(Place),
    Error { error: String },
}

impl ReverseResponse {
    fn into_location(self, coordinates: Coordinates) -> Result<ResolvedLocation> {
        match self {
            Self::Place(place) => Ok(place.into()),
            Self::Error { error } => {
                bail!("could not determine the address for {coordinates}: {error}")
            }
        }
    }
}
