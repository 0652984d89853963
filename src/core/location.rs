use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

use crate::prelude::*;

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl Display for Coordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5},{:.5}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parse `latitude,longitude`.
    fn from_str(s: &str) -> Result<Self> {
        let (latitude, longitude) =
            s.split_once(',').with_context(|| format!("`{s}` is not `latitude,longitude`"))?;
        let latitude: f64 = latitude.trim().parse().context("invalid latitude")?;
        let longitude: f64 = longitude.trim().parse().context("invalid longitude")?;
        ensure!((-90.0..=90.0).contains(&latitude), "latitude {latitude} is out of range");
        ensure!((-180.0..=180.0).contains(&longitude), "longitude {longitude} is out of range");
        Ok(Self { latitude, longitude })
    }
}

/// OpenStreetMap object reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OsmReference {
    pub kind: String,
    pub id: u64,
}

/// User-confirmed trip endpoint.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,

    /// Canonical display name, for example: `Utrecht, Nederland`.
    pub display_name: String,

    pub osm_reference: Option<OsmReference>,
}

impl ResolvedLocation {
    pub fn new(coordinates: Coordinates, display_name: impl Into<String>) -> Self {
        Self { coordinates, display_name: display_name.into(), osm_reference: None }
    }

    /// The part of the display name before the first comma.
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.display_name.split(',').next().unwrap_or_default().trim()
    }
}

impl From<Coordinates> for ResolvedLocation {
    fn from(coordinates: Coordinates) -> Self {
        Self::new(coordinates, coordinates.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coordinates_ok() -> Result {
        let coordinates: Coordinates = "52.3676, 4.9041".parse()?;
        assert_eq!(coordinates, Coordinates::new(52.3676, 4.9041));
        Ok(())
    }

    #[test]
    fn parse_coordinates_out_of_range() {
        assert!("91.0,4.9".parse::<Coordinates>().is_err());
        assert!("52.0,181.0".parse::<Coordinates>().is_err());
    }

    #[test]
    fn parse_place_name_is_not_coordinates() {
        assert!("Amsterdam".parse::<Coordinates>().is_err());
        assert!("Paris, France".parse::<Coordinates>().is_err());
    }

    #[test]
    fn short_name() {
        let location =
            ResolvedLocation::new(Coordinates::new(52.09, 5.12), "Utrecht, Nederland");
        assert_eq!(location.short_name(), "Utrecht");
    }
}
