use async_trait::async_trait;

use crate::{
    core::{location::Coordinates, route::RouteFacts},
    prelude::*,
};

#[async_trait]
pub trait RouteProvider: Sync {
    /// Get the driving distance, duration and named waypoints between the two points.
    async fn get_route(&self, from: Coordinates, to: Coordinates) -> Result<RouteFacts>;
}
