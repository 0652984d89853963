pub mod activity_advisor;
pub mod client;
pub mod gemini;
pub mod location_resolver;
pub mod nominatim;
pub mod osrm;
pub mod route_provider;

#[cfg(test)]
pub mod stub;

pub use self::{
    activity_advisor::ActivityAdvisor,
    location_resolver::LocationResolver,
    route_provider::RouteProvider,
};
