pub mod battery;
pub mod location;
pub mod plan;
pub mod planner;
pub mod preferences;
pub mod request;
pub mod route;
pub mod settings;
pub mod simulator;
pub mod timeline;
