use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

/// Build a client shared by the service adapters.
///
/// Public OpenStreetMap services reject requests without an identifying user agent.
pub fn try_new(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to build the HTTP client")
}
