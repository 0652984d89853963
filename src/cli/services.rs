//! Collaborator service arguments.

use std::time::Duration;

use clap::Parser;
use reqwest::{Client, Url};

use crate::{
    api::{
        ActivityAdvisor,
        activity_advisor::Disabled,
        client,
        gemini,
        nominatim,
        osrm,
    },
    prelude::*,
};

#[must_use]
#[derive(Parser)]
pub struct ServiceArgs {
    /// OSRM API base URL.
    #[clap(long = "osrm-url", default_value = osrm::DEFAULT_URL, env = "OSRM_URL")]
    pub osrm_url: Url,

    /// Nominatim API base URL.
    #[clap(long = "nominatim-url", default_value = nominatim::DEFAULT_URL, env = "NOMINATIM_URL")]
    pub nominatim_url: Url,

    #[clap(long = "http-timeout-secs", default_value = "15", env = "HTTP_TIMEOUT_SECS")]
    pub timeout_secs: u64,
}

impl ServiceArgs {
    pub fn client(&self) -> Result<Client> {
        client::try_new(Duration::from_secs(self.timeout_secs))
    }

    pub fn route_provider(&self, client: Client) -> osrm::Api {
        osrm::Api::new(client, self.osrm_url.clone())
    }

    pub fn location_resolver(&self, client: Client) -> nominatim::Api {
        nominatim::Api::new(client, self.nominatim_url.clone())
    }
}

#[must_use]
#[derive(Parser)]
pub struct GeminiArgs {
    /// Gemini API key. Activity suggestions are disabled without it.
    #[clap(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[clap(long = "gemini-model", default_value = gemini::DEFAULT_MODEL, env = "GEMINI_MODEL")]
    pub model: String,

    /// Gemini API base URL.
    #[clap(long = "gemini-url", default_value = gemini::DEFAULT_URL, env = "GEMINI_URL")]
    pub base_url: Url,
}

impl GeminiArgs {
    pub fn advisor(&self, client: Client) -> Box<dyn ActivityAdvisor> {
        match &self.api_key {
            Some(api_key) if !api_key.trim().is_empty() => Box::new(gemini::Api::new(
                client,
                self.base_url.clone(),
                api_key.trim().to_owned(),
                self.model.clone(),
            )),
            _ => {
                warn!("Gemini API key is not configured, activity suggestions are disabled");
                Box::new(Disabled)
            }
        }
    }
}
