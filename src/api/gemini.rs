//! [Gemini](https://ai.google.dev/api/generate-content) activity advisor.

use async_trait::async_trait;
use itertools::Itertools;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    api::ActivityAdvisor,
    core::preferences::{Preference, UserPreferences},
    prelude::*,
    quantity::time::Hours,
};

pub const DEFAULT_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct Api {
    client: Client,
    base_url: Url,
    api_key: String,
    model: String,
}

impl Api {
    pub const fn new(client: Client, base_url: Url, api_key: String, model: String) -> Self {
        Self { client, base_url, api_key, model }
    }

    fn url(&self) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("invalid base URL"))?
            .pop_if_empty()
            .push("models")
            .push(&format!("{}:generateContent", self.model));
        Ok(url)
    }
}

#[async_trait]
impl ActivityAdvisor for Api {
    async fn suggest(
        &self,
        station: &str,
        dwell_time: Hours,
        preferences: UserPreferences,
    ) -> Result<Vec<String>> {
        let request = GenerateContentRequest::from(build_prompt(station, dwell_time, preferences));
        let response: GenerateContentResponse = self
            .client
            .post(self.url()?)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("failed to call Gemini")?
            .error_for_status()
            .context("Gemini request failed")?
            .json()
            .await
            .context("failed to deserialize the Gemini response")?;
        Ok(split_lines(&response.text()))
    }
}

fn build_prompt(station: &str, dwell_time: Hours, preferences: UserPreferences) -> String {
    let hints = preferences
        .iter()
        .filter(|preference| *preference != Preference::AvoidSlowChargers)
        .join(", ");
    let hints = if hints.is_empty() {
        String::new()
    } else {
        format!("Consider these preferences: {hints}.")
    };
    format!(
        "You are a travel assistant suggesting activities near an EV charging station.
An EV is charging at a location described as \"{station}\".
The charging will take approximately {minutes:.0} minutes.
Suggest 1 to 3 brief, interesting activities that can be done within this time and are likely \
within walking distance (e.g., 5-15 minutes walk).
Examples: \"Grab a coffee at 'The Daily Grind' - 2 min walk\", \
\"Relax at 'City Park Bench' - 5 min walk\".
{hints}
Provide the suggestions as a simple list, each item on a new line. \
Do not use markdown list formatting (like '-' or '*').",
        minutes = dwell_time.as_minutes().round(),
    )
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect()
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl From<String> for GenerateContentRequest {
    fn from(prompt: String) -> Self {
        Self { contents: vec![Content { parts: vec![Part { text: prompt }] }] }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, empty when there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| candidate.content.parts.iter().map(|part| part.text.as_str()).join(""))
            .unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_with_preferences() {
        let prompt = build_prompt(
            "SimuCharge Station #1 (near A12)",
            Hours::from_minutes(37.5),
            Preference::FoodOptions | Preference::AvoidSlowChargers | Preference::PetFriendly,
        );
        assert!(prompt.contains("\"SimuCharge Station #1 (near A12)\""), "{prompt}");
        assert!(prompt.contains("approximately 38 minutes"), "{prompt}");
        assert!(
            prompt.contains(
                "Consider these preferences: food options (cafes, restaurants), pet-friendly spots."
            ),
            "{prompt}",
        );
        assert!(!prompt.contains("slow chargers"), "{prompt}");
    }

    #[test]
    fn prompt_without_preferences() {
        let prompt = build_prompt(
            "Station",
            Hours(0.25),
            UserPreferences::only(Preference::AvoidSlowChargers),
        );
        assert!(!prompt.contains("Consider these preferences"), "{prompt}");
    }

    #[test]
    fn parse_response() -> Result {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [
                            {"text": "Grab a coffee - 2 min walk\n\n  Walk along the canal"},
                            {"text": " - 10 min walk  \n"}
                        ]
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        )?;
        assert_eq!(
            split_lines(&response.text()),
            ["Grab a coffee - 2 min walk", "Walk along the canal - 10 min walk"],
        );
        Ok(())
    }

    #[test]
    fn parse_blocked_response() -> Result {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)?;
        assert!(split_lines(&response.text()).is_empty());
        Ok(())
    }

    #[test]
    fn url() -> Result {
        let api = Api::new(
            Client::new(),
            Url::parse(DEFAULT_URL)?,
            "key".to_owned(),
            DEFAULT_MODEL.to_owned(),
        );
        assert_eq!(
            api.url()?.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/\
             gemini-2.5-flash:generateContent",
        );
        Ok(())
    }
}
