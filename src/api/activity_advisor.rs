use async_trait::async_trait;

use crate::{core::preferences::UserPreferences, prelude::*, quantity::time::Hours};

pub const DISABLED_FALLBACK: &str =
    "Activity suggestions disabled (API key missing). Enjoy the charge!";
pub const ERROR_FALLBACK: &str = "Error suggesting activities. Enjoy your break.";
pub const EMPTY_FALLBACK: &str = "No specific activities suggested. Enjoy your break!";

#[async_trait]
pub trait ActivityAdvisor: Sync {
    /// Whether the advisor is able to suggest anything at all.
    fn is_available(&self) -> bool {
        true
    }

    /// Suggest short activities around the charging station for the time of the stop.
    async fn suggest(
        &self,
        station: &str,
        dwell_time: Hours,
        preferences: UserPreferences,
    ) -> Result<Vec<String>>;

    /// Same as [`ActivityAdvisor::suggest`], but never fails and never returns an empty list.
    #[instrument(skip_all, fields(station = station))]
    async fn suggest_or_fallback(
        &self,
        station: &str,
        dwell_time: Hours,
        preferences: UserPreferences,
    ) -> Vec<String> {
        if !self.is_available() {
            return vec![DISABLED_FALLBACK.to_owned()];
        }
        match self.suggest(station, dwell_time, preferences).await {
            Ok(activities) if activities.is_empty() => vec![EMPTY_FALLBACK.to_owned()],
            Ok(activities) => activities,
            Err(error) => {
                warn!("failed to suggest activities: {error:#}");
                vec![ERROR_FALLBACK.to_owned()]
            }
        }
    }
}

/// Advisor used when no suggestion service is configured.
pub struct Disabled;

#[async_trait]
impl ActivityAdvisor for Disabled {
    fn is_available(&self) -> bool {
        false
    }

    async fn suggest(&self, _: &str, _: Hours, _: UserPreferences) -> Result<Vec<String>> {
        bail!("activity suggestions are disabled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::stub::{EchoAdvisor, FailingAdvisor, SilentAdvisor};

    #[tokio::test]
    async fn echo_passes_through() {
        let activities =
            EchoAdvisor.suggest_or_fallback("Station", Hours(0.5), UserPreferences::empty()).await;
        assert_eq!(activities, ["Stretch your legs near Station for 30 min"]);
    }

    #[tokio::test]
    async fn disabled_fallback() {
        let activities =
            Disabled.suggest_or_fallback("Station", Hours(0.5), UserPreferences::empty()).await;
        assert_eq!(activities, [DISABLED_FALLBACK]);
    }

    #[tokio::test]
    async fn error_fallback() {
        let activities = FailingAdvisor
            .suggest_or_fallback("Station", Hours(0.5), UserPreferences::empty())
            .await;
        assert_eq!(activities, [ERROR_FALLBACK]);
    }

    #[tokio::test]
    async fn empty_fallback() {
        let activities = SilentAdvisor
            .suggest_or_fallback("Station", Hours(0.5), UserPreferences::empty())
            .await;
        assert_eq!(activities, [EMPTY_FALLBACK]);
    }
}
