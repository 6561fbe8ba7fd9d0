//! Live weather overlay
//!
//! Asks the model for current conditions at the plan's weather points and
//! merges the answer back by index. The merger never reorders and never
//! matches by name; cardinality is the only consistency check.

use std::sync::Arc;
use tracing::{debug, instrument};

use super::{prompt, schema};
use crate::TripAiError;
use crate::llm::{GenerationClient, GenerationRequest};
use crate::models::{LiveWeather, WeatherPoint};

/// Result of overlaying live weather onto placeholder points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Every point received live data
    Merged(usize),
    /// Response size differed from the request; nothing was modified
    CountMismatch { expected: usize, received: usize },
}

/// Issues the weather-only generation call
pub struct LiveWeatherMerger {
    client: Arc<dyn GenerationClient>,
    model: String,
    temperature: f32,
}

impl LiveWeatherMerger {
    pub fn new(client: Arc<dyn GenerationClient>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    /// Fetch live weather for `points`, one entry per point in the same order.
    ///
    /// Transport and parse failures are reported as [`TripAiError::Upstream`].
    #[instrument(skip(self, api_key, points), fields(points = points.len()))]
    pub async fn fetch(
        &self,
        api_key: &str,
        points: &[WeatherPoint],
    ) -> crate::Result<Vec<LiveWeather>> {
        let instructions = prompt::live_weather_instructions(points).map_err(|e| {
            TripAiError::upstream(format!("Failed to encode live weather locations: {e}"))
        })?;

        let request = GenerationRequest {
            model: self.model.clone(),
            instructions,
            schema: schema::live_weather_schema(),
            temperature: self.temperature,
        };

        let text = self
            .client
            .generate(api_key, &request)
            .await
            .map_err(|e| TripAiError::upstream(format!("Failed to fetch live weather data: {e}")))?;

        let live: Vec<LiveWeather> = serde_json::from_str(text.trim()).map_err(|e| {
            TripAiError::upstream(format!("Failed to parse live weather data: {e}"))
        })?;

        debug!(received = live.len(), "Live weather response parsed");
        Ok(live)
    }

    /// Overwrite forecast and temperature of `points` positionally.
    ///
    /// Points are left untouched unless `live` has exactly one entry per point.
    pub fn apply(points: &mut [WeatherPoint], live: Vec<LiveWeather>) -> MergeOutcome {
        if live.len() != points.len() {
            return MergeOutcome::CountMismatch {
                expected: points.len(),
                received: live.len(),
            };
        }

        for (point, live) in points.iter_mut().zip(live) {
            point.apply_live(live);
        }

        MergeOutcome::Merged(points.len())
    }
}
