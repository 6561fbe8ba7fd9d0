//! Plan request orchestration
//!
//! Primary call for the full plan, then, for near-term trips, a best-effort
//! live weather overlay. The two calls are strictly sequential since the
//! second one needs the weather points of the first.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use super::live_weather::{LiveWeatherMerger, MergeOutcome};
use super::{days_until_travel, is_near_term, prompt, schema};
use crate::TripAiError;
use crate::config::GeminiConfig;
use crate::llm::{GeminiClient, GenerationClient, GenerationRequest};
use crate::models::{TripPlan, TripRequest};

const INVALID_FORMAT_MESSAGE: &str = "The AI returned an invalid response format. Please try again.";
const PARSE_FAILURE_MESSAGE: &str =
    "Failed to parse the trip plan from the AI. The format was invalid.";

/// Builds trip plans from route requests
pub struct PlanRequestOrchestrator {
    client: Arc<dyn GenerationClient>,
    api_key: Option<String>,
    plan_model: String,
    plan_temperature: f32,
    live_weather: LiveWeatherMerger,
}

impl PlanRequestOrchestrator {
    /// Orchestrator backed by the Gemini HTTP client
    pub fn from_config(config: &GeminiConfig) -> crate::Result<Self> {
        let client = GeminiClient::from_config(config)
            .map_err(|e| TripAiError::config(format!("Failed to create Gemini client: {e}")))?;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Orchestrator over any generation client
    pub fn new(client: Arc<dyn GenerationClient>, config: &GeminiConfig) -> Self {
        let live_weather = LiveWeatherMerger::new(
            Arc::clone(&client),
            config.weather_model.clone(),
            config.weather_temperature,
        );

        Self {
            client,
            api_key: config.api_key.clone(),
            plan_model: config.plan_model.clone(),
            plan_temperature: config.plan_temperature,
            live_weather,
        }
    }

    /// Generate a trip plan for `request`, departing relative to the current time
    pub async fn generate_plan(&self, request: &TripRequest) -> crate::Result<TripPlan> {
        self.generate_plan_at(request, Utc::now()).await
    }

    /// Generate a trip plan with an explicit notion of "now"
    #[instrument(
        skip(self, request, now),
        fields(
            destinations = request.destinations.len(),
            vehicle = %request.vehicle,
            electric = request.is_electric
        )
    )]
    pub async fn generate_plan_at(
        &self,
        request: &TripRequest,
        now: DateTime<Utc>,
    ) -> crate::Result<TripPlan> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TripAiError::config("GEMINI_API_KEY not set in config."))?;

        let days = days_until_travel(&request.travel_time, &now);
        let near_term = is_near_term(days);
        debug!(days_until_travel = days, near_term, "Planning trip");

        let generation = GenerationRequest {
            model: self.plan_model.clone(),
            instructions: prompt::plan_instructions(request, near_term),
            schema: schema::trip_plan_schema(),
            temperature: self.plan_temperature,
        };

        let text = self.client.generate(api_key, &generation).await.map_err(|e| {
            error!(error = %e, "Error calling the generation API");
            TripAiError::upstream(e.to_string())
        })?;

        let mut plan = parse_plan(&text)?;
        info!(
            title = %plan.trip_title,
            weather_points = plan.weather_points.len(),
            "Trip plan generated"
        );

        if near_term && !plan.weather_points.is_empty() {
            self.overlay_live_weather(api_key, &mut plan).await;
        }

        Ok(plan)
    }

    /// Best-effort: any failure keeps the placeholder weather
    async fn overlay_live_weather(&self, api_key: &str, plan: &mut TripPlan) {
        info!("Fetching live weather data for the trip");

        let live = match self.live_weather.fetch(api_key, &plan.weather_points).await {
            Ok(live) => live,
            Err(e) => {
                warn!(error = %e, "Could not fetch live weather, proceeding with placeholder data");
                return;
            }
        };

        match LiveWeatherMerger::apply(&mut plan.weather_points, live) {
            MergeOutcome::Merged(count) => {
                info!(count, "Successfully merged live weather data");
            }
            MergeOutcome::CountMismatch { expected, received } => {
                warn!(
                    expected,
                    received, "Live weather data length mismatch, using placeholder data"
                );
            }
        }
    }
}

/// Check the JSON envelope, then deserialize the plan
fn parse_plan(text: &str) -> crate::Result<TripPlan> {
    let text = text.trim();
    if !text.starts_with('{') || !text.ends_with('}') {
        warn!(response_len = text.len(), "Response is not a JSON object");
        return Err(TripAiError::format(INVALID_FORMAT_MESSAGE));
    }

    serde_json::from_str(text).map_err(|e| {
        warn!(error = %e, "Trip plan did not match the expected shape");
        TripAiError::format(PARSE_FAILURE_MESSAGE)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("Here is your plan: {}")]
    #[case("{\"tripTitle\": \"x\"} trailing")]
    #[case("```json\n{}\n```")]
    #[case("[{}]")]
    fn test_parse_plan_rejects_bad_envelope(#[case] text: &str) {
        let err = parse_plan(text).unwrap_err();
        assert!(matches!(err, TripAiError::Format { ref message } if message == INVALID_FORMAT_MESSAGE));
    }

    #[test]
    fn test_parse_plan_rejects_invalid_json_inside_envelope() {
        let err = parse_plan("{ not json }").unwrap_err();
        assert!(matches!(err, TripAiError::Format { ref message } if message == PARSE_FAILURE_MESSAGE));
    }

    #[test]
    fn test_parse_plan_rejects_wrong_shape() {
        let err = parse_plan(r#"{"tripTitle": "Only a title"}"#).unwrap_err();
        assert!(matches!(err, TripAiError::Format { .. }));
    }
}
