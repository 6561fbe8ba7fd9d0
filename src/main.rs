use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use tripai::config::TripAiConfig;
use tripai::{AppState, PlacesClient, PlanRequestOrchestrator, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripAiConfig::load().context("Failed to load configuration")?;
    let _telemetry = telemetry::init(&config.logging, &config.telemetry)?;

    info!(version = tripai::VERSION, "Starting TripAI");
    if config.gemini.api_key.is_none() {
        warn!("GEMINI_API_KEY not set in config, plan requests will fail");
    }

    let orchestrator = PlanRequestOrchestrator::from_config(&config.gemini)
        .context("Failed to create plan orchestrator")?;
    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        places: Arc::new(PlacesClient::new(&config.maps)),
    };

    web::run(&config.server, state).await
}
