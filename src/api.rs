//! JSON API consumed by the planner frontend

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::TripAiError;
use crate::export;
use crate::geocoding::{GeocodingSuggestion, SuggestionSource};
use crate::models::{TripPlan, TripRequest};
use crate::planner::PlanRequestOrchestrator;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PlanRequestOrchestrator>,
    pub places: Arc<dyn SuggestionSource>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MapsLink {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
}

impl TripAiError {
    /// HTTP status this error is reported with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            TripAiError::Config { .. } | TripAiError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            TripAiError::Upstream { .. } | TripAiError::Format { .. } => StatusCode::BAD_GATEWAY,
            TripAiError::Validation { .. } => StatusCode::BAD_REQUEST,
            TripAiError::Export { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for TripAiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, %status, "Request failed");
        } else {
            warn!(error = %self, %status, "Request rejected");
        }

        let body = ErrorBody {
            error: self.user_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for TripAiError {
    fn from(rejection: JsonRejection) -> Self {
        TripAiError::validation(rejection.body_text())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/plan", post(create_plan))
        .route("/suggestions", get(get_suggestions))
        .route("/export/csv", post(export_csv))
        .route("/export/maps-link", post(export_maps_link))
        .route("/health", get(health))
        .with_state(state)
}

async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Result<Json<TripPlan>, TripAiError> {
    let Json(request) = payload?;
    request.validate()?;

    info!(
        start = request.start(),
        end = request.end(),
        stops = request.waypoints().len(),
        "Plan requested"
    );

    let plan = state.orchestrator.generate_plan(&request).await?;
    Ok(Json(plan))
}

async fn get_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionsQuery>,
) -> Json<Vec<GeocodingSuggestion>> {
    Json(state.places.fetch_suggestions(&query.q).await)
}

async fn export_csv(
    payload: Result<Json<TripPlan>, JsonRejection>,
) -> Result<impl IntoResponse, TripAiError> {
    let Json(plan) = payload?;
    let body = export::plan_to_csv(&plan)?;
    let disposition = format!("attachment; filename=\"{}\"", export::file_name(&plan));

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

async fn export_maps_link(
    payload: Result<Json<TripPlan>, JsonRejection>,
) -> Result<Json<MapsLink>, TripAiError> {
    let Json(plan) = payload?;
    let url = export::directions_url(&plan)?;
    Ok(Json(MapsLink { url }))
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}
