//! `TripAI` - AI-assisted road trip planning
//!
//! This library turns a route request into a structured trip plan using a
//! generative model, overlays live weather for imminent departures, and offers
//! address autocomplete and plan exports to the browser frontend.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod geocoding;
pub mod llm;
pub mod models;
pub mod planner;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use api::AppState;
pub use config::TripAiConfig;
pub use error::TripAiError;
pub use geocoding::{GeocodingSuggestion, PlacesClient, SuggestionSource};
pub use llm::{GeminiClient, GenerationClient, GenerationError, GenerationRequest};
pub use models::{TripPlan, TripRequest, VehicleKind, WeatherPoint};
pub use planner::{MergeOutcome, PlanRequestOrchestrator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripAiError>;
