//! Data models for the `TripAI` backend
//!
//! This module contains the core domain models organized by concern:
//! - Request: what the user asked for (route, departure, vehicle)
//! - Plan: the structured trip plan returned by the model
//! - Weather: weather points and the live weather overlay

pub mod plan;
pub mod request;
pub mod weather;

// Re-export all public types for convenient access
pub use plan::{
    Advisory, FuelStop, FuelStopKind, PointOfInterest, RoutePoint, Severity, TrafficAdvisory,
    TripPlan, TripSummary, Waypoint,
};
pub use request::{TripRequest, VehicleKind};
pub use weather::{LIVE_DATA_UNAVAILABLE, LiveWeather, WeatherPoint};
