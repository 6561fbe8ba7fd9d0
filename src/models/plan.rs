//! Trip plan model, shaped exactly like the JSON the model is asked to return

use serde::{Deserialize, Serialize};
use std::fmt;

use super::WeatherPoint;

/// Structured trip plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub trip_title: String,
    pub summary: TripSummary,
    pub waypoints: Vec<Waypoint>,
    /// Points tracing the recommended roads, for drawing on a map
    pub route_path: Vec<RoutePoint>,
    pub weather_points: Vec<WeatherPoint>,
    pub traffic_advisories: Vec<TrafficAdvisory>,
    pub fuel_stops: Vec<FuelStop>,
    pub points_of_interest: Vec<PointOfInterest>,
    /// Advisories for the requested vehicle kind, motorcycle or car
    #[serde(rename = "motorcycleAdvisories")]
    pub vehicle_advisories: Vec<Advisory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSummary {
    /// e.g. "450 miles (724 km)"
    pub total_distance: String,
    /// e.g. "9 hours driving"
    pub estimated_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficAdvisory {
    pub location: String,
    pub advisory: String,
}

/// What a fuel stop offers
///
/// Spellings outside the known set are kept verbatim in [`FuelStopKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FuelStopKind {
    Petrol,
    EvCharger,
    Both,
    Other(String),
}

impl FuelStopKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            FuelStopKind::Petrol => "Petrol",
            FuelStopKind::EvCharger => "EV Charger",
            FuelStopKind::Both => "Both",
            FuelStopKind::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for FuelStopKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "petrol" => FuelStopKind::Petrol,
            "ev charger" | "evcharger" => FuelStopKind::EvCharger,
            "both" => FuelStopKind::Both,
            _ => FuelStopKind::Other(raw),
        }
    }
}

impl From<FuelStopKind> for String {
    fn from(kind: FuelStopKind) -> Self {
        match kind {
            FuelStopKind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FuelStopKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelStop {
    /// e.g. "Shell" or "Electrify America"
    pub name: String,
    /// e.g. "near Big Sur"
    pub location: String,
    #[serde(rename = "type")]
    pub kind: FuelStopKind,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub location: String,
    pub description: String,
}

/// Advisory severity; unknown levels are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Low,
    Medium,
    High,
    Other(String),
}

impl Severity {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Severity::Low,
            "medium" => Severity::Medium,
            "high" => Severity::High,
            _ => Severity::Other(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub title: String,
    pub details: String,
    pub severity: Severity,
}
