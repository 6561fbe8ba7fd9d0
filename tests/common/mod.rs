//! Shared test doubles
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use serde_json::{Value, json};

use tripai::config::GeminiConfig;
use tripai::{
    GenerationClient, GenerationError, GenerationRequest, PlanRequestOrchestrator, TripRequest,
    VehicleKind,
};

/// Generation client answering from a script and recording every call
#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    pub fn new(responses: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(
        &self,
        _api_key: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::EmptyResponse("script exhausted".into())))
    }
}

pub fn gemini_config(api_key: Option<&str>) -> GeminiConfig {
    GeminiConfig {
        api_key: api_key.map(ToString::to_string),
        ..GeminiConfig::default()
    }
}

pub fn orchestrator(client: Arc<ScriptedClient>, api_key: Option<&str>) -> PlanRequestOrchestrator {
    PlanRequestOrchestrator::new(client, &gemini_config(api_key))
}

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
}

/// Request departing `offset` after [`now`], expressed in UTC+02:00
pub fn request_departing_in(offset: Duration) -> TripRequest {
    let cest = FixedOffset::east_opt(2 * 3600).unwrap();
    TripRequest::new(
        vec![
            "San Francisco, CA".to_string(),
            "Big Sur, CA".to_string(),
            "Los Angeles, CA".to_string(),
        ],
        (now() + offset).with_timezone(&cest),
        VehicleKind::Motorcycle,
        false,
    )
}

pub fn weather_point(location: &str, lat: f64, lng: f64) -> Value {
    json!({
        "location": location,
        "forecast": "Live data unavailable",
        "temperature": "Live data unavailable",
        "lat": lat,
        "lng": lng
    })
}

/// Primary response carrying the given weather points
pub fn plan_json(weather_points: Vec<Value>) -> String {
    json!({
        "tripTitle": "Pacific Coast Highway Adventure",
        "summary": {"totalDistance": "450 miles (724 km)", "estimatedDuration": "9 hours driving"},
        "waypoints": [
            {"location": "San Francisco, CA", "description": "Start at the Golden Gate"},
            {"location": "Big Sur, CA", "description": "Bixby Creek Bridge"},
            {"location": "Los Angeles, CA", "description": "Arrive in Santa Monica"}
        ],
        "routePath": [
            {"lat": 37.7749, "lng": -122.4194},
            {"lat": 36.2704, "lng": -121.8081},
            {"lat": 34.0522, "lng": -118.2437}
        ],
        "weatherPoints": weather_points,
        "trafficAdvisories": [
            {"location": "Highway 1 near Big Sur", "advisory": "Expect slow traffic on weekends."}
        ],
        "fuelStops": [
            {"name": "Shell", "location": "Monterey, CA", "type": "Petrol", "lat": 36.6002, "lng": -121.8947}
        ],
        "pointsOfInterest": [
            {"name": "McWay Falls", "location": "Julia Pfeiffer Burns State Park", "description": "Waterfall onto the beach."}
        ],
        "motorcycleAdvisories": [
            {"title": "Coastal Winds", "details": "Strong crosswinds on exposed sections.", "severity": "Medium"}
        ]
    })
    .to_string()
}

pub fn three_weather_points() -> Vec<Value> {
    vec![
        weather_point("San Francisco, CA", 37.7749, -122.4194),
        weather_point("Big Sur, CA", 36.2704, -121.8081),
        weather_point("Los Angeles, CA", 34.0522, -118.2437),
    ]
}

pub fn live_json(count: usize) -> String {
    let entries: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "location": format!("Point {i}"),
                "forecast": format!("Sunny {i}"),
                "temperature": format!("{}°C", 20 + i)
            })
        })
        .collect();
    Value::Array(entries).to_string()
}
