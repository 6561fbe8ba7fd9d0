//! Weather points along the route and the live weather overlay

use serde::{Deserialize, Serialize};

/// Sentinel the model is asked to put into weather points awaiting live data
pub const LIVE_DATA_UNAVAILABLE: &str = "Live data unavailable";

/// Weather forecast for one location along the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPoint {
    /// City or area the forecast is for
    pub location: String,
    /// Short description, e.g. "Sunny"
    pub forecast: String,
    /// Display temperature, e.g. "75°F / 24°C"
    pub temperature: String,
    pub lat: f64,
    pub lng: f64,
}

impl WeatherPoint {
    /// Weather point still carrying the placeholder sentinel
    #[must_use]
    pub fn placeholder(location: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            location: location.into(),
            forecast: LIVE_DATA_UNAVAILABLE.to_string(),
            temperature: LIVE_DATA_UNAVAILABLE.to_string(),
            lat,
            lng,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.forecast == LIVE_DATA_UNAVAILABLE || self.temperature == LIVE_DATA_UNAVAILABLE
    }

    /// Overwrite the forecast with live data, keeping location and coordinates
    pub fn apply_live(&mut self, live: LiveWeather) {
        self.forecast = live.forecast;
        self.temperature = live.temperature;
    }
}

/// One entry of the live weather response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveWeather {
    /// Echo of the requested location; informational only
    #[serde(default)]
    pub location: Option<String>,
    pub forecast: String,
    pub temperature: String,
}
