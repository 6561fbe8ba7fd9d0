//! Response schemas sent along with each generation call
//!
//! Property names here must match the serde names in [`crate::models`].

use serde_json::{Value, json};

/// Schema for the full trip plan
#[must_use]
pub fn trip_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tripTitle": { "type": "STRING", "description": "A catchy title for the trip." },
            "summary": {
                "type": "OBJECT",
                "properties": {
                    "totalDistance": { "type": "STRING", "description": "e.g., '450 miles (724 km)'" },
                    "estimatedDuration": { "type": "STRING", "description": "e.g., '9 hours driving'" },
                },
                "required": ["totalDistance", "estimatedDuration"],
            },
            "waypoints": {
                "type": "ARRAY",
                "description": "A list of 4-6 key waypoints or segments of the journey.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "location": { "type": "STRING", "description": "City, town, or specific point of interest." },
                        "description": { "type": "STRING", "description": "A brief description of this leg of the journey or what to see there." },
                    },
                    "required": ["location", "description"],
                },
            },
            "routePath": {
                "type": "ARRAY",
                "description": "An array of 15-20 latitude/longitude points to draw the route on a map. These points should trace the main roads of the recommended route.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "lat": { "type": "NUMBER", "description": "Latitude" },
                        "lng": { "type": "NUMBER", "description": "Longitude" },
                    },
                    "required": ["lat", "lng"],
                },
            },
            "weatherPoints": {
                "type": "ARRAY",
                "description": "Weather forecasts for 5-7 key locations along the route, relevant to the travel date and time. Include coordinates for each location.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "location": { "type": "STRING", "description": "The city or area for the forecast." },
                        "forecast": { "type": "STRING", "description": "e.g., 'Sunny, 75°F'" },
                        "temperature": { "type": "STRING", "description": "e.g., '75°F / 24°C'" },
                        "lat": { "type": "NUMBER", "description": "Latitude of the weather location." },
                        "lng": { "type": "NUMBER", "description": "Longitude of the weather location." },
                    },
                    "required": ["location", "forecast", "temperature", "lat", "lng"],
                },
            },
            "trafficAdvisories": {
                "type": "ARRAY",
                "description": "A list of 2-4 potential traffic-heavy areas or times based on the provided travel schedule.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "location": { "type": "STRING", "description": "The area or highway segment prone to traffic." },
                        "advisory": { "type": "STRING", "description": "Details about the traffic, e.g., 'Heavy commute traffic likely between 4 PM - 6 PM'." },
                    },
                    "required": ["location", "advisory"],
                },
            },
            "fuelStops": {
                "type": "ARRAY",
                "description": "A list of recommended petrol or EV charging stations along the route.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "e.g., 'Shell' or 'Electrify America'." },
                        "location": { "type": "STRING", "description": "e.g., 'near Big Sur'." },
                        "type": {
                            "type": "STRING",
                            "description": "Type of stop: 'Petrol', 'EV Charger', or 'Both'.",
                            "enum": ["Petrol", "EV Charger", "Both"],
                        },
                        "lat": { "type": "NUMBER", "description": "Latitude of the fuel stop." },
                        "lng": { "type": "NUMBER", "description": "Longitude of the fuel stop." },
                        "url": { "type": "STRING", "description": "A URL to the station's details, like a Google Maps link or official site." },
                    },
                    "required": ["name", "location", "type", "lat", "lng"],
                },
            },
            "pointsOfInterest": {
                "type": "ARRAY",
                "description": "3-5 interesting tourist spots or attractions.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "location": { "type": "STRING" },
                        "description": { "type": "STRING" },
                    },
                    "required": ["name", "location", "description"],
                },
            },
            "motorcycleAdvisories": {
                "type": "ARRAY",
                "description": "Crucial advisories for the specified vehicle type.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "details": { "type": "STRING" },
                        "severity": {
                            "type": "STRING",
                            "description": "Severity of the advisory: 'Low', 'Medium', or 'High'.",
                            "enum": ["Low", "Medium", "High"],
                        },
                    },
                    "required": ["title", "details", "severity"],
                },
            },
        },
        "required": [
            "tripTitle",
            "summary",
            "waypoints",
            "routePath",
            "weatherPoints",
            "trafficAdvisories",
            "fuelStops",
            "pointsOfInterest",
            "motorcycleAdvisories",
        ],
    })
}

/// Schema for the live weather overlay: one entry per requested location
#[must_use]
pub fn live_weather_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "location": { "type": "STRING", "description": "The location name, matching the input." },
                "forecast": { "type": "STRING", "description": "e.g., 'Partly Cloudy'" },
                "temperature": { "type": "STRING", "description": "e.g., '68°F / 20°C'" },
            },
            "required": ["location", "forecast", "temperature"],
        },
    })
}
