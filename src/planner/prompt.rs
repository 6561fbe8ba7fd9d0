//! Natural-language instructions for the primary and live weather calls

use serde::Serialize;

use crate::models::{LIVE_DATA_UNAVAILABLE, TripRequest, VehicleKind, WeatherPoint};

/// Location payload embedded in the live weather instructions
#[derive(Debug, Serialize)]
struct LocationData<'a> {
    location: &'a str,
    lat: f64,
    lng: f64,
}

fn vehicle_description(vehicle: VehicleKind, is_electric: bool) -> String {
    if is_electric {
        format!("an electric {vehicle}")
    } else {
        format!("a gas-powered {vehicle}")
    }
}

fn route_description(request: &TripRequest) -> String {
    let waypoints = request.waypoints();
    if waypoints.is_empty() {
        format!("from {} to {}.", request.start(), request.end())
    } else {
        format!(
            "from {} to {}, via the following stops in order: {}.",
            request.start(),
            request.end(),
            waypoints.join(", ")
        )
    }
}

fn fuel_instruction(is_electric: bool) -> &'static str {
    if is_electric {
        "The list of 'fuelStops' must prioritize EV charging stations. Also provide their lat/lng coordinates and a URL."
    } else {
        "The list of 'fuelStops' should be petrol stations. Also provide their lat/lng coordinates and a URL."
    }
}

fn advisory_instruction(vehicle: VehicleKind) -> &'static str {
    match vehicle {
        VehicleKind::Motorcycle => {
            "Crucial motorcycle-specific advisories (e.g., road conditions, crosswinds, wildlife, high-theft areas)."
        }
        VehicleKind::Car => {
            "Crucial car-specific advisories (e.g., parking information, toll roads, narrow streets, road closures)."
        }
    }
}

fn weather_instruction(near_term: bool) -> String {
    if near_term {
        format!(
            "For the 'weatherPoints' section, populate it with 5-7 key locations along the route, including their coordinates. \
             For the 'forecast' and 'temperature' fields, use the placeholder text '{LIVE_DATA_UNAVAILABLE}' as this will be updated separately with real-time data."
        )
    } else {
        "For the 'weatherPoints' section, generate a predictive weather forecast for 5-7 key locations along the route, \
         with coordinates, valid for the estimated time of arrival at those locations based on the travel date."
            .to_string()
    }
}

/// Instructions for the full trip plan
#[must_use]
pub fn plan_instructions(request: &TripRequest, near_term: bool) -> String {
    let vehicle = request.vehicle;
    let departure_date = request.travel_time.format("%A, %B %-d, %Y");
    let departure_time = request.travel_time.format("%H:%M (UTC%:z)");

    format!(
        "Act as an expert trip planner for {vehicle_description}. Create a detailed trip plan for a ride {route}
The user plans to depart on {departure_date} at {departure_time}. All time-sensitive information like traffic should be based on this.

The plan must be comprehensive and tailored for a {vehicle}. Include the following sections:
1.  A catchy, inspiring title for the trip.
2.  A summary with total distance and estimated driving time.
3.  A list of logical waypoints describing each leg of the journey. This should incorporate the user's requested stops.
4.  A 'routePath' of 15-20 latitude/longitude points that trace the recommended route for drawing on a map.
5.  {weather}
6.  'trafficAdvisories' highlighting areas known for congestion around the user's travel time.
7.  {fuel}
8.  3-5 interesting points of interest.
9.  {advisory} Assign a severity (Low, Medium, High).

Generate the output in a structured JSON format that strictly adheres to the provided schema.",
        vehicle_description = vehicle_description(vehicle, request.is_electric),
        route = route_description(request),
        weather = weather_instruction(near_term),
        fuel = fuel_instruction(request.is_electric),
        advisory = advisory_instruction(vehicle),
    )
}

/// Instructions for the live weather overlay, locations in input order
pub fn live_weather_instructions(points: &[WeatherPoint]) -> serde_json::Result<String> {
    let locations: Vec<LocationData<'_>> = points
        .iter()
        .map(|point| LocationData {
            location: &point.location,
            lat: point.lat,
            lng: point.lng,
        })
        .collect();

    Ok(format!(
        "Act as a live weather API. Based on the current, real-time weather conditions, provide a brief forecast and temperature for the following list of locations.
Return the data as a JSON array that strictly matches the provided schema, with one weather entry for each location in the same order they were provided.

Locations: {}",
        serde_json::to_string(&locations)?
    ))
}
