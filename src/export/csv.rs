//! CSV export of a trip plan
//!
//! One row per list entry, sections in a fixed order, five columns shared by
//! all sections.

use csv::{QuoteStyle, WriterBuilder};

use crate::TripAiError;
use crate::models::TripPlan;

pub const HEADER: [&str; 5] = [
    "Category",
    "Name/Title",
    "Location/Details",
    "Description",
    "Severity/Type",
];

/// Render `plan` as a CSV document
pub fn plan_to_csv(plan: &TripPlan) -> crate::Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());

    let mut write = |record: [&str; 5]| {
        writer
            .write_record(record)
            .map_err(|e| TripAiError::export(format!("Failed to write CSV row: {e}")))
    };

    write(HEADER)?;

    for waypoint in &plan.waypoints {
        write(["Waypoint", &waypoint.location, "", &waypoint.description, ""])?;
    }

    for stop in &plan.fuel_stops {
        write(["Fuel Stop", &stop.name, &stop.location, "", stop.kind.as_str()])?;
    }

    for poi in &plan.points_of_interest {
        write(["Point of Interest", &poi.name, &poi.location, &poi.description, ""])?;
    }

    for weather in &plan.weather_points {
        write(["Weather", &weather.location, &weather.temperature, &weather.forecast, ""])?;
    }

    for traffic in &plan.traffic_advisories {
        write(["Traffic Advisory", &traffic.location, "", &traffic.advisory, ""])?;
    }

    for advisory in &plan.vehicle_advisories {
        write(["Advisory", &advisory.title, &advisory.details, "", advisory.severity.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TripAiError::export(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| TripAiError::export(format!("CSV is not UTF-8: {e}")))
}

/// Download name derived from the trip title
#[must_use]
pub fn file_name(plan: &TripPlan) -> String {
    let stem: String = plan
        .trip_title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_trip_plan.csv")
}
