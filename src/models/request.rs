//! Trip request model: ordered destinations, departure time and vehicle

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TripAiError;

/// Kind of vehicle the trip is planned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Motorcycle,
    Car,
}

impl VehicleKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Car => "car",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route request as submitted by the planner form
///
/// The first destination is the start, the last one the end, and everything
/// in between are ordered stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    /// Ordered destinations, start first and end last
    pub destinations: Vec<String>,
    /// Planned departure, with the traveller's UTC offset
    #[serde(rename = "travelDateTime")]
    pub travel_time: DateTime<FixedOffset>,
    /// Vehicle the plan is tailored to
    #[serde(rename = "vehicleType")]
    pub vehicle: VehicleKind,
    /// Whether the vehicle is electric
    #[serde(default)]
    pub is_electric: bool,
}

impl TripRequest {
    #[must_use]
    pub fn new(
        destinations: Vec<String>,
        travel_time: DateTime<FixedOffset>,
        vehicle: VehicleKind,
        is_electric: bool,
    ) -> Self {
        Self {
            destinations,
            travel_time,
            vehicle,
            is_electric,
        }
    }

    /// Starting point of the trip
    #[must_use]
    pub fn start(&self) -> &str {
        self.destinations.first().map_or("", String::as_str)
    }

    /// Final destination of the trip
    #[must_use]
    pub fn end(&self) -> &str {
        self.destinations.last().map_or("", String::as_str)
    }

    /// Interior stops, in travel order
    #[must_use]
    pub fn waypoints(&self) -> &[String] {
        match self.destinations.len() {
            0..=2 => &[],
            len => &self.destinations[1..len - 1],
        }
    }

    /// Check the business rules the planner form enforces before submitting
    pub fn validate(&self) -> crate::Result<()> {
        if self.destinations.len() < 2 {
            return Err(TripAiError::validation(
                "A trip needs at least a start and an end destination",
            ));
        }

        if let Some(position) = self
            .destinations
            .iter()
            .position(|destination| destination.trim().is_empty())
        {
            return Err(TripAiError::validation(format!(
                "Destination {} cannot be empty",
                position + 1
            )));
        }

        Ok(())
    }
}
