//! Trip planning workflow
//!
//! This module owns the asynchronous request–merge flow:
//! - Composing instructions and the response schema for the primary call
//! - Deciding whether the trip is near-term enough for live weather
//! - Fetching the live weather overlay and merging it by position

pub mod live_weather;
pub mod orchestrator;
pub mod prompt;
pub mod schema;

pub use live_weather::{LiveWeatherMerger, MergeOutcome};
pub use orchestrator::PlanRequestOrchestrator;

use chrono::{DateTime, TimeZone};

/// Upper bound of the inclusive near-term window, in days before departure
pub const NEAR_TERM_WINDOW_DAYS: f64 = 2.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days from `now` until `travel_time`; negative once departed
#[must_use]
pub fn days_until_travel<A: TimeZone, B: TimeZone>(
    travel_time: &DateTime<A>,
    now: &DateTime<B>,
) -> f64 {
    let delta = travel_time.timestamp_millis() - now.timestamp_millis();
    delta as f64 / MILLIS_PER_DAY
}

/// Whether live weather should be requested for a trip departing in `days`
#[must_use]
pub fn is_near_term(days: f64) -> bool {
    (0.0..=NEAR_TERM_WINDOW_DAYS).contains(&days)
}
