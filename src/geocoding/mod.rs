//! Address autocomplete
//!
//! Suggestions for the destination inputs of the planner form. Lookups never
//! fail from the caller's point of view: every provider problem collapses to
//! an empty suggestion list after being logged.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod debounce;
pub mod places;

pub use debounce::DebouncedAutocomplete;
pub use places::{AutocompleteFailure, AutocompleteOutcome, PlacesClient, PlacesStatus};

/// Minimum trimmed query length before a lookup is attempted
pub const MIN_QUERY_LEN: usize = 3;

/// One address suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodingSuggestion {
    pub display_name: String,
}

/// Anything able to turn a partial address into suggestions
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Ordered suggestions; empty on any provider error
    async fn fetch_suggestions(&self, query: &str) -> Vec<GeocodingSuggestion>;
}

/// Whether `query` is long enough to be worth a lookup
#[must_use]
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}
