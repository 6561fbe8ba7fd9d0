//! Debounced, cancellable suggestion lookups
//!
//! Each keystroke calls [`DebouncedAutocomplete::suggest`]. A new query aborts
//! the one still waiting or in flight, so only the latest input reaches the
//! provider. Cancellation is cooperative: the aborted task stops at its next
//! await point.

use futures::future::{AbortHandle, Abortable};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::debug;

use super::{GeocodingSuggestion, SuggestionSource, is_searchable};
use crate::config::MapsConfig;

/// Per-input-field debouncer for library consumers driving suggestions from
/// keystrokes. The HTTP endpoint serves independent clients and does not
/// debounce; `maps.debounce_ms` applies through [`Self::from_config`].
pub struct DebouncedAutocomplete {
    source: Arc<dyn SuggestionSource>,
    delay: Duration,
    inflight: Mutex<Option<AbortHandle>>,
}

impl DebouncedAutocomplete {
    pub fn new(source: Arc<dyn SuggestionSource>, delay: Duration) -> Self {
        Self {
            source,
            delay,
            inflight: Mutex::new(None),
        }
    }

    /// Debouncer using the configured delay
    pub fn from_config(source: Arc<dyn SuggestionSource>, config: &MapsConfig) -> Self {
        Self::new(source, Duration::from_millis(config.debounce_ms))
    }

    fn inflight(&self) -> MutexGuard<'_, Option<AbortHandle>> {
        self.inflight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Suggestions for `query` after the debounce delay.
    ///
    /// Returns `None` when a newer query or [`cancel`](Self::cancel)
    /// superseded this one. Queries too short to search resolve immediately
    /// to an empty list.
    pub async fn suggest(&self, query: &str) -> Option<Vec<GeocodingSuggestion>> {
        if !is_searchable(query) {
            self.cancel();
            return Some(Vec::new());
        }

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.inflight().replace(handle) {
            previous.abort();
        }

        let source = Arc::clone(&self.source);
        let delay = self.delay;
        let query = query.to_owned();
        let lookup = async move {
            tokio::time::sleep(delay).await;
            source.fetch_suggestions(&query).await
        };

        match Abortable::new(lookup, registration).await {
            Ok(suggestions) => Some(suggestions),
            Err(_aborted) => {
                debug!("Autocomplete lookup superseded");
                None
            }
        }
    }

    /// Abort whatever lookup is pending, e.g. when the input goes away
    pub fn cancel(&self) {
        if let Some(handle) = self.inflight().take() {
            handle.abort();
        }
    }
}

impl Drop for DebouncedAutocomplete {
    fn drop(&mut self) {
        self.cancel();
    }
}
