//! Places Autocomplete web service client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, error, instrument, warn};

use super::{GeocodingSuggestion, SuggestionSource, is_searchable};
use crate::config::MapsConfig;

/// Status values documented for the autocomplete endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacesStatus {
    Ok,
    ZeroResults,
    OverQueryLimit,
    OverDailyLimit,
    RequestDenied,
    InvalidRequest,
    UnknownError,
    #[serde(other)]
    Unrecognized,
}

/// Raw autocomplete response
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub status: PlacesStatus,
    #[serde(default)]
    pub predictions: Vec<Prediction>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub description: String,
}

/// Why a lookup produced no suggestions
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteFailure {
    MissingCredential,
    Transport(String),
    InvalidResponse(String),
    Status {
        status: PlacesStatus,
        message: Option<String>,
    },
}

/// Closed result of one lookup
#[derive(Debug, Clone, PartialEq)]
pub enum AutocompleteOutcome {
    Suggestions(Vec<GeocodingSuggestion>),
    Failed(AutocompleteFailure),
}

impl AutocompleteOutcome {
    /// Collapse failures to an empty list
    #[must_use]
    pub fn into_suggestions(self) -> Vec<GeocodingSuggestion> {
        match self {
            AutocompleteOutcome::Suggestions(suggestions) => suggestions,
            AutocompleteOutcome::Failed(_) => Vec::new(),
        }
    }
}

impl From<AutocompleteResponse> for AutocompleteOutcome {
    fn from(response: AutocompleteResponse) -> Self {
        match response.status {
            PlacesStatus::Ok => AutocompleteOutcome::Suggestions(
                response
                    .predictions
                    .into_iter()
                    .map(|prediction| GeocodingSuggestion {
                        display_name: prediction.description,
                    })
                    .collect(),
            ),
            PlacesStatus::ZeroResults => AutocompleteOutcome::Suggestions(Vec::new()),
            status @ (PlacesStatus::OverQueryLimit
            | PlacesStatus::OverDailyLimit
            | PlacesStatus::RequestDenied
            | PlacesStatus::InvalidRequest
            | PlacesStatus::UnknownError
            | PlacesStatus::Unrecognized) => {
                AutocompleteOutcome::Failed(AutocompleteFailure::Status {
                    status,
                    message: response.error_message,
                })
            }
        }
    }
}

/// Autocomplete client; the HTTP client is built on first lookup
pub struct PlacesClient {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    http: OnceCell<Client>,
}

impl PlacesClient {
    #[must_use]
    pub fn new(config: &MapsConfig) -> Self {
        Self {
            api_key: config.api_key.clone().filter(|key| !key.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds.into()),
            http: OnceCell::new(),
        }
    }

    async fn http(&self) -> Result<&Client, reqwest::Error> {
        self.http
            .get_or_try_init(|| async {
                debug!("Initializing Places HTTP client");
                Client::builder()
                    .timeout(self.timeout)
                    .user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")))
                    .build()
            })
            .await
    }

    /// Look up `query` and report exactly what happened
    #[instrument(skip(self))]
    pub async fn autocomplete(&self, query: &str) -> AutocompleteOutcome {
        if !is_searchable(query) {
            return AutocompleteOutcome::Suggestions(Vec::new());
        }

        let Some(api_key) = self.api_key.as_deref() else {
            return AutocompleteOutcome::Failed(AutocompleteFailure::MissingCredential);
        };

        let client = match self.http().await {
            Ok(client) => client,
            Err(e) => return AutocompleteOutcome::Failed(AutocompleteFailure::Transport(e.to_string())),
        };

        let url = format!(
            "{}/autocomplete/json?input={}&key={}",
            self.base_url,
            urlencoding::encode(query.trim()),
            urlencoding::encode(api_key)
        );

        let response = match client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return AutocompleteOutcome::Failed(AutocompleteFailure::Transport(e.to_string())),
        };

        if !response.status().is_success() {
            return AutocompleteOutcome::Failed(AutocompleteFailure::Transport(format!(
                "HTTP {}",
                response.status()
            )));
        }

        match response.json::<AutocompleteResponse>().await {
            Ok(body) => body.into(),
            Err(e) => AutocompleteOutcome::Failed(AutocompleteFailure::InvalidResponse(e.to_string())),
        }
    }
}

#[async_trait]
impl SuggestionSource for PlacesClient {
    async fn fetch_suggestions(&self, query: &str) -> Vec<GeocodingSuggestion> {
        match self.autocomplete(query).await {
            AutocompleteOutcome::Suggestions(suggestions) => {
                debug!(count = suggestions.len(), "Autocomplete suggestions received");
                suggestions
            }
            AutocompleteOutcome::Failed(AutocompleteFailure::MissingCredential) => {
                warn!("GOOGLE_MAPS_API_KEY not set in config, autocomplete disabled");
                Vec::new()
            }
            AutocompleteOutcome::Failed(failure) => {
                error!(?failure, "Failed to fetch geocoding suggestions");
                Vec::new()
            }
        }
    }
}
