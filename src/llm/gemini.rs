//! Gemini `generateContent` client
//!
//! Sends instructions with a response schema and `application/json` as the
//! response MIME type, then returns the text of the first candidate.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
    Retryable, RetryableStrategy, RetryTransientMiddleware, default_on_request_failure,
    policies::ExponentialBackoff,
};
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::{GenerationClient, GenerationError, GenerationRequest};
use crate::config::GeminiConfig;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini API
pub struct GeminiClient {
    http: ClientWithMiddleware,
    base_url: String,
}

impl GeminiClient {
    /// Create a client with the configured timeout and retry policy
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GenerationError> {
        debug!(
            base_url = %config.base_url,
            timeout_seconds = config.timeout_seconds,
            max_retries = config.max_retries,
            "Creating Gemini client"
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let http = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                retry_policy,
                GenerationRetryStrategy,
            ))
            .build();

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    fn build_request_body(request: &GenerationRequest) -> serde_json::Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.instructions }],
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.schema,
                "temperature": request.temperature,
            },
        })
    }

    async fn error_for_status(response: Response) -> GenerationError {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_secs);
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .map(|envelope| envelope.error.message)
            .unwrap_or(body);

        GenerationError::from_status(status.as_u16(), message, retry_after)
    }
}

/// Retries exactly the statuses [`GenerationError::is_retryable`] accepts
struct GenerationRetryStrategy;

impl RetryableStrategy for GenerationRetryStrategy {
    fn handle(
        &self,
        res: &Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(response) if response.status().is_success() => None,
            Ok(response) => {
                let error = GenerationError::from_status(response.status().as_u16(), String::new(), None);
                Some(if error.is_retryable() {
                    Retryable::Transient
                } else {
                    Retryable::Fatal
                })
            }
            Err(error) => default_on_request_failure(error),
        }
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    #[instrument(skip(self, api_key, request), fields(model = %request.model))]
    async fn generate(
        &self,
        api_key: &str,
        request: &GenerationRequest,
    ) -> Result<String, GenerationError> {
        let start_time = Instant::now();
        let body = serde_json::to_vec(&Self::build_request_body(request))?;

        debug!(
            instructions_len = request.instructions.len(),
            temperature = request.temperature,
            "Sending generation request"
        );

        let response = self
            .http
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, api_key)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::error_for_status(response).await;
            warn!(error = %err, "Generation request failed");
            return Err(err);
        }

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload.into_text()?;

        info!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            response_len = text.len(),
            "Generation request completed"
        );

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
struct ContentPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> Result<String, GenerationError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|feedback| feedback.block_reason)
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(GenerationError::EmptyResponse(reason));
        };

        let text: String = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::EmptyResponse(
                candidate
                    .finish_reason
                    .unwrap_or_else(|| "empty candidate".to_string()),
            ));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rstest::rstest;

    fn client_for(server: &MockServer) -> GeminiClient {
        let config = GeminiConfig {
            base_url: server.base_url(),
            ..GeminiConfig::default()
        };
        GeminiClient::from_config(&config).unwrap()
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-2.5-flash".to_string(),
            instructions: "Act as a live weather API.".to_string(),
            schema: json!({"type": "ARRAY", "items": {"type": "OBJECT"}}),
            temperature: 0.2,
        }
    }

    #[tokio::test]
    async fn test_generate_returns_candidate_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/models/gemini-2.5-flash:generateContent")
                    .header("x-goog-api-key", "test-key")
                    .body_contains("\"responseMimeType\":\"application/json\"")
                    .body_contains("Act as a live weather API.");
                then.status(200).json_body(json!({
                    "candidates": [{
                        "content": {"parts": [{"text": "[{\"forecast\":"}, {"text": "\"Sunny\"}]"}]},
                        "finishReason": "STOP"
                    }]
                }));
            })
            .await;

        let text = client_for(&server)
            .generate("test-key", &request())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(text, "[{\"forecast\":\"Sunny\"}]");
    }

    #[rstest]
    #[case(401, "unauthorized")]
    #[case(403, "unauthorized")]
    #[case(429, "rate_limited")]
    #[case(500, "api")]
    #[case(400, "api")]
    #[tokio::test]
    async fn test_status_mapping(#[case] status: u16, #[case] expected: &str) {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(status).json_body(json!({
                    "error": {"code": status, "message": "provider says no", "status": "ERROR"}
                }));
            })
            .await;

        let err = client_for(&server)
            .generate("test-key", &request())
            .await
            .unwrap_err();

        let kind = match &err {
            GenerationError::Unauthorized(message) => {
                assert_eq!(message, "provider says no");
                "unauthorized"
            }
            GenerationError::RateLimited { .. } => "rate_limited",
            GenerationError::Api { status: code, message } => {
                assert_eq!(*code, status);
                assert_eq!(message, "provider says no");
                "api"
            }
            other => panic!("unexpected error: {other:?}"),
        };
        assert_eq!(kind, expected);
    }

    #[rstest]
    #[case(200, None)]
    #[case(400, Some(false))]
    #[case(401, Some(false))]
    #[case(429, Some(true))]
    #[case(500, Some(true))]
    #[case(503, Some(true))]
    fn test_retry_strategy_follows_error_classification(
        #[case] status: u16,
        #[case] transient: Option<bool>,
    ) {
        let response = axum::http::Response::builder()
            .status(status)
            .body(String::new())
            .unwrap();
        let decision = GenerationRetryStrategy.handle(&Ok(reqwest::Response::from(response)));

        match transient {
            None => assert!(decision.is_none()),
            Some(true) => assert!(matches!(decision, Some(Retryable::Transient))),
            Some(false) => assert!(matches!(decision, Some(Retryable::Fatal))),
        }
    }

    #[rstest]
    #[case(503, 2)]
    #[case(400, 1)]
    #[tokio::test]
    async fn test_configured_retries_only_for_transient_status(
        #[case] status: u16,
        #[case] expected_hits: usize,
    ) {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(status).json_body(json!({"error": {"message": "try later"}}));
            })
            .await;

        let config = GeminiConfig {
            base_url: server.base_url(),
            max_retries: 1,
            ..GeminiConfig::default()
        };
        let err = GeminiClient::from_config(&config)
            .unwrap()
            .generate("test-key", &request())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::Api { .. }));
        assert_eq!(mock.hits_async().await, expected_hits);
    }

    #[tokio::test]
    async fn test_blocked_prompt_is_empty_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200)
                    .json_body(json!({"promptFeedback": {"blockReason": "SAFETY"}}));
            })
            .await;

        let err = client_for(&server)
            .generate("test-key", &request())
            .await
            .unwrap_err();

        assert!(matches!(err, GenerationError::EmptyResponse(ref reason) if reason == "SAFETY"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = GeminiClient::build_request_body(&request());
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Act as a live weather API.");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }
}
