//! Native Gemini API client.
//!
//! Exactly one call is issued per submission: no retry, no streaming, no
//! partial results. The call either resolves with a complete parsed result
//! or rejects with a distinct error.

use std::time::Duration;

use helprx_common::{compose_request, parse_analysis, Analysis, AnalysisRequest, PromptEdition};
use helprx_common::request::GeminiResponse;

use crate::error::{HelpRxError, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the generativelanguage `generateContent` endpoint.
///
/// The key is injected at construction; the client never reads the process
/// environment.
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Build a client for the given credential and model.
    ///
    /// An absent credential is a configuration failure raised here,
    /// synchronously, before any I/O.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(HelpRxError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HelpRxError::ApiCall(e.to_string()))?;

        Ok(Self {
            api_key,
            model: model.into(),
            http,
        })
    }

    /// Run one analysis call and parse the structured result.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis> {
        let edition = PromptEdition::for_request(request);
        let body = compose_request(request);
        let url = format!(
            "{}/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| HelpRxError::ApiCall(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(HelpRxError::ApiCall(format!(
                "status {status}: {detail}"
            )));
        }

        let envelope: GeminiResponse = response
            .json()
            .await
            .map_err(|e| HelpRxError::ApiCall(format!("invalid response envelope: {e}")))?;

        // A successful call with no text is its own failure mode, distinct
        // from malformed JSON
        let text = envelope
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(HelpRxError::EmptyResponse)?;

        Ok(parse_analysis(text, edition)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_key_before_any_io() {
        let result = GeminiClient::new("", "gemini-3-flash-preview", Duration::from_secs(1));
        assert!(matches!(result, Err(HelpRxError::MissingApiKey)));
    }

    #[test]
    fn test_new_rejects_blank_key() {
        let result = GeminiClient::new("   ", "gemini-3-flash-preview", Duration::from_secs(1));
        assert!(matches!(result, Err(HelpRxError::MissingApiKey)));
    }

    #[test]
    fn test_new_accepts_key() {
        let client =
            GeminiClient::new("test-key", "gemini-3-flash-preview", Duration::from_secs(1));
        assert!(client.is_ok());
    }
}
