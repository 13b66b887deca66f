//! Gemini API call.
//!
//! One fetch per submission: the composed request either resolves with a
//! complete parsed result or rejects. No retry, no streaming.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use helprx_common::request::GeminiResponse;
use helprx_common::{compose_request, parse_analysis, Analysis, AnalysisRequest, PromptEdition};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent";

/// Run one analysis call against the service.
///
/// A missing credential short-circuits before any network attempt. Errors
/// are descriptive strings for the console; the UI shows its own generic
/// message.
pub async fn analyze(api_key: &str, request: &AnalysisRequest) -> Result<Analysis, String> {
    if api_key.trim().is_empty() {
        return Err("config error: API key is missing".to_string());
    }

    let edition = PromptEdition::for_request(request);
    let body = serde_json::to_string(&compose_request(request))
        .map_err(|e| format!("failed to serialize request: {e}"))?;

    let url = format!("{GEMINI_API_URL}?key={api_key}");

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&body.into());

    let fetch_request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("failed to build request: {e:?}"))?;
    fetch_request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("failed to set headers: {e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
        .await
        .map_err(|e| format!("network request failed: {e:?}"))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| format!("unexpected fetch result: {e:?}"))?;

    if !resp.ok() {
        return Err(format!("API error: status {}", resp.status()));
    }

    let json = JsFuture::from(resp.json().map_err(|e| format!("invalid response body: {e:?}"))?)
        .await
        .map_err(|e| format!("invalid response body: {e:?}"))?;
    let envelope: GeminiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("invalid response envelope: {e}"))?;

    // A successful call with no text is its own failure, distinct from
    // malformed JSON
    let text = envelope
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| "empty response from API".to_string())?;

    parse_analysis(text, edition).map_err(|e| e.to_string())
}
