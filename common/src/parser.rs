//! Response parser.
//!
//! Extracts the JSON document from the service's text payload and converts
//! it into the tagged domain result.

use crate::error::{Error, Result};
use crate::prompts::PromptEdition;
use crate::types::{Analysis, RawAnalysisResponse};

/// Extract the JSON object from a response payload.
///
/// Extraction order:
/// 1. ```json ... ``` block
/// 2. raw {...} object
/// 3. error
///
/// # Arguments
/// * `response` - response text from the service
///
/// # Returns
/// * `Ok(&str)` - the extracted JSON slice
/// * `Err` - no JSON object found
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` block
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // raw {...}
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return Ok(response[start..=end].trim());
            }
        }
    }

    Err(Error::Parse("no JSON object found in response".into()))
}

/// Parse a response payload into the tagged domain result.
///
/// An empty or whitespace-only payload is a distinct failure from malformed
/// JSON: the call succeeded but carried nothing usable.
///
/// # Arguments
/// * `response` - response text from the service
/// * `edition` - the prompt edition the originating request used
pub fn parse_analysis(response: &str, edition: PromptEdition) -> Result<Analysis> {
    if response.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }

    let json_str = extract_json(response)?;
    let raw: RawAnalysisResponse = serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("analysis JSON did not match the contract: {e}")))?;

    Ok(raw.into_analysis(edition.is_image_aware()))
}
