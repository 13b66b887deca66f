//! Request composer: assembles one outbound `generateContent` payload per
//! submission. Pure data shaping; the front-ends own the transport.

use serde::{Deserialize, Serialize};

use crate::prompts::{build_patient_prompt, system_instruction, PromptEdition};
use crate::schema::response_schema;
use crate::types::AnalysisRequest;

/// One generateContent call body.
#[derive(Serialize)]
pub struct GeminiRequest {
    #[serde(rename = "systemInstruction")]
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: serde_json::Value,
}

/// Service response envelope. Only the text path is read.
#[derive(Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
pub struct Candidate {
    pub content: ResponseContent,
}

#[derive(Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: String,
}

impl GeminiResponse {
    /// First candidate's text, if any.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}

/// Compose the outbound request for one submission.
///
/// The prompt text embeds the three scalar fields verbatim; an inline image
/// part is attached only when the submission carried one; the instruction
/// and schema editions match the image's presence.
pub fn compose_request(request: &AnalysisRequest) -> GeminiRequest {
    let edition = PromptEdition::for_request(request);

    let mut parts = vec![Part::Text {
        text: build_patient_prompt(request.age, request.weight, &request.symptoms),
    }];

    if let Some(image) = &request.image {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        });
    }

    GeminiRequest {
        system_instruction: SystemInstruction {
            parts: vec![Part::Text {
                text: system_instruction(edition),
            }],
        },
        contents: vec![Content {
            role: "user".to_string(),
            parts,
        }],
        generation_config: GenerationConfig {
            temperature: 0.2,
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(edition),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InlineImage;

    fn text_request() -> AnalysisRequest {
        AnalysisRequest {
            age: 32,
            weight: 160.0,
            symptoms: "headache for 2 days, mild fever".to_string(),
            image: None,
        }
    }

    // =============================================
    // compose_request
    // =============================================

    #[test]
    fn test_compose_embeds_scalars_verbatim() {
        let request = compose_request(&text_request());
        let json = serde_json::to_string(&request).expect("serialize failed");

        assert!(json.contains("Age: 32 years old"));
        assert!(json.contains("Weight: 160 lbs"));
        assert!(json.contains("headache for 2 days, mild fever"));
    }

    #[test]
    fn test_compose_without_image_has_single_text_part() {
        let request = compose_request(&text_request());

        assert_eq!(request.contents.len(), 1);
        assert_eq!(request.contents[0].parts.len(), 1);
        assert!(matches!(request.contents[0].parts[0], Part::Text { .. }));

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(!json.contains("inline_data"));
        assert!(!json.contains("IMAGE INPUT"));
    }

    #[test]
    fn test_compose_with_image_attaches_inline_part() {
        let mut submission = text_request();
        submission.image = Some(InlineImage {
            mime_type: "image/png".to_string(),
            data: "iVBORw0KGgo=".to_string(),
        });

        let request = compose_request(&submission);
        assert_eq!(request.contents[0].parts.len(), 2);

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(json.contains("\"inline_data\""));
        assert!(json.contains("\"mime_type\":\"image/png\""));
        assert!(json.contains("\"data\":\"iVBORw0KGgo=\""));
        // The edition follows the image
        assert!(json.contains("identified_medication"));
    }

    #[test]
    fn test_compose_serialized_shape() {
        let request = compose_request(&text_request());
        let json = serde_json::to_string(&request).expect("serialize failed");

        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
        assert!(json.contains("\"responseSchema\""));
        assert!(json.contains("\"role\":\"user\""));
    }

    // =============================================
    // GeminiResponse
    // =============================================

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [{
                        "text": "{\"is_emergency\": false}"
                    }]
                }
            }]
        }"#;

        let response: GeminiResponse = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(response.text(), Some("{\"is_emergency\": false}"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str("{}").expect("deserialize failed");
        assert_eq!(response.text(), None);
    }
}
