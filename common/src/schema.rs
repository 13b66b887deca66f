//! Declarative response schema handed to the generative-language service.
//!
//! The schema is a contract for the model's output, not a local validator:
//! parsing stays tolerant regardless of what is declared here.

use serde_json::{json, Value};

use crate::prompts::PromptEdition;

/// Response schema for the given edition, in the service's OpenAPI-subset
/// form (`responseSchema` in the generation config).
pub fn response_schema(edition: PromptEdition) -> Value {
    let mut properties = json!({
        "disclaimer": { "type": "STRING" },
        "needs_more_info": { "type": "BOOLEAN" },
        "clarifying_questions": {
            "type": "ARRAY",
            "items": { "type": "STRING" }
        },
        "is_emergency": { "type": "BOOLEAN" },
        "emergency_instructions": { "type": "STRING" },
        "suggested_otc_options": {
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "name": { "type": "STRING" },
                    "purpose": { "type": "STRING" },
                    "calculated_dosage": { "type": "STRING" },
                    "max_frequency": { "type": "STRING" }
                },
                "required": ["name", "purpose", "calculated_dosage", "max_frequency"]
            }
        },
        "safety_warnings": {
            "type": "ARRAY",
            "items": { "type": "STRING" }
        },
        "doctor_visit_triggers": {
            "type": "ARRAY",
            "items": { "type": "STRING" }
        }
    });

    if edition.is_image_aware() {
        if let Some(map) = properties.as_object_mut() {
            map.insert("identified_medication".to_string(), json!({ "type": "STRING" }));
            map.insert(
                "suitability_check".to_string(),
                json!({ "type": "STRING", "enum": ["Yes", "No", "Partial", "N/A"] }),
            );
            map.insert(
                "specific_calculated_dosage".to_string(),
                json!({ "type": "STRING" }),
            );
        }
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": [
            "disclaimer",
            "is_emergency",
            "suggested_otc_options",
            "safety_warnings",
            "doctor_visit_triggers",
            "needs_more_info",
            "clarifying_questions"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_required_fields() {
        let schema = response_schema(PromptEdition::TextOnly);
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();

        assert!(required.contains(&"disclaimer"));
        assert!(required.contains(&"is_emergency"));
        assert!(required.contains(&"clarifying_questions"));
        // Identification fields are never required
        assert!(!required.contains(&"identified_medication"));
    }

    #[test]
    fn test_schema_text_only_omits_identification_fields() {
        let schema = response_schema(PromptEdition::TextOnly);
        assert!(schema["properties"]["identified_medication"].is_null());
        assert!(schema["properties"]["suitability_check"].is_null());
    }

    #[test]
    fn test_schema_image_aware_extends_properties() {
        let schema = response_schema(PromptEdition::ImageAware);
        assert_eq!(
            schema["properties"]["identified_medication"]["type"],
            "STRING"
        );

        let levels: Vec<&str> = schema["properties"]["suitability_check"]["enum"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(levels, vec!["Yes", "No", "Partial", "N/A"]);
    }

    #[test]
    fn test_schema_otc_option_members_required() {
        let schema = response_schema(PromptEdition::TextOnly);
        let required = &schema["properties"]["suggested_otc_options"]["items"]["required"];
        assert_eq!(required.as_array().unwrap().len(), 4);
    }
}
