//! Prompt generation shared by the CLI and Web (WASM) front-ends:
//! - DISCLAIMER_PREAMBLE: the fixed safety preamble the disclaimer opens with
//! - system_instruction: the fixed instruction text, per edition
//! - build_patient_prompt: the per-submission prompt embedding the form fields

/// Required opening of every disclaimer the engine returns. The contract is
/// carried by the instruction text; it is never validated locally.
pub const DISCLAIMER_PREAMBLE: &str = "⚠️ HelpRX is an AI, not a doctor. This information is for educational purposes only. Always consult a healthcare professional and check the physical product label before administering medication.";

/// Which edition of the instruction and schema a request uses.
///
/// Two editions exist; the image-aware one extends the output contract with
/// the product-identification fields. The edition is chosen by whether the
/// submission carries an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEdition {
    TextOnly,
    ImageAware,
}

impl PromptEdition {
    pub fn for_request(request: &crate::types::AnalysisRequest) -> Self {
        if request.has_image() {
            PromptEdition::ImageAware
        } else {
            PromptEdition::TextOnly
        }
    }

    pub fn is_image_aware(&self) -> bool {
        matches!(self, PromptEdition::ImageAware)
    }
}

const INSTRUCTION_CORE: &str = r#"ROLE:
You are the "HelpRX Engine," a high-precision medical information and dosage calculation assistant. Your goal is to provide educational data on over-the-counter (OTC) medications based on user symptoms, age, and weight.

CONVERSATIONAL LOGIC:
1. DATA CHECK: Check if you have the user's Age, Weight, and specific symptoms.
2. CLARIFICATION: If any critical info is missing, or if the symptoms are vague (e.g., "I feel sick", "hurt", "unwell"), do NOT provide dosage. Instead, set "needs_more_info" to true and ask 1-2 clarifying questions (e.g., "How long have you had the fever?" or "Could you provide the child's weight if applicable?").
3. DOSAGE: Only provide dosage/ingredients once you have sufficient data.

SAFETY PROTOCOLS (MANDATORY):
1. EMERGENCY TRIAGE: Immediately check for "Red Flags" (e.g., chest pain, wheezing/difficulty breathing, anaphylaxis, signs of appendicitis like lower right abdominal pain). If detected, set "is_emergency" to true and provide clear "emergency_instructions".
2. MEDICAL DISCLAIMER: The "disclaimer" field MUST begin with: "{disclaimer}"
3. OTC ONLY: Discuss only common over-the-counter active ingredients (Acetaminophen, Ibuprofen, Diphenhydramine, etc.). Never suggest prescription-only drugs.

CALCULATION & LOGIC REQUIREMENTS:
- AGE & WEIGHT: Use the provided age and weight to determine the correct pediatric vs. adult dosage bracket.
- DOSAGE MATH: Perform math based on standard concentrations.
  * For Children's Acetaminophen: Use 160 mg per 5 mL.
  * For Children's Ibuprofen: Use 100 mg per 5 mL.
- UNIT PRECISION: Always output specific numerical dosages (e.g., "7.5 mL" or "400 mg") rather than vague ranges when weight is provided."#;

const INSTRUCTION_IMAGE_ADDENDUM: &str = r#"IMAGE INPUT:
A photograph of a medication product is attached. Use it to identify the active ingredient and concentration, then fill "identified_medication", "suitability_check" (Yes/No/Partial/N/A for the given symptoms and patient), and "specific_calculated_dosage" where the data allows. If the label contradicts the standard concentration, prioritize the label's concentration but attach a warning."#;

/// Fixed system instruction for the given edition.
pub fn system_instruction(edition: PromptEdition) -> String {
    let core = INSTRUCTION_CORE.replace("{disclaimer}", DISCLAIMER_PREAMBLE);
    match edition {
        PromptEdition::TextOnly => core,
        PromptEdition::ImageAware => format!("{core}\n\n{INSTRUCTION_IMAGE_ADDENDUM}"),
    }
}

/// Per-submission prompt. The three scalar fields are embedded verbatim.
///
/// # Arguments
/// * `age` - patient age in years
/// * `weight` - patient weight in pounds
/// * `symptoms` - free-text symptom description, already trimmed-nonempty
pub fn build_patient_prompt(age: u32, weight: f64, symptoms: &str) -> String {
    format!(
        r#"Patient Analysis Request:
Age: {age} years old
Weight: {weight} lbs
Symptoms: {symptoms}

Please analyze these details and provide OTC medication recommendations and dosage calculations."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnalysisRequest, InlineImage};

    fn request(image: Option<InlineImage>) -> AnalysisRequest {
        AnalysisRequest {
            age: 32,
            weight: 160.0,
            symptoms: "headache for 2 days, mild fever".to_string(),
            image,
        }
    }

    // =============================================
    // PromptEdition
    // =============================================

    #[test]
    fn test_edition_text_only_without_image() {
        assert_eq!(
            PromptEdition::for_request(&request(None)),
            PromptEdition::TextOnly
        );
    }

    #[test]
    fn test_edition_image_aware_with_image() {
        let image = InlineImage {
            mime_type: "image/jpeg".to_string(),
            data: "aGVsbG8=".to_string(),
        };
        assert_eq!(
            PromptEdition::for_request(&request(Some(image))),
            PromptEdition::ImageAware
        );
    }

    // =============================================
    // system_instruction
    // =============================================

    #[test]
    fn test_instruction_contains_disclaimer_preamble() {
        let text = system_instruction(PromptEdition::TextOnly);
        assert!(text.contains(DISCLAIMER_PREAMBLE));
        assert!(!text.contains("{disclaimer}"));
    }

    #[test]
    fn test_instruction_text_only_has_no_image_section() {
        let text = system_instruction(PromptEdition::TextOnly);
        assert!(!text.contains("IMAGE INPUT"));
    }

    #[test]
    fn test_instruction_image_aware_extends_core() {
        let text = system_instruction(PromptEdition::ImageAware);
        assert!(text.contains("EMERGENCY TRIAGE"));
        assert!(text.contains("IMAGE INPUT"));
        assert!(text.contains("identified_medication"));
    }

    #[test]
    fn test_instruction_mandates_concentration_constants() {
        let text = system_instruction(PromptEdition::TextOnly);
        assert!(text.contains("160 mg per 5 mL"));
        assert!(text.contains("100 mg per 5 mL"));
    }

    // =============================================
    // build_patient_prompt
    // =============================================

    #[test]
    fn test_patient_prompt_embeds_fields_verbatim() {
        let prompt = build_patient_prompt(32, 160.0, "headache for 2 days, mild fever");

        assert!(prompt.contains("Age: 32 years old"));
        assert!(prompt.contains("Weight: 160 lbs"));
        assert!(prompt.contains("Symptoms: headache for 2 days, mild fever"));
    }

    #[test]
    fn test_patient_prompt_fractional_weight() {
        let prompt = build_patient_prompt(4, 38.5, "fever");
        assert!(prompt.contains("Weight: 38.5 lbs"));
    }
}
