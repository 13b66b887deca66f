//! Contract types shared by the CLI and Web (WASM) front-ends:
//! - AnalysisRequest: one per submission, owned by the submitting call
//! - RawAnalysisResponse: tolerant wire mirror of the model's JSON output
//! - Analysis: the tagged domain result (text-only vs. image analysis)

use serde::{Deserialize, Serialize};

/// Base64-encoded image payload with its MIME type, ready for inlining
/// into an outbound request. Produced by the front-ends' encoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// One symptom-analysis submission.
///
/// Age and weight arrive already bounded by the input layer (0-120 and
/// 0-999); they are embedded verbatim in the outbound prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub age: u32,
    pub weight: f64,
    pub symptoms: String,
    pub image: Option<InlineImage>,
}

impl AnalysisRequest {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A single suggested over-the-counter option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtcOption {
    pub name: String,
    pub purpose: String,
    pub calculated_dosage: String,
    pub max_frequency: String,
}

/// Suitability classification of a photographed medication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    Yes,
    No,
    Partial,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Suitability {
    /// Tolerant conversion from the wire string. Unknown values fold into
    /// `NotApplicable` rather than failing the whole parse.
    pub fn parse(value: &str) -> Suitability {
        match value.trim() {
            "Yes" => Suitability::Yes,
            "No" => Suitability::No,
            "Partial" => Suitability::Partial,
            _ => Suitability::NotApplicable,
        }
    }

    /// Human label rendered on the product-analysis badge. Anything that is
    /// neither a clear yes nor a clear no reads as a caution.
    pub fn label(&self) -> &'static str {
        match self {
            Suitability::Yes => "Suitable",
            Suitability::No => "Not Recommended",
            Suitability::Partial | Suitability::NotApplicable => "Check Caution",
        }
    }
}

/// Wire mirror of the model's structured JSON output.
///
/// Every field is defaulted: the schema handed to the service is advisory,
/// so a missing sequence must read as empty rather than abort the parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAnalysisResponse {
    pub disclaimer: String,
    pub needs_more_info: bool,
    pub clarifying_questions: Vec<String>,
    pub is_emergency: bool,
    pub emergency_instructions: String,
    pub identified_medication: Option<String>,
    pub suitability_check: Option<String>,
    pub specific_calculated_dosage: Option<String>,
    pub suggested_otc_options: Vec<OtcOption>,
    pub safety_warnings: Vec<String>,
    pub doctor_visit_triggers: Vec<String>,
}

/// The fields common to every analysis, image or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub disclaimer: String,
    pub is_emergency: bool,
    pub emergency_instructions: String,
    pub needs_more_info: bool,
    pub clarifying_questions: Vec<String>,
    pub suggested_otc_options: Vec<OtcOption>,
    pub safety_warnings: Vec<String>,
    pub doctor_visit_triggers: Vec<String>,
}

/// What the model read off the photographed product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFindings {
    pub identified_medication: String,
    pub suitability: Suitability,
    /// The renderer shows a dosage block only when this is present.
    pub calculated_dosage: Option<String>,
}

/// An analysis that was given a product photograph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub report: AnalysisReport,
    pub product: ProductFindings,
}

/// The domain result, tagged by whether an image informed it.
///
/// Selected by the prompt edition of the originating request; an
/// image-aware response that never identified a product degrades to
/// `TextOnly` instead of carrying empty required fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Analysis {
    TextOnly(AnalysisReport),
    Image(ImageAnalysis),
}

impl Analysis {
    pub fn report(&self) -> &AnalysisReport {
        match self {
            Analysis::TextOnly(report) => report,
            Analysis::Image(image) => &image.report,
        }
    }

    pub fn product(&self) -> Option<&ProductFindings> {
        match self {
            Analysis::TextOnly(_) => None,
            Analysis::Image(image) => Some(&image.product),
        }
    }
}

impl RawAnalysisResponse {
    fn into_report(self) -> AnalysisReport {
        AnalysisReport {
            disclaimer: self.disclaimer,
            is_emergency: self.is_emergency,
            emergency_instructions: self.emergency_instructions,
            needs_more_info: self.needs_more_info,
            clarifying_questions: self.clarifying_questions,
            suggested_otc_options: self.suggested_otc_options,
            safety_warnings: self.safety_warnings,
            doctor_visit_triggers: self.doctor_visit_triggers,
        }
    }

    /// Convert the wire shape into the tagged domain result.
    ///
    /// `image_aware` is true when the originating request carried an image;
    /// only then are the identification fields meaningful.
    pub fn into_analysis(mut self, image_aware: bool) -> Analysis {
        if !image_aware {
            return Analysis::TextOnly(self.into_report());
        }

        let medication = self
            .identified_medication
            .take()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        match medication {
            Some(identified_medication) => {
                let suitability = self
                    .suitability_check
                    .take()
                    .map(|s| Suitability::parse(&s))
                    .unwrap_or_default();
                let calculated_dosage = self
                    .specific_calculated_dosage
                    .take()
                    .filter(|d| !d.trim().is_empty());
                Analysis::Image(ImageAnalysis {
                    report: self.into_report(),
                    product: ProductFindings {
                        identified_medication,
                        suitability,
                        calculated_dosage,
                    },
                })
            }
            None => Analysis::TextOnly(self.into_report()),
        }
    }
}
