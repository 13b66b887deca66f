//! HelpRX Common Library
//!
//! Contract types and analysis logic shared by the CLI and the Web (WASM)
//! front-ends: the outbound request composer, the response parser, and the
//! panel-selection rules for rendering a result.

pub mod types;
pub mod error;
pub mod prompts;
pub mod schema;
pub mod request;
pub mod parser;
pub mod triage;

pub use types::{
    Analysis, AnalysisReport, AnalysisRequest, ImageAnalysis, InlineImage, OtcOption,
    ProductFindings, RawAnalysisResponse, Suitability,
};
pub use error::{Error, Result};
pub use prompts::{build_patient_prompt, system_instruction, PromptEdition, DISCLAIMER_PREAMBLE};
pub use schema::response_schema;
pub use request::{compose_request, GeminiRequest};
pub use parser::{extract_json, parse_analysis};
pub use triage::{select_panels, Panel, Triage};
