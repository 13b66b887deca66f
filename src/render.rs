//! Terminal rendering of an analysis.
//!
//! A pure projection of `select_panels`: no decisions are made here beyond
//! formatting, so rendering the same result twice yields identical output.

use helprx_common::{select_panels, Analysis, Panel};

/// Render the selected panels as terminal text.
pub fn render_analysis(analysis: &Analysis) -> String {
    let report = analysis.report();
    let mut out = String::new();

    for panel in select_panels(analysis) {
        match panel {
            Panel::Emergency => {
                out.push_str("🚨 EMERGENCY ALERT\n");
                out.push_str(&indented(&report.emergency_instructions));
                out.push_str("   📞 Call 911 immediately\n\n");
            }
            Panel::Clarification => {
                out.push_str("❓ Additional Information Needed\n");
                out.push_str(
                    "   To provide the safest and most accurate recommendation, a few more details are needed:\n",
                );
                for (i, question) in report.clarifying_questions.iter().enumerate() {
                    out.push_str(&format!("   {}. {}\n", i + 1, question));
                }
                out.push('\n');
            }
            Panel::ProductAnalysis => {
                // Only selected when product findings exist
                if let Some(product) = analysis.product() {
                    out.push_str(&format!(
                        "🔍 Product Analysis [{}]\n",
                        product.suitability.label()
                    ));
                    out.push_str(&format!("   {}\n", product.identified_medication));
                    if let Some(dosage) = &product.calculated_dosage {
                        out.push_str(&format!("   Calculated safe dosage: {dosage}\n"));
                    }
                    out.push('\n');
                }
            }
            Panel::OtcOptions => {
                if analysis.product().is_some() {
                    out.push_str("💊 Other OTC Options\n");
                } else {
                    out.push_str("💊 Recommended OTC Options\n");
                }
                if report.suggested_otc_options.is_empty() {
                    out.push_str("   No specific OTC options found for these symptoms.\n");
                } else {
                    for option in &report.suggested_otc_options {
                        out.push_str(&format!("   • {} — {}\n", option.name, option.purpose));
                        out.push_str(&format!(
                            "     Dosage: {} | {}\n",
                            option.calculated_dosage, option.max_frequency
                        ));
                    }
                }
                out.push('\n');
            }
            Panel::SafetyGrid => {
                out.push_str("⚠️ Safety Warnings\n");
                out.push_str(&bulleted(&report.safety_warnings));
                out.push('\n');
                out.push_str("🩺 When to See a Doctor\n");
                out.push_str(&bulleted(&report.doctor_visit_triggers));
                out.push('\n');
            }
            Panel::Disclaimer => {
                out.push_str("Disclaimer\n");
                out.push_str(&indented(&report.disclaimer));
            }
        }
    }

    out
}

fn bulleted(items: &[String]) -> String {
    if items.is_empty() {
        return "   None listed.\n".to_string();
    }
    items
        .iter()
        .map(|item| format!("   • {item}\n"))
        .collect()
}

fn indented(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    text.lines()
        .map(|line| format!("   {line}\n"))
        .collect()
}
