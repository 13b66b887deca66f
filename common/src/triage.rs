//! Panel-selection rules for rendering a result.
//!
//! The model's two booleans collapse into a single `Triage` state, computed
//! once; render sites switch on it instead of re-deriving negated flags.
//! `select_panels` is the whole renderer decision tree; both front-ends
//! project its output into their own visuals.

use crate::types::{Analysis, AnalysisReport};

/// Which branch of the result a submission landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Triage {
    /// Red-flag symptoms: emergency escalation, everything else suppressed.
    Emergency,
    /// The engine asked clarifying questions instead of recommending.
    NeedsInfo,
    /// A normal recommendation.
    Normal,
}

impl Triage {
    /// Emergency wins over needs-more-info; both flags set still reads as
    /// an emergency.
    pub fn from_flags(is_emergency: bool, needs_more_info: bool) -> Self {
        if is_emergency {
            Triage::Emergency
        } else if needs_more_info {
            Triage::NeedsInfo
        } else {
            Triage::Normal
        }
    }

    pub fn of(report: &AnalysisReport) -> Self {
        Self::from_flags(report.is_emergency, report.needs_more_info)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Triage::Emergency => "emergency",
            Triage::NeedsInfo => "needs-info",
            Triage::Normal => "normal",
        }
    }
}

/// One renderable panel group. The selection order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Emergency instructions plus the emergency-call action.
    Emergency,
    /// Clarifying questions, in the order the engine asked them.
    Clarification,
    /// Identified medication, suitability badge, optional calculated dosage.
    ProductAnalysis,
    /// Suggested OTC options (renders a placeholder when empty).
    OtcOptions,
    /// Safety warnings and doctor-visit triggers, side by side.
    SafetyGrid,
    /// The verbatim disclaimer; present in every state.
    Disclaimer,
}

/// Deterministically select the panels for a result.
///
/// First match wins:
/// 1. Emergency: only the emergency panel, with the safety/trigger grid
///    kept alongside it.
/// 2. Needs-more-info (and not emergency): only the clarification panel;
///    the grid is suppressed.
/// 3. Otherwise: product analysis (when an image identified one), the
///    options list, then the grid.
///
/// The disclaimer is always last. Pure function of its input.
pub fn select_panels(analysis: &Analysis) -> Vec<Panel> {
    let mut panels = Vec::new();

    match Triage::of(analysis.report()) {
        Triage::Emergency => {
            panels.push(Panel::Emergency);
            panels.push(Panel::SafetyGrid);
        }
        Triage::NeedsInfo => {
            panels.push(Panel::Clarification);
        }
        Triage::Normal => {
            if analysis.product().is_some() {
                panels.push(Panel::ProductAnalysis);
            }
            panels.push(Panel::OtcOptions);
            panels.push(Panel::SafetyGrid);
        }
    }

    panels.push(Panel::Disclaimer);
    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ImageAnalysis, OtcOption, ProductFindings, Suitability};

    fn report(is_emergency: bool, needs_more_info: bool) -> AnalysisReport {
        AnalysisReport {
            disclaimer: "educational only".to_string(),
            is_emergency,
            needs_more_info,
            ..Default::default()
        }
    }

    fn image_analysis(is_emergency: bool, needs_more_info: bool) -> Analysis {
        Analysis::Image(ImageAnalysis {
            report: report(is_emergency, needs_more_info),
            product: ProductFindings {
                identified_medication: "Children's Tylenol".to_string(),
                suitability: Suitability::Yes,
                calculated_dosage: None,
            },
        })
    }

    // =============================================
    // Triage
    // =============================================

    #[test]
    fn test_triage_emergency_wins() {
        assert_eq!(Triage::from_flags(true, true), Triage::Emergency);
        assert_eq!(Triage::from_flags(true, false), Triage::Emergency);
    }

    #[test]
    fn test_triage_needs_info_only_without_emergency() {
        assert_eq!(Triage::from_flags(false, true), Triage::NeedsInfo);
    }

    #[test]
    fn test_triage_normal() {
        assert_eq!(Triage::from_flags(false, false), Triage::Normal);
    }

    // =============================================
    // select_panels
    // =============================================

    #[test]
    fn test_emergency_suppresses_options_and_product() {
        // needs_more_info and a product present, yet emergency rules
        let analysis = image_analysis(true, true);
        let panels = select_panels(&analysis);

        assert_eq!(
            panels,
            vec![Panel::Emergency, Panel::SafetyGrid, Panel::Disclaimer]
        );
    }

    #[test]
    fn test_needs_info_renders_only_clarification() {
        let analysis = Analysis::TextOnly(report(false, true));
        let panels = select_panels(&analysis);

        assert_eq!(panels, vec![Panel::Clarification, Panel::Disclaimer]);
    }

    #[test]
    fn test_needs_info_suppresses_product_panel() {
        let analysis = image_analysis(false, true);
        let panels = select_panels(&analysis);

        assert!(!panels.contains(&Panel::ProductAnalysis));
        assert!(!panels.contains(&Panel::SafetyGrid));
    }

    #[test]
    fn test_normal_without_product() {
        let analysis = Analysis::TextOnly(report(false, false));
        let panels = select_panels(&analysis);

        assert_eq!(
            panels,
            vec![Panel::OtcOptions, Panel::SafetyGrid, Panel::Disclaimer]
        );
    }

    #[test]
    fn test_normal_with_product_prepends_product_panel() {
        let analysis = image_analysis(false, false);
        let panels = select_panels(&analysis);

        assert_eq!(
            panels,
            vec![
                Panel::ProductAnalysis,
                Panel::OtcOptions,
                Panel::SafetyGrid,
                Panel::Disclaimer
            ]
        );
    }

    #[test]
    fn test_empty_options_still_selects_options_panel() {
        // The options panel renders its own empty-state placeholder
        let mut r = report(false, false);
        r.suggested_otc_options = Vec::<OtcOption>::new();
        let panels = select_panels(&Analysis::TextOnly(r));

        assert!(panels.contains(&Panel::OtcOptions));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let analysis = image_analysis(false, false);
        assert_eq!(select_panels(&analysis), select_panels(&analysis));
    }

    #[test]
    fn test_disclaimer_always_last() {
        for analysis in [
            Analysis::TextOnly(report(true, false)),
            Analysis::TextOnly(report(false, true)),
            image_analysis(false, false),
        ] {
            assert_eq!(select_panels(&analysis).last(), Some(&Panel::Disclaimer));
        }
    }
}
