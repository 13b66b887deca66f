//! Results display component.
//!
//! A pure projection of `select_panels`: the panel set is computed once
//! from the analysis prop and rendered in order. No decisions are made
//! here beyond formatting.

use leptos::prelude::*;

use helprx_common::{select_panels, Analysis, Panel, Suitability, Triage};

fn suitability_class(suitability: Suitability) -> &'static str {
    match suitability {
        Suitability::Yes => "badge badge-yes",
        Suitability::No => "badge badge-no",
        Suitability::Partial => "badge badge-partial",
        Suitability::NotApplicable => "badge badge-muted",
    }
}

fn bulleted(items: &[String]) -> AnyView {
    if items.is_empty() {
        view! { <li class="text-muted">"None listed."</li> }.into_any()
    } else {
        items
            .iter()
            .map(|item| view! { <li>{item.clone()}</li> })
            .collect_view()
            .into_any()
    }
}

#[component]
pub fn ResultsDisplay<F>(analysis: Analysis, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Copy,
{
    let report = analysis.report().clone();
    let product = analysis.product().cloned();
    let panels = select_panels(&analysis);
    let triage = Triage::of(&report);

    let emergency = panels.contains(&Panel::Emergency).then(|| {
        view! {
            <div class="panel panel-emergency">
                <h3>"EMERGENCY ALERT"</h3>
                <p>{report.emergency_instructions.clone()}</p>
                <a href="tel:911" class="btn btn-emergency">
                    "Call 911 Immediately"
                </a>
            </div>
        }
    });

    let clarification = panels.contains(&Panel::Clarification).then(|| {
        view! {
            <div class="panel panel-clarify">
                <h3>"Additional Information Needed"</h3>
                <p>
                    "To provide the safest and most accurate recommendation, I need a few more details:"
                </p>
                <ul>
                    {report
                        .clarifying_questions
                        .iter()
                        .map(|question| view! { <li>{question.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    let product_panel = panels
        .contains(&Panel::ProductAnalysis)
        .then(|| product.clone())
        .flatten()
        .map(|findings| {
            view! {
                <div class="panel panel-product">
                    <div class="panel-heading">
                        <h3>"Product Analysis"</h3>
                        <span class=suitability_class(findings.suitability)>
                            {findings.suitability.label()}
                        </span>
                    </div>
                    <p class="medication-name">{findings.identified_medication.clone()}</p>
                    {findings
                        .calculated_dosage
                        .clone()
                        .map(|dosage| {
                            view! {
                                <div class="dosage-box">
                                    <span class="dosage-label">"Calculated Safe Dosage"</span>
                                    <span class="dosage-value">{dosage}</span>
                                </div>
                            }
                        })}
                </div>
            }
        });

    let options = panels.contains(&Panel::OtcOptions).then(|| {
        let heading = if product.is_some() {
            "Other OTC Options"
        } else {
            "Recommended OTC Options"
        };
        let body = if report.suggested_otc_options.is_empty() {
            view! {
                <div class="empty-state text-muted">
                    "No specific OTC options found for these symptoms."
                </div>
            }
            .into_any()
        } else {
            report
                .suggested_otc_options
                .iter()
                .map(|option| {
                    view! {
                        <div class="option-card">
                            <div class="option-heading">
                                <h4>{option.name.clone()}</h4>
                                <div class="dosage-box">
                                    <span class="dosage-label">"Dosage"</span>
                                    <span class="dosage-value">{option.calculated_dosage.clone()}</span>
                                </div>
                            </div>
                            <p class="text-muted">"Purpose: " {option.purpose.clone()}</p>
                            <p class="option-frequency">{option.max_frequency.clone()}</p>
                        </div>
                    }
                })
                .collect_view()
                .into_any()
        };

        view! {
            <div class="panel panel-options">
                <h2>{heading}</h2>
                {body}
            </div>
        }
    });

    let safety_grid = panels.contains(&Panel::SafetyGrid).then(|| {
        view! {
            <div class="safety-grid">
                <div class="panel">
                    <h4>"Safety Warnings"</h4>
                    <ul>{bulleted(&report.safety_warnings)}</ul>
                </div>
                <div class="panel">
                    <h4>"When to see a Doctor"</h4>
                    <ul>{bulleted(&report.doctor_visit_triggers)}</ul>
                </div>
            </div>
        }
    });

    let reset_label = if triage == Triage::NeedsInfo {
        "Update Symptoms & Try Again"
    } else {
        "Start New Analysis"
    };

    view! {
        <div class="results">
            {emergency}
            {clarification}
            {product_panel}
            {options}
            {safety_grid}

            <div class="panel panel-disclaimer">
                <p class="disclaimer-label">"Disclaimer"</p>
                {report.disclaimer.clone()}
            </div>

            <button class="btn btn-primary" on:click=move |_| on_reset(())>
                {reset_label}
            </button>
        </div>
    }
}
