//! Main application component.
//!
//! Owns the submission lifecycle: exactly one of {form, spinner, error
//! panel, results} is visible at a time, and exactly one request may be in
//! flight. Reset is only reachable from the terminal states.

use leptos::prelude::*;
use leptos::task::spawn_local;

use helprx_common::{Analysis, AnalysisRequest};

use crate::api;
use crate::components::{
    api_key_panel::ApiKeyPanel,
    header::Header,
    loading_spinner::LoadingSpinner,
    results_display::ResultsDisplay,
    symptom_form::SymptomForm,
};
use crate::encode;

/// Every failure reads the same to the user; the cause goes to the console.
const GENERIC_FAILURE: &str =
    "Unable to process request. Please try again later or check your network.";

/// Submission lifecycle state.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl LoadingState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingState::Idle => "idle",
            LoadingState::Loading => "loading",
            LoadingState::Success => "success",
            LoadingState::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadingState::Success | LoadingState::Error)
    }
}

/// One submission as it leaves the form. Field strings are bound by the
/// input widgets; the image is optional and never gates submission.
pub struct Submission {
    pub age: u32,
    pub weight: f64,
    pub symptoms: String,
    pub image: Option<web_sys::File>,
}

/// Submission gate: age, weight, and a non-empty trimmed symptom text must
/// all be present and in bounds. Pure, so the button state is a projection.
pub fn form_is_valid(age: &str, weight: &str, symptoms: &str) -> bool {
    let age_ok = age.trim().parse::<u32>().map_or(false, |a| a <= 120);
    let weight_ok = weight
        .trim()
        .parse::<f64>()
        .map_or(false, |w| (0.0..=999.0).contains(&w));
    age_ok && weight_ok && !symptoms.trim().is_empty()
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let (api_key, set_api_key) = signal(String::new());
    let (status, set_status) = signal(LoadingState::Idle);
    let (result, set_result) = signal(None::<Analysis>);
    let (error, set_error) = signal(None::<String>);

    // Submit handler: the only path into Loading
    let on_submit = move |submission: Submission| {
        if status.get_untracked() == LoadingState::Loading {
            return;
        }

        set_status.set(LoadingState::Loading);
        set_error.set(None);

        let key = api_key.get_untracked();
        spawn_local(async move {
            match run_analysis(&key, submission).await {
                Ok(analysis) => {
                    set_result.set(Some(analysis));
                    set_status.set(LoadingState::Success);
                }
                Err(cause) => {
                    web_sys::console::error_1(&format!("analysis failed: {cause}").into());
                    set_error.set(Some(GENERIC_FAILURE.to_string()));
                    set_status.set(LoadingState::Error);
                }
            }
        });
    };

    // Reset handler: only reachable from terminal states
    let on_reset = move |_: ()| {
        if status.get_untracked().is_terminal() {
            set_result.set(None);
            set_error.set(None);
            set_status.set(LoadingState::Idle);
        }
    };

    view! {
        <div class="container" data-status=move || status.get().as_str()>
            <Header />

            <div class="intro">
                <h1>"Symptom Analyzer"</h1>
                <p class="text-muted">
                    "Enter your information below to receive OTC medication recommendations."
                </p>
            </div>

            <Show when=move || status.get() == LoadingState::Idle>
                <ApiKeyPanel api_key=api_key set_api_key=set_api_key />
                <SymptomForm on_submit=on_submit />
            </Show>

            <Show when=move || status.get() == LoadingState::Loading>
                <LoadingSpinner />
            </Show>

            <Show when=move || status.get() == LoadingState::Error>
                <div class="error-panel">
                    {move || error.get().unwrap_or_default()}
                </div>
                <button class="btn btn-primary" on:click=move |_| on_reset(())>
                    "Try Again"
                </button>
            </Show>

            <Show when=move || status.get() == LoadingState::Success>
                {move || {
                    result.get().map(|analysis| {
                        view! { <ResultsDisplay analysis=analysis on_reset=on_reset /> }
                    })
                }}
            </Show>

            <footer class="footer text-muted">
                "HelpRX is for informational purposes only. Not a substitute for medical advice."
            </footer>
        </div>
    }
}

/// The two suspension points of a submission: image encoding, awaited
/// fully, then the single network call.
async fn run_analysis(api_key: &str, submission: Submission) -> Result<Analysis, String> {
    let image = match submission.image {
        Some(file) => Some(encode::read_inline_image(&file).await?),
        None => None,
    };

    let request = AnalysisRequest {
        age: submission.age,
        weight: submission.weight,
        symptoms: submission.symptoms.trim().to_string(),
        image,
    };

    api::gemini::analyze(api_key, &request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_valid_with_all_fields() {
        assert!(form_is_valid("32", "160", "headache for 2 days"));
    }

    #[test]
    fn test_form_invalid_missing_any_field() {
        assert!(!form_is_valid("", "160", "headache"));
        assert!(!form_is_valid("32", "", "headache"));
        assert!(!form_is_valid("32", "160", ""));
    }

    #[test]
    fn test_form_invalid_blank_symptoms() {
        assert!(!form_is_valid("32", "160", "   "));
    }

    #[test]
    fn test_form_bounds() {
        assert!(!form_is_valid("121", "160", "headache"));
        assert!(!form_is_valid("32", "1000", "headache"));
        assert!(form_is_valid("0", "0", "newborn congestion"));
        assert!(form_is_valid("120", "999", "joint pain"));
    }

    #[test]
    fn test_loading_state_terminal() {
        assert!(!LoadingState::Idle.is_terminal());
        assert!(!LoadingState::Loading.is_terminal());
        assert!(LoadingState::Success.is_terminal());
        assert!(LoadingState::Error.is_terminal());
    }

    #[test]
    fn test_loading_state_as_str() {
        assert_eq!(LoadingState::Idle.as_str(), "idle");
        assert_eq!(LoadingState::Loading.as_str(), "loading");
        assert_eq!(LoadingState::Success.as_str(), "success");
        assert_eq!(LoadingState::Error.as_str(), "error");
    }
}
