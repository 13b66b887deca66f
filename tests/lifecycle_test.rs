//! Submission-lifecycle tests.
//!
//! Drives the session state machine through the public API and checks the
//! rendered surface for each terminal state.

use helprx_common::{Analysis, AnalysisReport, OtcOption};
use helprx_rust::render::render_analysis;
use helprx_rust::session::{LoadingState, Session, TransitionError};

fn sample_analysis() -> Analysis {
    Analysis::TextOnly(AnalysisReport {
        disclaimer: "educational use only".to_string(),
        suggested_otc_options: vec![OtcOption {
            name: "Ibuprofen".to_string(),
            purpose: "Pain and inflammation relief".to_string(),
            calculated_dosage: "400 mg".to_string(),
            max_frequency: "Every 6-8 hours".to_string(),
        }],
        ..Default::default()
    })
}

/// A completed submission leaves exactly one result, and rendering it is
/// stable across repeated calls
#[test]
fn test_success_state_renders_stable_output() {
    let mut session = Session::new();
    session.submit().unwrap();
    session.complete(sample_analysis()).unwrap();

    let analysis = session.result().expect("result expected");
    let first = render_analysis(analysis);
    let second = render_analysis(analysis);

    assert_eq!(first, second);
    assert!(first.contains("Ibuprofen"));
    assert!(first.contains("educational use only"));
}

/// A second submission replaces the previous result entirely
#[test]
fn test_resubmission_replaces_result() {
    let mut session = Session::new();
    session.submit().unwrap();
    session.complete(sample_analysis()).unwrap();
    session.reset().unwrap();

    let mut replacement = AnalysisReport::default();
    replacement.disclaimer = "second run".to_string();
    session.submit().unwrap();
    session.complete(Analysis::TextOnly(replacement)).unwrap();

    let rendered = render_analysis(session.result().unwrap());
    assert!(rendered.contains("second run"));
    assert!(!rendered.contains("Ibuprofen"));
}

/// The retry path: failure shows only the error surface, then reset
/// returns to the form
#[test]
fn test_failure_then_reset_recovers_to_idle() {
    let mut session = Session::new();
    session.submit().unwrap();
    session.fail("network unreachable").unwrap();

    assert_eq!(session.state(), LoadingState::Error);
    assert!(session.result().is_none());

    session.reset().unwrap();
    assert_eq!(session.state(), LoadingState::Idle);
    assert!(session.error_message().is_none());
}

/// Only one request may be in flight, and it cannot be reset out from
/// under itself
#[test]
fn test_loading_blocks_submit_and_reset() {
    let mut session = Session::new();
    session.submit().unwrap();

    assert_eq!(session.submit(), Err(TransitionError::AlreadyLoading));
    assert!(session.reset().is_err());
    assert_eq!(session.state(), LoadingState::Loading);
}
