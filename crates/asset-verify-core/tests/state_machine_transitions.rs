use asset_verify_core::{form_transition, FormAction, FormPhase};

#[test]
fn submit_happy_path_transitions() {
    let s1 = form_transition(FormPhase::Editing, FormAction::BeginSubmit)
        .expect("editing -> submitting");
    assert_eq!(s1, FormPhase::Submitting);
    let s2 = form_transition(s1, FormAction::SubmitSucceeded).expect("submitting -> submitted");
    assert_eq!(s2, FormPhase::Submitted);
}

#[test]
fn failed_submit_returns_to_editing() {
    let s1 = form_transition(FormPhase::Submitting, FormAction::SubmitFailed)
        .expect("submitting -> editing");
    assert_eq!(s1, FormPhase::Editing);
}

#[test]
fn submitted_is_terminal() {
    for action in [
        FormAction::BeginSubmit,
        FormAction::SubmitSucceeded,
        FormAction::SubmitFailed,
    ] {
        let err = form_transition(FormPhase::Submitted, action).expect_err("must fail");
        assert!(err.to_string().contains("illegal form transition"));
    }
}

#[test]
fn double_begin_is_rejected() {
    let err =
        form_transition(FormPhase::Submitting, FormAction::BeginSubmit).expect_err("must fail");
    assert_eq!(err.from, FormPhase::Submitting);
    assert_eq!(err.action, FormAction::BeginSubmit);
}
