mod common;

use asset_verify_core::{Confirmation, EntryId, FormError, FormPhase};

#[test]
fn bundled_inventory_verification_round() {
    let (mut controller, submission) = common::bundled_controller();
    let entries = controller.load_entries().expect("load bundled");
    assert_eq!(entries.len(), 2);

    let err = controller.submit().expect_err("nothing answered yet");
    assert!(matches!(err, FormError::IncompleteForm(_)));

    controller
        .set_confirmation(EntryId(1), Confirmation::ConfirmedMine)
        .expect("confirm laptop");
    controller
        .set_confirmation(EntryId(2), Confirmation::ConfirmedMine)
        .expect("confirm monitor");
    controller.set_attestation(true).expect("attest");

    let receipt = controller.submit().expect("submit");
    assert_eq!(receipt.reference.as_deref(), Some("LOCAL-0001"));
    assert_eq!(controller.form().phase(), FormPhase::Submitted);

    let recorded = submission.recorded().expect("recorded");
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0]
        .entries
        .iter()
        .all(|e| e.confirmation == Confirmation::ConfirmedMine));
}

#[test]
fn worker_style_submit_round() {
    let (mut controller, submission) = common::bundled_controller();
    let worker_port = submission.clone();
    controller.load_entries().expect("load bundled");
    controller
        .set_confirmation(EntryId(1), Confirmation::ConfirmedMine)
        .expect("confirm laptop");
    controller
        .set_confirmation(EntryId(2), Confirmation::DeniedMine)
        .expect("deny monitor");
    controller.set_attestation(true).expect("attest");

    let payload = controller.begin_submit().expect("begin");
    let handle = std::thread::spawn(move || {
        use asset_verify_core::SubmissionPort;
        worker_port.submit(&payload)
    });
    let result = handle.join().expect("worker thread");
    controller.finish_submit(result).expect("finish");

    assert!(controller.form().is_read_only());
    assert_eq!(submission.recorded().expect("recorded").len(), 1);
}
