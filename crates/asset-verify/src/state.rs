//! UI state types
//!
//! Form data lives in `asset_verify_core::VerificationForm`; this module only
//! holds what the shell itself needs between frames.

use std::sync::{Arc, Mutex};

use asset_verify_core::{FormError, PortError};

pub const ATTESTATION_TEXT: &str =
    "I confirm that the assets listed above are accurate to the best of my knowledge.";

/// Which page of the flow is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Overview,
    Verify,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

#[derive(Debug, Default)]
pub struct UiState {
    pub screen: Screen,
    pub notice: Option<Notice>,
    pub loading: bool,
    pub submitting: bool,
}

impl UiState {
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Error(message.into()));
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice::Info(message.into()));
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

/// Slot a worker fills and the update loop drains.
#[derive(Debug)]
pub struct ResultSlot<T>(Arc<Mutex<Option<T>>>);

impl<T> Clone for ResultSlot<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for ResultSlot<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }
}

impl<T> ResultSlot<T> {
    pub fn put(&self, value: T) {
        match self.0.lock() {
            Ok(mut g) => *g = Some(value),
            Err(e) => tracing::error!("result slot poisoned: {e}"),
        }
    }

    pub fn take(&self) -> Option<T> {
        match self.0.lock() {
            Ok(mut g) => g.take(),
            Err(e) => {
                tracing::error!("result slot poisoned: {e}");
                None
            }
        }
    }
}

/// Message shown to the user for a failed form operation.
pub fn describe_error(err: &FormError) -> String {
    match err {
        FormError::IncompleteForm(readiness) => {
            format!("Please finish the form before submitting: {readiness}.")
        }
        FormError::SubmissionFailed(PortError::Rejected { status, .. }) => format!(
            "The verification service rejected the submission (HTTP {status}). Your answers are kept; try again."
        ),
        FormError::SubmissionFailed(e) => {
            format!("Submission failed: {e}. Your answers are kept; try again.")
        }
        FormError::Inventory(e) => format!("Could not load your assets: {e}"),
        FormError::Locked(phase) => format!("The form cannot be changed while {phase}."),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use asset_verify_core::{EntryId, FormPhase, Readiness};

    use super::*;

    #[test]
    fn slot_hands_value_over_once() {
        let slot = ResultSlot::default();
        let worker = slot.clone();
        worker.put(7u32);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn incomplete_form_message_names_missing_items() {
        let err = FormError::IncompleteForm(Readiness {
            no_entries: false,
            unanswered: vec![EntryId(2)],
            attestation_missing: true,
        });
        let message = describe_error(&err);
        assert!(message.contains("1 asset still unanswered (#2)"));
        assert!(message.contains("attestation not agreed"));
    }

    #[test]
    fn rejected_submission_mentions_status() {
        let err = FormError::SubmissionFailed(PortError::Rejected {
            status: 502,
            body: "bad gateway".to_owned(),
        });
        assert!(describe_error(&err).contains("HTTP 502"));
    }

    #[test]
    fn locked_message_names_phase() {
        let err = FormError::Locked(FormPhase::Submitted);
        assert_eq!(describe_error(&err), "The form cannot be changed while submitted.");
    }

    #[test]
    fn notices_replace_each_other() {
        let mut state = UiState::default();
        state.set_error("boom");
        state.set_info("ok");
        assert_eq!(state.notice, Some(Notice::Info("ok".to_owned())));
        state.clear_notice();
        assert!(state.notice.is_none());
    }
}
