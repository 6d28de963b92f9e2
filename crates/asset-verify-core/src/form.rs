//! In-memory state of the verification page.
//!
//! `VerificationForm` holds no collaborators; everything that talks to an
//! inventory source or a submission service goes through
//! [`crate::controller::VerificationController`]. Shells that must not block
//! while a submission is in flight drive the two halves of a submit
//! themselves with [`VerificationForm::begin_submit`] and
//! [`VerificationForm::finish_submit`].

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::domain::{
    AssetEntry, AttestationState, Confirmation, EntryId, InventoryRecord, SubmissionPayload,
    SubmissionReceipt, TimestampMs,
};
use crate::ports::PortError;
use crate::state_machine::{form_transition, FormAction, FormPhase, TransitionError};

/// What is still missing before the form can be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Readiness {
    pub no_entries: bool,
    pub unanswered: Vec<EntryId>,
    pub attestation_missing: bool,
}

impl Readiness {
    pub fn is_complete(&self) -> bool {
        !self.no_entries && self.unanswered.is_empty() && !self.attestation_missing
    }
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.no_entries {
            parts.push("no assets loaded".to_owned());
        }
        if !self.unanswered.is_empty() {
            let ids = self
                .unanswered
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let noun = if self.unanswered.len() == 1 {
                "asset"
            } else {
                "assets"
            };
            parts.push(format!(
                "{} {noun} still unanswered ({ids})",
                self.unanswered.len()
            ));
        }
        if self.attestation_missing {
            parts.push("attestation not agreed".to_owned());
        }
        if parts.is_empty() {
            f.write_str("ready")
        } else {
            f.write_str(&parts.join("; "))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("asset entry not found: {0}")]
    NotFound(EntryId),
    #[error("form incomplete: {0}")]
    IncompleteForm(Readiness),
    #[error("submission failed: {0}")]
    SubmissionFailed(PortError),
    #[error("form is read-only while {0}")]
    Locked(FormPhase),
    #[error("inventory unavailable: {0}")]
    Inventory(PortError),
    #[error("clock unavailable: {0}")]
    Clock(PortError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationForm {
    entries: Vec<AssetEntry>,
    attestation: AttestationState,
    phase: FormPhase,
    receipt: Option<SubmissionReceipt>,
}

impl Default for VerificationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationForm {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            attestation: AttestationState::default(),
            phase: FormPhase::Editing,
            receipt: None,
        }
    }

    pub fn from_records(records: Vec<InventoryRecord>) -> Result<Self, FormError> {
        let mut form = Self::new();
        form.replace_entries(records)?;
        Ok(form)
    }

    /// Replaces the asset list with a freshly loaded one.
    ///
    /// Every confirmation restarts at `Unanswered` and the attestation is
    /// cleared, since it covered the previous list.
    pub fn replace_entries(
        &mut self,
        records: Vec<InventoryRecord>,
    ) -> Result<&[AssetEntry], FormError> {
        self.ensure_editable()?;
        validate_records(&records).map_err(FormError::Inventory)?;
        self.entries = records.into_iter().map(AssetEntry::from).collect();
        self.attestation = AttestationState::default();
        Ok(&self.entries)
    }

    pub fn entries(&self) -> &[AssetEntry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&AssetEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn attestation(&self) -> AttestationState {
        self.attestation
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    pub fn is_read_only(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn set_confirmation(&mut self, id: EntryId, value: Confirmation) -> Result<(), FormError> {
        self.ensure_editable()?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(FormError::NotFound(id))?;
        entry.confirmation = value;
        Ok(())
    }

    pub fn set_attestation(&mut self, agreed: bool) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.attestation.agreed = agreed;
        Ok(())
    }

    pub fn readiness(&self) -> Readiness {
        Readiness {
            no_entries: self.entries.is_empty(),
            unanswered: self
                .entries
                .iter()
                .filter(|e| !e.confirmation.is_answered())
                .map(|e| e.id)
                .collect(),
            attestation_missing: !self.attestation.agreed,
        }
    }

    /// `(answered, total)` over the loaded entries.
    pub fn progress(&self) -> (usize, usize) {
        let answered = self
            .entries
            .iter()
            .filter(|e| e.confirmation.is_answered())
            .count();
        (answered, self.entries.len())
    }

    /// Validates the form and moves it to `Submitting`.
    ///
    /// An incomplete form is left untouched. On success the returned payload
    /// carries the full entry list and the form refuses mutations until
    /// [`Self::finish_submit`] is called.
    pub fn begin_submit(&mut self, now: TimestampMs) -> Result<SubmissionPayload, FormError> {
        self.ensure_editable()?;
        let readiness = self.readiness();
        if !readiness.is_complete() {
            return Err(FormError::IncompleteForm(readiness));
        }
        self.phase = form_transition(self.phase, FormAction::BeginSubmit)?;
        Ok(SubmissionPayload {
            entries: self.entries.clone(),
            attested: self.attestation.agreed,
            submitted_at_ms: now,
        })
    }

    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionReceipt, PortError>,
    ) -> Result<SubmissionReceipt, FormError> {
        match result {
            Ok(receipt) => {
                self.phase = form_transition(self.phase, FormAction::SubmitSucceeded)?;
                self.receipt = Some(receipt.clone());
                Ok(receipt)
            }
            Err(err) => {
                self.phase = form_transition(self.phase, FormAction::SubmitFailed)?;
                Err(FormError::SubmissionFailed(err))
            }
        }
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.phase != FormPhase::Editing {
            return Err(FormError::Locked(self.phase));
        }
        Ok(())
    }
}

fn validate_records(records: &[InventoryRecord]) -> Result<(), PortError> {
    if records.is_empty() {
        return Err(PortError::Validation("inventory is empty".to_owned()));
    }
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id) {
            return Err(PortError::Validation(format!(
                "duplicate asset id in inventory: {}",
                record.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetStatus;

    fn record(id: u64) -> InventoryRecord {
        InventoryRecord {
            id: EntryId(id),
            display_name: format!("asset-{id}"),
            serial_number: format!("SN-{id}"),
            assigned_date: "2024-01-01".to_owned(),
            image_url: String::new(),
            status: AssetStatus::CorrectlyAssigned,
        }
    }

    #[test]
    fn readiness_message_lists_missing_items() {
        let form = VerificationForm::from_records(vec![record(1), record(2)]).expect("form");
        let message = form.readiness().to_string();
        assert_eq!(
            message,
            "2 assets still unanswered (#1, #2); attestation not agreed"
        );
    }

    #[test]
    fn empty_form_is_not_ready() {
        let form = VerificationForm::new();
        let readiness = form.readiness();
        assert!(readiness.no_entries);
        assert!(!readiness.is_complete());
    }

    #[test]
    fn finish_without_begin_is_illegal() {
        let mut form = VerificationForm::from_records(vec![record(1)]).expect("form");
        let err = form
            .finish_submit(Err(PortError::Transport("boom".to_owned())))
            .expect_err("must fail");
        assert!(matches!(err, FormError::Transition(_)));
        assert_eq!(form.phase(), FormPhase::Editing);
    }
}
