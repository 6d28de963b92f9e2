use crate::domain::{
    AssetEntry, Confirmation, EntryId, InventoryRecord, SubmissionPayload, SubmissionReceipt,
    TimestampMs,
};
use crate::form::{FormError, VerificationForm};
use crate::ports::{ClockPort, InventoryPort, PortError, SubmissionPort};
use crate::state_machine::FormPhase;

#[derive(Debug, Clone)]
pub enum FormCommand {
    LoadEntries,
    SetConfirmation {
        entry_id: EntryId,
        value: Confirmation,
    },
    SetAttestation {
        agreed: bool,
    },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Loaded { count: usize },
    Updated,
    Submitted(SubmissionReceipt),
}

/// Verification Form Controller: the form state plus the collaborators it
/// reads from and submits to.
pub struct VerificationController<I, S, C>
where
    I: InventoryPort,
    S: SubmissionPort,
    C: ClockPort,
{
    pub inventory: I,
    pub submission: S,
    pub clock: C,
    form: VerificationForm,
}

impl<I, S, C> VerificationController<I, S, C>
where
    I: InventoryPort,
    S: SubmissionPort,
    C: ClockPort,
{
    pub fn new(inventory: I, submission: S, clock: C) -> Self {
        Self {
            inventory,
            submission,
            clock,
            form: VerificationForm::new(),
        }
    }

    pub fn form(&self) -> &VerificationForm {
        &self.form
    }

    pub fn entries(&self) -> &[AssetEntry] {
        self.form.entries()
    }

    pub fn handle(&mut self, command: FormCommand) -> Result<CommandOutcome, FormError> {
        match command {
            FormCommand::LoadEntries => {
                let count = self.load_entries()?.len();
                Ok(CommandOutcome::Loaded { count })
            }
            FormCommand::SetConfirmation { entry_id, value } => {
                self.set_confirmation(entry_id, value)?;
                Ok(CommandOutcome::Updated)
            }
            FormCommand::SetAttestation { agreed } => {
                self.set_attestation(agreed)?;
                Ok(CommandOutcome::Updated)
            }
            FormCommand::Submit => self.submit().map(CommandOutcome::Submitted),
        }
    }

    pub fn load_entries(&mut self) -> Result<&[AssetEntry], FormError> {
        // Refuse before touching the source so a locked form never fetches.
        if self.form.phase() != FormPhase::Editing {
            return Err(FormError::Locked(self.form.phase()));
        }
        let records = self
            .inventory
            .fetch_assets()
            .map_err(FormError::Inventory)?;
        self.form.replace_entries(records)
    }

    /// Applies records fetched elsewhere, e.g. on a worker thread.
    pub fn apply_loaded(
        &mut self,
        result: Result<Vec<InventoryRecord>, PortError>,
    ) -> Result<&[AssetEntry], FormError> {
        let records = result.map_err(FormError::Inventory)?;
        self.form.replace_entries(records)
    }

    pub fn set_confirmation(
        &mut self,
        entry_id: EntryId,
        value: Confirmation,
    ) -> Result<(), FormError> {
        self.form.set_confirmation(entry_id, value)
    }

    pub fn set_attestation(&mut self, agreed: bool) -> Result<(), FormError> {
        self.form.set_attestation(agreed)
    }

    /// Validates, calls the submission collaborator once, and applies its
    /// result.
    pub fn submit(&mut self) -> Result<SubmissionReceipt, FormError> {
        let payload = self.begin_submit()?;
        let result = self.submission.submit(&payload);
        self.form.finish_submit(result)
    }

    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, FormError> {
        let readiness = self.form.readiness();
        if self.form.phase() == FormPhase::Editing && !readiness.is_complete() {
            return Err(FormError::IncompleteForm(readiness));
        }
        let now = TimestampMs(self.clock.now_ms().map_err(FormError::Clock)?);
        self.form.begin_submit(now)
    }

    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionReceipt, PortError>,
    ) -> Result<SubmissionReceipt, FormError> {
        self.form.finish_submit(result)
    }
}
