//! Bridge between the egui shell and the verification workspace crates.
//! This must remain the only shell-facing boundary for form operations.

use asset_verify_adapters::{
    InventoryAdapter, SubmissionAdapter, SystemClockAdapter, VerifyAdapterConfig,
};
use asset_verify_core::{
    AssetEntry, Confirmation, EntryId, FormError, InventoryRecord, PortError, SubmissionPayload,
    SubmissionReceipt, VerificationController, VerificationForm,
};

type FormController =
    VerificationController<InventoryAdapter, SubmissionAdapter, SystemClockAdapter>;

pub struct VerifyBridge {
    controller: FormController,
}

impl VerifyBridge {
    pub fn from_config(config: VerifyAdapterConfig) -> Self {
        Self::with_adapters(
            InventoryAdapter::with_config(config.clone()),
            SubmissionAdapter::with_config(config),
        )
    }

    pub fn with_adapters(inventory: InventoryAdapter, submission: SubmissionAdapter) -> Self {
        Self {
            controller: VerificationController::new(inventory, submission, SystemClockAdapter),
        }
    }

    pub fn form(&self) -> &VerificationForm {
        self.controller.form()
    }

    pub fn entries(&self) -> &[AssetEntry] {
        self.controller.entries()
    }

    pub fn source_label(&self) -> String {
        self.controller.inventory.source_label()
    }

    pub fn target_label(&self) -> String {
        self.controller.submission.target_label()
    }

    /// Handle for fetching on a worker thread.
    pub fn inventory_port(&self) -> InventoryAdapter {
        self.controller.inventory.clone()
    }

    /// Handle for submitting on a worker thread.
    pub fn submission_port(&self) -> SubmissionAdapter {
        self.controller.submission.clone()
    }

    pub fn apply_loaded(
        &mut self,
        result: Result<Vec<InventoryRecord>, PortError>,
    ) -> Result<usize, FormError> {
        self.controller
            .apply_loaded(result)
            .map(|entries| entries.len())
    }

    pub fn set_confirmation(
        &mut self,
        entry_id: EntryId,
        value: Confirmation,
    ) -> Result<(), FormError> {
        self.controller.set_confirmation(entry_id, value)
    }

    pub fn set_attestation(&mut self, agreed: bool) -> Result<(), FormError> {
        self.controller.set_attestation(agreed)
    }

    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, FormError> {
        self.controller.begin_submit()
    }

    pub fn finish_submit(
        &mut self,
        result: Result<SubmissionReceipt, PortError>,
    ) -> Result<SubmissionReceipt, FormError> {
        self.controller.finish_submit(result)
    }
}
