pub mod controller;
pub mod domain;
pub mod form;
pub mod ports;
pub mod state_machine;

pub use controller::{CommandOutcome, FormCommand, VerificationController};
pub use domain::{
    AssetEntry, AssetStatus, AttestationState, Confirmation, EntryId, InventoryRecord,
    SubmissionPayload, SubmissionReceipt, TimestampMs,
};
pub use form::{FormError, Readiness, VerificationForm};
pub use ports::{ClockPort, InventoryPort, PortError, SubmissionPort};
pub use state_machine::{form_transition, FormAction, FormPhase, TransitionError};
