use thiserror::Error;

use crate::domain::{InventoryRecord, SubmissionPayload, SubmissionReceipt};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("rejected by service (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("policy error: {0}")]
    Policy(String),
}

/// Source of the assets shown for confirmation.
pub trait InventoryPort {
    fn fetch_assets(&self) -> Result<Vec<InventoryRecord>, PortError>;
}

/// Service that accepts a completed verification.
pub trait SubmissionPort {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}
