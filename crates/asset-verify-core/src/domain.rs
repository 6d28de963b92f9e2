use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetStatus {
    CorrectlyAssigned,
    PendingConfirmation,
}

impl AssetStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::CorrectlyAssigned => "Correctly assigned",
            AssetStatus::PendingConfirmation => "Pending confirmation",
        }
    }
}

/// Per-asset ownership answer given by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Confirmation {
    #[default]
    Unanswered,
    ConfirmedMine,
    DeniedMine,
}

impl Confirmation {
    pub fn is_answered(&self) -> bool {
        !matches!(self, Confirmation::Unanswered)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Confirmation::Unanswered => "Unanswered",
            Confirmation::ConfirmedMine => "This is mine",
            Confirmation::DeniedMine => "Not my asset",
        }
    }
}

/// Asset record as delivered by an inventory source.
///
/// Sources never decide the user's answer, so there is no confirmation field
/// here; unknown fields in the source document are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: EntryId,
    pub display_name: String,
    pub serial_number: String,
    pub assigned_date: String,
    pub image_url: String,
    pub status: AssetStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntry {
    pub id: EntryId,
    pub display_name: String,
    pub serial_number: String,
    pub assigned_date: String,
    pub image_url: String,
    pub status: AssetStatus,
    pub confirmation: Confirmation,
}

impl From<InventoryRecord> for AssetEntry {
    fn from(record: InventoryRecord) -> Self {
        Self {
            id: record.id,
            display_name: record.display_name,
            serial_number: record.serial_number,
            assigned_date: record.assigned_date,
            image_url: record.image_url,
            status: record.status,
            confirmation: Confirmation::Unanswered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttestationState {
    pub agreed: bool,
}

/// Body handed to the submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub entries: Vec<AssetEntry>,
    pub attested: bool,
    pub submitted_at_ms: TimestampMs,
}

impl SubmissionPayload {
    pub fn confirmed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.confirmation == Confirmation::ConfirmedMine)
            .count()
    }

    pub fn denied_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.confirmation == Confirmation::DeniedMine)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub reference: Option<String>,
    pub accepted_at_ms: TimestampMs,
}
