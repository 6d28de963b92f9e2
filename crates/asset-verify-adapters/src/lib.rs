pub mod clock;
pub mod config;
pub mod inventory;
pub mod submission;

pub use clock::SystemClockAdapter;
pub use config::{RuntimeProfile, VerifyAdapterConfig};
pub use inventory::{parse_inventory, InventoryAdapter};
pub use submission::SubmissionAdapter;

const MAX_ERROR_BODY_CHARS: usize = 512;

pub(crate) fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_owned();
    }
    let mut out: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    out.push('…');
    out
}
