use asset_verify_core::{
    AssetEntry, AssetStatus, Confirmation, EntryId, InventoryRecord, SubmissionPayload,
    TimestampMs,
};
use serde_json::json;

#[test]
fn inventory_record_uses_camel_case_and_ignores_unknown_fields() {
    let raw = json!({
        "id": 7,
        "displayName": "ThinkPad X1 Carbon",
        "serialNumber": "PF-3K2L9",
        "assignedDate": "2023-11-20",
        "imageUrl": "https://example.com/x1.png",
        "status": "pendingConfirmation",
        "confirmation": "confirmedMine",
        "location": "HQ"
    });
    let record: InventoryRecord = serde_json::from_value(raw).expect("decode record");
    assert_eq!(record.id, EntryId(7));
    assert_eq!(record.status, AssetStatus::PendingConfirmation);

    let entry = AssetEntry::from(record);
    assert_eq!(entry.confirmation, Confirmation::Unanswered);
}

#[test]
fn payload_wire_shape_is_stable() {
    let payload = SubmissionPayload {
        entries: vec![AssetEntry {
            id: EntryId(1),
            display_name: "MacBook Pro".to_owned(),
            serial_number: "C02".to_owned(),
            assigned_date: "2024-03-11".to_owned(),
            image_url: String::new(),
            status: AssetStatus::CorrectlyAssigned,
            confirmation: Confirmation::DeniedMine,
        }],
        attested: true,
        submitted_at_ms: TimestampMs(1_739_750_400_000),
    };

    let value = serde_json::to_value(&payload).expect("encode payload");
    assert_eq!(value["attested"], json!(true));
    assert_eq!(value["submittedAtMs"], json!(1_739_750_400_000u64));
    assert_eq!(value["entries"][0]["id"], json!(1));
    assert_eq!(value["entries"][0]["status"], json!("correctlyAssigned"));
    assert_eq!(value["entries"][0]["confirmation"], json!("deniedMine"));
    assert_eq!(payload.denied_count(), 1);
    assert_eq!(payload.confirmed_count(), 0);
}

#[test]
fn unknown_status_is_rejected() {
    let raw = json!({
        "id": 1,
        "displayName": "Monitor",
        "serialNumber": "X",
        "assignedDate": "2024-01-01",
        "imageUrl": "",
        "status": "stolen"
    });
    assert!(serde_json::from_value::<InventoryRecord>(raw).is_err());
}
