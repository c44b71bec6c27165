use std::io::Write;

use items::{ItemCategory, ItemId, ItemStatus, ItemStore, NewItem, StoreConfig, StoreError};

#[test]
fn seeded_store_loads_items_from_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"[
            {{"id": 1, "name": "iPhone 13", "status": "LOST", "category": "ELECTRONICS",
              "location": "Central Park", "createdAt": "2024-05-01T10:00:00Z", "reportedBy": 10}},
            {{"id": 5, "name": "Tote", "status": "FOUND", "category": "handbag"}}
        ]"#
    )
    .expect("write seed");

    let store = StoreConfig::seeded(file.path().to_string_lossy())
        .build()
        .expect("seeded store");

    let phone = store.get(ItemId(1)).unwrap().expect("item 1");
    assert_eq!(phone.category, Some(ItemCategory::Electronics));
    assert_eq!(phone.location.as_deref(), Some("Central Park"));

    let tote = store.get(ItemId(5)).unwrap().expect("item 5");
    assert_eq!(tote.category, Some(ItemCategory::Custom("HANDBAG".into())));
    assert!(tote.reported_by.is_none());

    let next = store
        .insert(NewItem::new("Scarf", ItemStatus::Found))
        .expect("insert");
    assert_eq!(next.id, ItemId(6));
}

#[test]
fn malformed_seed_is_a_decode_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{ not json").expect("write seed");

    let result = StoreConfig::seeded(file.path().to_string_lossy()).build();
    assert!(matches!(result, Err(StoreError::Decode(_))));
}

#[test]
fn missing_seed_is_an_io_error() {
    let result = StoreConfig::seeded("/definitely/not/here.json").build();
    assert!(matches!(result, Err(StoreError::Io(_))));
}
