use chrono::{DateTime, Utc};
use qrmaster_core::{
    Config, ContentType, Customization, RecordDraft, RecordId, RecordName, RecordUpdate, RedbSlot,
    SavedCodeStore, Slot,
};
use tempfile::TempDir;

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn open_store(temp: &TempDir) -> SavedCodeStore<RedbSlot> {
    SavedCodeStore::open(&Config::new(temp.path())).unwrap()
}

fn draft(content_type: ContentType, payload: &str) -> RecordDraft {
    RecordDraft {
        content_type,
        customization: Customization::default(),
        payload: payload.to_string(),
        name: None,
    }
}

#[test]
fn test_records_survive_reopen() {
    let temp = TempDir::new().unwrap();

    let saved = {
        let mut store = open_store(&temp);
        store
            .save(draft(ContentType::Phone, "tel:5551234"), at(10))
            .unwrap()
    };

    let store = open_store(&temp);
    assert_eq!(store.list(), vec![saved]);
    assert!(temp.path().join("qrmaster.redb").exists());
}

#[test]
fn test_full_lifecycle_on_disk() {
    let temp = TempDir::new().unwrap();
    let mut store = open_store(&temp);

    let a = store.save(draft(ContentType::Url, "https://a"), at(1)).unwrap();
    let b = store.save(draft(ContentType::Text, "b"), at(2)).unwrap();

    assert!(store.record_scan(a.id, at(3)).unwrap());
    assert!(
        store
            .update(
                b.id,
                RecordUpdate::new().name(Some(RecordName::try_new("Note").unwrap()))
            )
            .unwrap()
    );
    store.delete(RecordId::new()).unwrap();

    drop(store);
    let mut store = open_store(&temp);

    let listed = store.list();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].scans, 1);
    assert_eq!(listed[0].last_scanned, Some(at(3)));
    assert_eq!(listed[1].name.as_ref().map(|n| n.to_string()), Some("Note".to_string()));

    store.delete(a.id).unwrap();
    assert_eq!(store.list().iter().map(|r| r.id).collect::<Vec<_>>(), vec![b.id]);
}

#[test]
fn test_corrupt_row_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let mut slot = RedbSlot::open(&Config::new(temp.path())).unwrap();
    slot.store("saved-qr-codes", "definitely not json").unwrap();

    let mut store = SavedCodeStore::new(slot);
    assert!(store.list().is_empty());

    let saved = store.save(draft(ContentType::Text, "fresh"), at(1)).unwrap();
    assert_eq!(store.list(), vec![saved]);
}

#[test]
fn test_slot_keys_are_independent() {
    let temp = TempDir::new().unwrap();
    let mut slot = RedbSlot::open(&Config::new(temp.path())).unwrap();

    slot.store("one", "1").unwrap();
    slot.store("two", "2").unwrap();
    slot.store("one", "uno").unwrap();

    assert_eq!(slot.load("one").unwrap().as_deref(), Some("uno"));
    assert_eq!(slot.load("two").unwrap().as_deref(), Some("2"));
    assert_eq!(slot.load("three").unwrap(), None);
}

#[test]
fn test_open_creates_data_dir() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("a/b/c");

    RedbSlot::open(&Config::new(&nested)).unwrap();

    assert!(nested.join("qrmaster.redb").exists());
}
