use stockroom_core::persist;
use stockroom_core::{MovementLog, MovementLogError, PersistError, RepoError, StockMovement};

fn movement(id: u32, name: &str, quantity: i64) -> StockMovement {
    StockMovement::try_new(id, name, quantity, 1_700_000_000_000 + i64::from(id)).unwrap()
}

#[test]
fn save_then_load_roundtrips_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movements.json");

    let movements = vec![
        movement(1, "Pallet intake", 40),
        movement(2, "Shelf restock", 12),
        movement(3, "Damaged writeoff", 0),
    ];
    persist::save(&movements, &path).unwrap();

    let loaded: Vec<StockMovement> = persist::load(&path).unwrap();
    assert_eq!(loaded, movements);
}

#[test]
fn load_missing_file_returns_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never-written.json");

    let loaded: Vec<StockMovement> = persist::load(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_replaces_prior_content_and_leaves_no_staging_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movements.json");

    persist::save(&vec![movement(1, "First", 1)], &path).unwrap();
    persist::save(&vec![movement(2, "Second", 2)], &path).unwrap();

    let loaded: Vec<StockMovement> = persist::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, 2);

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("movements.json")]);
}

#[test]
fn malformed_record_is_reported_with_its_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movements.json");

    // Second record is missing `quantity`.
    std::fs::write(
        &path,
        r#"[
  {"id": 1, "name": "Pallet intake", "quantity": 40, "recorded_at": 1},
  {"id": 2, "name": "Shelf restock", "recorded_at": 2}
]"#,
    )
    .unwrap();

    let err = persist::load::<StockMovement>(&path).unwrap_err();
    match err {
        PersistError::MalformedRecord { record, detail } => {
            assert_eq!(record, 2);
            assert!(detail.contains("quantity"), "unexpected detail: {detail}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_sequence_document_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movements.json");
    std::fs::write(&path, r#"{"not": "a sequence"}"#).unwrap();

    let err = persist::load::<StockMovement>(&path).unwrap_err();
    assert!(matches!(err, PersistError::Document(_)));
}

#[test]
fn movement_log_roundtrips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movements.json");

    let mut log = MovementLog::new();
    log.record(movement(1, "Pallet intake", 40)).unwrap();
    log.record(movement(2, "Shelf restock", 12)).unwrap();
    log.save_to(&path).unwrap();

    let restored = MovementLog::load_from(&path).unwrap();
    assert_eq!(restored.entries(), log.entries());
}

#[test]
fn movement_log_load_of_missing_file_yields_empty_log() {
    let dir = tempfile::tempdir().unwrap();
    let restored = MovementLog::load_from(dir.path().join("absent.json")).unwrap();
    assert!(restored.is_empty());
}

#[test]
fn movement_log_rejects_duplicate_ids() {
    let mut log = MovementLog::new();
    log.record(movement(1, "Pallet intake", 40)).unwrap();

    let err = log.record(movement(1, "Repeat", 5)).unwrap_err();
    assert!(matches!(
        err,
        MovementLogError::Repo(RepoError::DuplicateKey(1))
    ));
    assert_eq!(log.len(), 1);
}

#[test]
fn movement_log_load_rejects_persisted_duplicate_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("movements.json");

    std::fs::write(
        &path,
        r#"[
  {"id": 1, "name": "Pallet intake", "quantity": 40, "recorded_at": 1},
  {"id": 1, "name": "Repeat", "quantity": 5, "recorded_at": 2}
]"#,
    )
    .unwrap();

    let err = MovementLog::load_from(&path).unwrap_err();
    assert!(matches!(
        err,
        MovementLogError::Repo(RepoError::DuplicateKey(1))
    ));
}
