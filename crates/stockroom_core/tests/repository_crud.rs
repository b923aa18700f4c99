use stockroom_core::{ElectronicItem, MemoryRepository, RepoError, Repository};

fn item(id: u32, name: &str, quantity: i64) -> ElectronicItem {
    ElectronicItem::try_new(id, name, quantity, "Acme", 24).unwrap()
}

#[test]
fn add_and_get_roundtrip() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    let stored = repo.get(1).unwrap();
    assert_eq!(stored.id, 1);
    assert_eq!(stored.name, "keyboard");
    assert_eq!(stored.quantity, 10);
}

#[test]
fn get_all_preserves_insertion_order() {
    let mut repo = MemoryRepository::new();
    repo.add(item(3, "monitor", 5)).unwrap();
    repo.add(item(1, "keyboard", 10)).unwrap();
    repo.add(item(2, "mouse", 7)).unwrap();

    let ids: Vec<u32> = repo.get_all().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    for id in [1, 2, 3] {
        assert!(repo.get(id).is_ok());
    }
}

#[test]
fn get_all_returns_independent_snapshot() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    let mut snapshot = repo.get_all();
    snapshot[0].quantity = 999;
    snapshot.clear();

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(1).unwrap().quantity, 10);
}

#[test]
fn duplicate_add_is_rejected_and_leaves_store_unchanged() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    let err = repo.add(item(1, "imposter", 99)).unwrap_err();
    assert_eq!(err, RepoError::DuplicateKey(1));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.get(1).unwrap().name, "keyboard");
}

#[test]
fn remove_then_get_reports_not_found() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    let removed = repo.remove(1).unwrap();
    assert_eq!(removed.name, "keyboard");
    assert_eq!(repo.get(1).unwrap_err(), RepoError::NotFound(1));
}

#[test]
fn remove_absent_id_reports_not_found_and_leaves_size_unchanged() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    let err = repo.remove(42).unwrap_err();
    assert_eq!(err, RepoError::NotFound(42));
    assert_eq!(repo.len(), 1);
}

#[test]
fn removed_id_becomes_reusable() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();
    repo.remove(1).unwrap();

    repo.add(item(1, "replacement", 3)).unwrap();
    assert_eq!(repo.get(1).unwrap().name, "replacement");
}

#[test]
fn remove_keeps_lookups_consistent_for_shifted_entries() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();
    repo.add(item(2, "mouse", 7)).unwrap();
    repo.add(item(3, "monitor", 5)).unwrap();

    repo.remove(1).unwrap();

    assert_eq!(repo.get(2).unwrap().name, "mouse");
    assert_eq!(repo.get(3).unwrap().name, "monitor");
    let ids: Vec<u32> = repo.get_all().into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn update_quantity_replaces_value_in_place() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    repo.update_quantity(1, 0).unwrap();
    assert_eq!(repo.get(1).unwrap().quantity, 0);

    repo.update_quantity(1, 25).unwrap();
    assert_eq!(repo.get(1).unwrap().quantity, 25);
}

#[test]
fn negative_update_quantity_is_rejected_and_value_unchanged() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 10)).unwrap();

    let err = repo.update_quantity(1, -5).unwrap_err();
    assert_eq!(
        err,
        RepoError::InvalidQuantity {
            id: 1,
            requested: -5
        }
    );
    assert_eq!(repo.get(1).unwrap().quantity, 10);
}

#[test]
fn negative_update_quantity_wins_over_not_found() {
    let mut repo: MemoryRepository<ElectronicItem> = MemoryRepository::new();

    let err = repo.update_quantity(42, -1).unwrap_err();
    assert_eq!(
        err,
        RepoError::InvalidQuantity {
            id: 42,
            requested: -1
        }
    );
}

#[test]
fn update_quantity_for_absent_id_reports_not_found() {
    let mut repo: MemoryRepository<ElectronicItem> = MemoryRepository::new();

    let err = repo.update_quantity(42, 5).unwrap_err();
    assert_eq!(err, RepoError::NotFound(42));
}

#[test]
fn find_first_returns_first_match_in_insertion_order() {
    let mut repo = MemoryRepository::new();
    repo.add(item(1, "keyboard", 0)).unwrap();
    repo.add(item(2, "mouse", 0)).unwrap();
    repo.add(item(3, "monitor", 4)).unwrap();

    let out_of_stock = repo.find_first(|i| i.quantity == 0).unwrap();
    assert_eq!(out_of_stock.id, 1);

    assert!(repo.find_first(|i| i.quantity > 100).is_none());
}
