//! Integration tests for the collection store.
//!
//! These tests verify that:
//! - Repeated upserts of one card keep a single record and count scans
//! - Statistics always match the stored records
//! - Collections survive a save/load cycle, including through files on disk
//! - Remove and clear behave as maintenance operations

use chrono::{Duration, TimeZone, Utc};
use nova_core::{Catalog, CardDefinition, CollectedCard, Element, Rarity};
use nova_store::{
    CollectionStore, DEFAULT_COLLECTION_KEY, FileStorage, FixedClock, InMemoryStorage,
    KeyValueStorage,
};

fn card(id: &str) -> CardDefinition {
    Catalog::nova()
        .lookup_by_id(id)
        .unwrap_or_else(|| panic!("{id} missing from catalog"))
        .clone()
}

#[tokio::test]
async fn test_empty_store_loads_empty() {
    let store = CollectionStore::new(InMemoryStorage::new());
    assert!(store.load_all().await.unwrap().is_empty());

    let stats = store.compute_stats().await.unwrap();
    assert_eq!(stats.total_cards, 0);
    assert_eq!(stats.total_scans, 0);
}

#[tokio::test]
async fn test_upsert_twice_keeps_one_record() {
    let first = Utc.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap();
    let storage = InMemoryStorage::new();

    let store = CollectionStore::new(storage.clone()).with_clock(FixedClock(first));
    store.upsert(&card("NOVA_003")).await.unwrap();

    // A later clock must not move collectedAt.
    let store = CollectionStore::new(storage).with_clock(FixedClock(first + Duration::hours(5)));
    let record = store.upsert(&card("NOVA_003")).await.unwrap();

    assert_eq!(record.scan_count, 2);
    assert_eq!(record.collected_at, first);

    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], record);
}

#[tokio::test]
async fn test_scan_scenario_stats() {
    let store = CollectionStore::new(InMemoryStorage::new());

    let record = store.upsert(&card("NOVA_003")).await.unwrap();
    assert_eq!((record.id(), record.scan_count), ("NOVA_003", 1));

    let record = store.upsert(&card("NOVA_003")).await.unwrap();
    assert_eq!((record.id(), record.scan_count), ("NOVA_003", 2));

    store.upsert(&card("NOVA_001")).await.unwrap();

    let records = store.load_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id(), "NOVA_003");
    assert_eq!(records[1].id(), "NOVA_001");

    let stats = store.compute_stats().await.unwrap();
    assert_eq!(stats.total_cards, 2);
    assert_eq!(stats.total_scans, 3);
    assert_eq!(stats.rarity(Rarity::Rare), 1);
    assert_eq!(stats.rarity(Rarity::Legendary), 1);
    assert_eq!(stats.element(Element::Water), 1);
    assert_eq!(stats.element(Element::Light), 1);
}

#[tokio::test]
async fn test_stats_follow_mutations() {
    let store = CollectionStore::new(InMemoryStorage::new());
    let ops: &[(&str, &str)] = &[
        ("upsert", "NOVA_001"),
        ("upsert", "NOVA_002"),
        ("upsert", "NOVA_002"),
        ("remove", "NOVA_001"),
        ("upsert", "NOVA_005"),
        ("remove", "NOVA_009"),
        ("upsert", "NOVA_002"),
        ("clear", ""),
        ("upsert", "NOVA_006"),
        ("upsert", "NOVA_004"),
        ("upsert", "NOVA_006"),
    ];

    for (op, id) in ops {
        match *op {
            "upsert" => {
                store.upsert(&card(id)).await.unwrap();
            }
            "remove" => store.remove(id).await.unwrap(),
            _ => store.clear().await.unwrap(),
        }

        let records = store.load_all().await.unwrap();
        let stats = store.compute_stats().await.unwrap();
        let scans: u64 = records.iter().map(|r| u64::from(r.scan_count)).sum();
        assert_eq!(stats.total_cards, records.len());
        assert_eq!(stats.total_scans, scans);
        assert_eq!(stats.rarity_count.values().sum::<usize>(), records.len());
        assert_eq!(stats.element_count.values().sum::<usize>(), records.len());
    }

    let stats = store.compute_stats().await.unwrap();
    assert_eq!(stats.total_cards, 2);
    assert_eq!(stats.total_scans, 3);
}

#[tokio::test]
async fn test_save_load_roundtrip() {
    let store = CollectionStore::new(InMemoryStorage::new());
    let at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

    let mut records: Vec<CollectedCard> = Catalog::nova()
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let mut record =
                CollectedCard::first_capture(card, at + Duration::milliseconds(i as i64 * 1500));
            record.scan_count = u32::try_from(i).unwrap() + 1;
            record
        })
        .collect();
    records.reverse();

    store.save_all(&records).await.unwrap();
    assert_eq!(store.load_all().await.unwrap(), records);
}

#[tokio::test]
async fn test_remove_absent_leaves_collection_unchanged() {
    let store = CollectionStore::new(InMemoryStorage::new());
    store.upsert(&card("NOVA_002")).await.unwrap();
    let before = store.load_all().await.unwrap();

    store.remove("NOVA_999").await.unwrap();
    assert_eq!(store.load_all().await.unwrap(), before);

    store.remove("NOVA_002").await.unwrap();
    store.remove("NOVA_002").await.unwrap();
    assert!(!store.contains("NOVA_002").await.unwrap());
}

#[tokio::test]
async fn test_clear_then_load_is_empty() {
    let storage = InMemoryStorage::new();
    let store = CollectionStore::new(storage.clone());
    store.upsert(&card("NOVA_001")).await.unwrap();
    store.upsert(&card("NOVA_004")).await.unwrap();

    store.clear().await.unwrap();
    assert!(store.load_all().await.unwrap().is_empty());
    assert!(storage.get(DEFAULT_COLLECTION_KEY).await.unwrap().is_none());

    store.clear().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_is_frozen_at_first_capture() {
    let store = CollectionStore::new(InMemoryStorage::new());
    let original = card("NOVA_005");
    store.upsert(&original).await.unwrap();

    let mut revised = original.clone();
    revised.attack = 99;
    revised.name = "Nova Wind Scout EX".to_string();
    let record = store.upsert(&revised).await.unwrap();

    assert_eq!(record.scan_count, 2);
    assert_eq!(record.card, original);
}

#[tokio::test]
async fn test_file_storage_persists_across_stores() {
    let root = std::env::temp_dir().join(format!("nova_collection_{}", uuid::Uuid::now_v7()));

    {
        let storage = FileStorage::open(&root).await.unwrap();
        let store = CollectionStore::new(storage);
        store.upsert(&card("NOVA_006")).await.unwrap();
        store.upsert(&card("NOVA_006")).await.unwrap();
    }

    let store = CollectionStore::new(FileStorage::new(&root));
    let record = store.get("NOVA_006").await.unwrap().unwrap();
    assert_eq!(record.scan_count, 2);
    assert_eq!(record.card.name, "Nova Shadow Ninja");

    let on_disk = std::fs::read_to_string(root.join("nova_card_collection.json")).unwrap();
    assert!(on_disk.contains("\"collectedAt\""));
    assert!(on_disk.contains("\"scanCount\":2"));

    let _ = std::fs::remove_dir_all(&root);
}

#[tokio::test]
async fn test_corrupt_file_is_surfaced() {
    let root = std::env::temp_dir().join(format!("nova_corrupt_{}", uuid::Uuid::now_v7()));
    let storage = FileStorage::open(&root).await.unwrap();
    std::fs::write(storage.path_for(DEFAULT_COLLECTION_KEY), "[{\"id\": 12").unwrap();

    let store = CollectionStore::new(storage);
    let err = store.load_all().await.unwrap_err();
    assert!(err.is_corrupt());

    // Clearing is the documented way out of a corrupt collection.
    store.clear().await.unwrap();
    assert!(store.load_all().await.unwrap().is_empty());

    let _ = std::fs::remove_dir_all(&root);
}
