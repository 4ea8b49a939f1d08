//! Integration tests for the scan flow.

use nova_core::{Catalog, RecognitionError, ScanEvent, ScanMethod};
use nova_store::{CollectionStore, InMemoryStorage, KeyValueStorage, ScanOutcome, Scanner};

fn scanner() -> (Scanner<InMemoryStorage>, InMemoryStorage) {
    let storage = InMemoryStorage::new();
    let store = CollectionStore::new(storage.clone());
    (Scanner::new(Catalog::nova(), store), storage)
}

#[tokio::test]
async fn test_first_scan_is_new() {
    let (scanner, _) = scanner();

    let outcome = scanner
        .scan(&ScanEvent::Qr("NOVA_AQUA_003_RARE".to_string()))
        .await
        .unwrap();
    let ScanOutcome::Collected {
        record,
        method,
        is_new,
    } = outcome
    else {
        panic!("expected a collected card");
    };
    assert!(is_new);
    assert_eq!(method, ScanMethod::Qr);
    assert_eq!(record.card.name, "Nova Aqua Healer");

    let outcome = scanner
        .scan(&ScanEvent::Marker("NOVA_003".to_string()))
        .await
        .unwrap();
    let ScanOutcome::Collected {
        record,
        method,
        is_new,
    } = outcome
    else {
        panic!("expected a collected card");
    };
    assert!(!is_new);
    assert_eq!(method, ScanMethod::Marker);
    assert_eq!(record.scan_count, 2);
}

#[tokio::test]
async fn test_unrecognized_scan_leaves_store_untouched() {
    let (scanner, storage) = scanner();

    let outcome = scanner
        .scan(&ScanEvent::Qr("GARBAGE".to_string()))
        .await
        .unwrap();
    assert_eq!(
        outcome,
        ScanOutcome::NotRecognized(RecognitionError::TokenNotRecognized {
            token: "GARBAGE".to_string(),
            method: ScanMethod::Qr,
        })
    );
    if let ScanOutcome::NotRecognized(error) = &outcome {
        assert_eq!(
            error.user_message(),
            "QR Code tidak dikenali sebagai kartu Nova yang valid."
        );
    }
    assert!(storage.is_empty().await);
}

#[tokio::test]
async fn test_overlapping_scans_do_not_lose_updates() {
    let (scanner, _) = scanner();
    let event = ScanEvent::Qr("NOVA_FIRE_002_EPIC".to_string());

    let (a, b, c) = tokio::join!(
        scanner.scan(&event),
        scanner.scan(&event),
        scanner.scan(&event)
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();

    let record = scanner.store().get("NOVA_002").await.unwrap().unwrap();
    assert_eq!(record.scan_count, 3);
    assert_eq!(scanner.store().load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_every_catalog_token_scans() {
    let (scanner, storage) = scanner();
    let tokens: Vec<String> = scanner
        .catalog()
        .iter()
        .filter_map(|card| card.recognition_token.clone())
        .collect();

    for token in tokens {
        let outcome = scanner.scan(&ScanEvent::Qr(token)).await.unwrap();
        assert!(matches!(outcome, ScanOutcome::Collected { is_new: true, .. }));
    }

    let stats = scanner.store().compute_stats().await.unwrap();
    assert_eq!(stats.total_cards, scanner.catalog().len());
    assert!((stats.completion(scanner.catalog().len()) - 1.0).abs() < f64::EPSILON);
    assert!(storage.get(scanner.store().key()).await.unwrap().is_some());
}
