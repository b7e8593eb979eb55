use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;

use shared_models::Item;
use shared_store::StoreError;
use shared_utils::test_utils::{item, CountingSource, TestDataset};
use stats_cell::services::cache::StatsCache;
use stats_cell::services::watch::spawn_invalidation_watch;

fn priced(prices: &[f64]) -> Vec<Item> {
    prices
        .iter()
        .enumerate()
        .map(|(i, price)| item(i as u64 + 1, &format!("Item {}", i + 1), "Test", *price))
        .collect()
}

#[tokio::test]
async fn test_snapshot_averages_prices() {
    let dataset = TestDataset::new(&priced(&[10.0, 20.0, 30.0]));
    let cache = StatsCache::new(dataset.store());

    let snapshot = cache.get().await.unwrap();

    assert_eq!(snapshot.total, 3);
    assert_eq!(snapshot.average_price, 20.0);
}

#[tokio::test]
async fn test_empty_collection_averages_to_zero() {
    let dataset = TestDataset::empty();
    let cache = StatsCache::new(dataset.store());

    let snapshot = cache.get().await.unwrap();

    assert_eq!(snapshot.total, 0);
    assert_eq!(snapshot.average_price, 0.0);
}

#[tokio::test]
async fn test_repeated_gets_hit_the_cache() {
    let dataset = TestDataset::new(&priced(&[10.0, 20.0, 30.0]));
    let source = Arc::new(CountingSource::new(dataset.path()));
    let cache = StatsCache::new(source.clone());

    let first = cache.get().await.unwrap();
    let second = cache.get().await.unwrap();

    assert_eq!(first, second);
    // The second call must be answered from the cache without re-reading
    // the collection.
    assert_eq!(source.loads(), 1);
}

#[tokio::test]
async fn test_source_change_invalidates_snapshot() {
    let dataset = TestDataset::new(&priced(&[10.0, 20.0, 30.0]));
    let cache = StatsCache::new(dataset.store());

    let snapshot = cache.get().await.unwrap();
    assert_eq!(snapshot.average_price, 20.0);

    // Modification timestamps can be coarse; leave room so the rewrite
    // cannot alias the cached version.
    tokio::time::sleep(Duration::from_millis(50)).await;
    dataset.rewrite(&priced(&[10.0, 20.0, 30.0, 40.0]));

    let snapshot = cache.get().await.unwrap();
    assert_eq!(snapshot.total, 4);
    assert_eq!(snapshot.average_price, 25.0);
}

#[tokio::test]
async fn test_explicit_invalidate_forces_reload() {
    let dataset = TestDataset::new(&priced(&[10.0, 20.0, 30.0]));
    let source = Arc::new(CountingSource::new(dataset.path()));
    let cache = StatsCache::new(source.clone());

    cache.get().await.unwrap();
    cache.invalidate().await;
    cache.get().await.unwrap();

    assert_eq!(source.loads(), 2);
}

#[tokio::test]
async fn test_malformed_source_is_not_cached() {
    let dataset = TestDataset::new(&priced(&[10.0]));
    let cache = StatsCache::new(dataset.store());

    dataset.corrupt();
    assert_matches!(cache.get().await, Err(StoreError::Parse(_)));
    assert!(!cache.is_populated().await);

    // Once the file is repaired, the next read succeeds with fresh values.
    dataset.rewrite(&priced(&[10.0, 30.0]));
    let snapshot = cache.get().await.unwrap();
    assert_eq!(snapshot.total, 2);
    assert_eq!(snapshot.average_price, 20.0);
}

#[tokio::test]
async fn test_missing_source_surfaces_io_error() {
    let dataset = TestDataset::empty();
    let cache = StatsCache::new(dataset.store());
    std::fs::remove_file(dataset.path()).unwrap();

    assert_matches!(cache.get().await, Err(StoreError::Io(_)));
    assert!(!cache.is_populated().await);
}

#[tokio::test]
async fn test_watch_drops_snapshot_when_source_changes() {
    let dataset = TestDataset::new(&priced(&[10.0, 20.0, 30.0]));
    let cache = Arc::new(StatsCache::new(dataset.store()));

    cache.get().await.unwrap();
    assert!(cache.is_populated().await);

    let watch = spawn_invalidation_watch(cache.clone(), Duration::from_millis(20));

    tokio::time::sleep(Duration::from_millis(100)).await;
    dataset.rewrite(&priced(&[40.0]));

    // The watch polls every 20ms; give it a bounded window to notice.
    let mut dropped = false;
    for _ in 0..50 {
        if !cache.is_populated().await {
            dropped = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    watch.abort();

    assert!(dropped, "watch never invalidated the cached snapshot");

    let snapshot = cache.get().await.unwrap();
    assert_eq!(snapshot.total, 1);
    assert_eq!(snapshot.average_price, 40.0);
}
