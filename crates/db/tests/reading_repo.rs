//! Integration tests for the reading repository against an in-memory
//! SQLite database.

use chrono::{TimeZone, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use vigil_db::models::reading::CreateReading;
use vigil_db::repositories::ReadingRepo;
use vigil_db::DbPool;

/// In-memory pool with migrations applied.
///
/// A single connection keeps the in-memory database alive for the whole
/// test.
async fn setup_pool() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory pool");
    vigil_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

fn reading(device_id: &str, temperature: f64) -> CreateReading {
    CreateReading {
        device_id: device_id.to_string(),
        temperature,
        humidity: 50.0,
        timestamp: None,
    }
}

// ---------------------------------------------------------------------------
// Insert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_assigns_unique_monotonic_ids() {
    let pool = setup_pool().await;

    let first = ReadingRepo::insert(&pool, &reading("SENSOR_OFFICE", 21.0))
        .await
        .unwrap();
    let second = ReadingRepo::insert(&pool, &reading("SENSOR_LAB", 22.0))
        .await
        .unwrap();

    assert!(first.id >= 1);
    assert!(second.id > first.id);
}

#[tokio::test]
async fn insert_assigns_timestamp_when_absent() {
    let pool = setup_pool().await;

    let before = Utc::now();
    let persisted = ReadingRepo::insert(&pool, &reading("SENSOR_OFFICE", 21.0))
        .await
        .unwrap();
    let after = Utc::now();

    assert!(persisted.timestamp >= before);
    assert!(persisted.timestamp <= after);
}

#[tokio::test]
async fn insert_preserves_supplied_timestamp() {
    let pool = setup_pool().await;

    let supplied = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();
    let mut create = reading("SENSOR_OFFICE", 21.0);
    create.timestamp = Some(supplied);

    let persisted = ReadingRepo::insert(&pool, &create).await.unwrap();
    assert_eq!(persisted.timestamp, supplied);
}

#[tokio::test]
async fn insert_accepts_absurd_values() {
    // No range validation: negative temperature and >100% humidity are
    // stored as-is.
    let pool = setup_pool().await;

    let mut create = reading("SENSOR_WAREHOUSE", -273.15);
    create.humidity = 250.0;

    let persisted = ReadingRepo::insert(&pool, &create).await.unwrap();
    assert_eq!(persisted.temperature, -273.15);
    assert_eq!(persisted.humidity, 250.0);
}

// ---------------------------------------------------------------------------
// Recent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn recent_returns_newest_first_capped_at_limit() {
    let pool = setup_pool().await;

    let t1 = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2026, 8, 1, 11, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

    for (device, ts) in [("R1", t1), ("R2", t2), ("R3", t3)] {
        let mut create = reading(device, 20.0);
        create.timestamp = Some(ts);
        ReadingRepo::insert(&pool, &create).await.unwrap();
    }

    let recent = ReadingRepo::recent(&pool, 2).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].device_id, "R3");
    assert_eq!(recent[1].device_id, "R2");
}

#[tokio::test]
async fn recent_breaks_timestamp_ties_by_id_descending() {
    let pool = setup_pool().await;

    let shared = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
    let mut ids = Vec::new();
    for device in ["A", "B", "C"] {
        let mut create = reading(device, 20.0);
        create.timestamp = Some(shared);
        ids.push(ReadingRepo::insert(&pool, &create).await.unwrap().id);
    }

    let recent = ReadingRepo::recent(&pool, 10).await.unwrap();

    let got: Vec<i64> = recent.iter().map(|r| r.id).collect();
    let mut expected = ids.clone();
    expected.reverse();
    assert_eq!(got, expected);
}

#[tokio::test]
async fn recent_with_zero_limit_returns_nothing() {
    let pool = setup_pool().await;
    ReadingRepo::insert(&pool, &reading("SENSOR_OFFICE", 20.0))
        .await
        .unwrap();

    let recent = ReadingRepo::recent(&pool, 0).await.unwrap();
    assert!(recent.is_empty());
}

// ---------------------------------------------------------------------------
// Full scan
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_all_returns_every_row() {
    let pool = setup_pool().await;

    for i in 0..5 {
        ReadingRepo::insert(&pool, &reading("SENSOR_OFFICE", 20.0 + f64::from(i)))
            .await
            .unwrap();
    }

    let all = ReadingRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 5);
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stats_on_empty_store_is_zero_not_error() {
    let pool = setup_pool().await;

    let stats = ReadingRepo::aggregate_stats(&pool).await.unwrap();
    assert_eq!(stats.avg_temp, 0.0);
    assert_eq!(stats.count, 0);
}

#[tokio::test]
async fn stats_averages_all_temperatures() {
    let pool = setup_pool().await;

    ReadingRepo::insert(&pool, &reading("SENSOR_OFFICE", 20.0))
        .await
        .unwrap();
    ReadingRepo::insert(&pool, &reading("SENSOR_LAB", 30.0))
        .await
        .unwrap();

    let stats = ReadingRepo::aggregate_stats(&pool).await.unwrap();
    assert_eq!(stats.avg_temp, 25.0);
    assert_eq!(stats.count, 2);
}

#[tokio::test]
async fn stats_average_is_rounded_to_two_decimals() {
    let pool = setup_pool().await;

    for temp in [20.0, 21.0, 21.1] {
        ReadingRepo::insert(&pool, &reading("SENSOR_OFFICE", temp))
            .await
            .unwrap();
    }

    // (20.0 + 21.0 + 21.1) / 3 = 20.7000...
    let stats = ReadingRepo::aggregate_stats(&pool).await.unwrap();
    assert_eq!(stats.avg_temp, 20.7);
    assert_eq!(stats.count, 3);
}
