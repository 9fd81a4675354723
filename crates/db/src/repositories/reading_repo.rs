//! Repository for the `readings` table.

use chrono::Utc;

use crate::models::reading::{CreateReading, Reading, StatsSummary};
use crate::DbPool;

/// Column list for `readings` SELECT queries.
const COLUMNS: &str = "id, device_id, temperature, humidity, timestamp";

/// Hard cap applied to list limits in the repository layer.
const MAX_LIST_LIMIT: i64 = 500;

/// Provides query operations for sensor readings.
///
/// The table is append-only: there are no update or delete methods.
pub struct ReadingRepo;

impl ReadingRepo {
    /// Insert a single reading, assigning `id` and -- when the DTO does
    /// not carry one -- `timestamp`.
    pub async fn insert(pool: &DbPool, reading: &CreateReading) -> Result<Reading, sqlx::Error> {
        let timestamp = reading.timestamp.unwrap_or_else(Utc::now);
        let query = format!(
            "INSERT INTO readings (device_id, temperature, humidity, timestamp) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(&reading.device_id)
            .bind(reading.temperature)
            .bind(reading.humidity)
            .bind(timestamp)
            .fetch_one(pool)
            .await
    }

    /// Most recent readings, newest first, capped at `limit` rows.
    ///
    /// Equal timestamps are ordered by `id` descending so results are
    /// deterministic.
    pub async fn recent(pool: &DbPool, limit: i64) -> Result<Vec<Reading>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM readings \
             ORDER BY timestamp DESC, id DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, Reading>(&query)
            .bind(clamp_limit(limit))
            .fetch_all(pool)
            .await
    }

    /// Full scan of every stored reading. No ordering guarantee; cost is
    /// linear in table size.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<Reading>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM readings");
        sqlx::query_as::<_, Reading>(&query).fetch_all(pool).await
    }

    /// Aggregate statistics over every stored reading.
    ///
    /// An empty table yields `avg_temp = 0.0, count = 0` rather than an
    /// error. The average is rounded to two decimal places. Recomputed
    /// on every call; nothing is cached.
    pub async fn aggregate_stats(pool: &DbPool) -> Result<StatsSummary, sqlx::Error> {
        let query = "\
            SELECT \
                COALESCE(AVG(temperature), 0.0) AS avg_temp, \
                COUNT(*) AS count \
            FROM readings";
        let mut stats = sqlx::query_as::<_, StatsSummary>(query)
            .fetch_one(pool)
            .await?;
        stats.avg_temp = round2(stats.avg_temp);
        Ok(stats)
    }
}

/// Clamp a caller-supplied limit into `0..=MAX_LIST_LIMIT`.
fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(0, MAX_LIST_LIMIT)
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(-5), 0);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(10_000), MAX_LIST_LIMIT);
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(25.0), 25.0);
        assert_eq!(round2(25.034), 25.03);
        assert_eq!(round2(25.036), 25.04);
    }
}
