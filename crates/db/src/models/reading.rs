//! Sensor reading entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use vigil_core::types::{DbId, Timestamp};

/// A row from the `readings` table.
///
/// Immutable once written: the table is append-only and no update or
/// delete operations exist anywhere in the workspace.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reading {
    pub id: DbId,
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: Timestamp,
}

/// DTO for inserting a new reading.
///
/// `device_id` is an opaque label -- it is not checked against any
/// device registry. Temperature and humidity carry no range checks;
/// negative or absurd values are valid data.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReading {
    #[validate(length(min = 1, message = "device_id must not be empty"))]
    pub device_id: String,
    pub temperature: f64,
    pub humidity: f64,
    /// Assigned by the store at insert time when absent.
    pub timestamp: Option<Timestamp>,
}

/// Aggregate statistics over the full reading set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatsSummary {
    pub avg_temp: f64,
    pub count: i64,
}
