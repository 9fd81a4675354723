//! Synthetic sensor data producer.
//!
//! Generates random readings and pushes them to the backend ingestion
//! endpoint. Stands in for a fleet of real sensors during development.

pub mod generate;
pub mod sender;
