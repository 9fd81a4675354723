//! HTTP transport for the sensor monitoring service.
//!
//! Thin boundary over the ingestion pipeline and the reading
//! repository: routing, extraction, error mapping, and middleware.
//! Domain behaviour lives in the other workspace crates.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
