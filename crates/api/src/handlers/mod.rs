//! Request handlers, one module per route group.

pub mod readings;
pub mod stats;
