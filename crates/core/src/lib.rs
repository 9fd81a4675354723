//! Core domain types and pure logic shared across the workspace.
//!
//! No I/O lives here: the evaluator is a pure function of its inputs so
//! it can be tested without a database or network.

pub mod alert;
pub mod threshold;
pub mod types;
