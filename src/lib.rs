//! # txbatch
//!
//! Batch-adds transaction IDs to unverified orders through the order API.
//! Reads a delimited CSV export, issues one update call per row, stamps the
//! per-row result into a status column, and writes the augmented table back
//! out.
//!
//! ## Modules
//!
//! - `table` - Delimited table load/save
//! - `columns` - One-time column-name resolution to header positions
//! - `status` - Closed per-row status taxonomy
//! - `client` - HTTP update client with response classification
//! - `processor` - Per-row skip/dry-run/submit decision logic
//! - `batch` - Batch orchestration and summary accounting
//! - `health` - Liveness/readiness probes
pub mod batch;
pub mod client;
pub mod columns;
pub mod error;
pub mod health;
pub mod processor;
pub mod status;
pub mod table;
