//! ecss-check core library.
//!
//! This crate audits a project's documentation tree against a fixed set of
//! ECSS process-compliance rules and renders a severity-ranked report.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discover`: Recursive name-pattern file discovery.
//! - `checks`: Rule evaluators, one per compliance concern.
//! - `audit`: Issue aggregation, severity counts, verdict.
//! - `models`: Issue record, severity, category, clause citations.
//! - `output`: Human/JSON console printers.
//! - `report`: Markdown report document.
//! - `error`: Fatal error taxonomy.
//! - `utils`: Supporting helpers.
pub mod audit;
pub mod checks;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;

pub use audit::{Audit, Counts, Verdict};
pub use checks::check_all;
pub use discover::Finder;
pub use error::CheckError;
