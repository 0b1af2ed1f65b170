//! Output module for audit reports
//!
//! This module handles:
//! - Flattening findings into numbered report rows
//! - Writing the CSV report
//! - Summarizing run statistics

mod csv;
mod report;
pub mod stats;

pub use csv::{format_csv, write_csv, CSV_HEADER};
pub use report::{to_rows, ReportRow};
pub use stats::{compute_statistics, print_statistics, AuditStatistics};

use thiserror::Error;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
