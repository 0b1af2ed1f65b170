//! Anchor-Audit: a concurrent link accessibility checker
//!
//! This crate fetches a batch of web pages concurrently, extracts every
//! anchor element from each page, and classifies each anchor against the
//! WCAG link-purpose technique family (H77-H81, H33). The result is a flat
//! report with one row per anchor that warrants attention.

pub mod audit;
pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for Anchor-Audit operations
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Report error: {0}")]
    Report(#[from] output::ReportError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Anchor-Audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use audit::{classify, AnchorSignals, Classification, RuleSet, Severity};
pub use config::Config;
pub use crawler::{crawl, CrawlReport, FetchError, FetchOutcome, Finding, HttpFetcher, PageFetcher};
pub use output::{to_rows, write_csv, ReportRow};
