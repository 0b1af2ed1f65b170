//! Configuration module for Anchor-Audit
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Only the binary reads configuration; library operations take plain parameters.
//!
//! # Example
//!
//! ```no_run
//! use anchor_audit::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("audit.toml")).unwrap();
//! println!("Auditing {} pages", config.targets.urls.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, TargetsConfig, UserAgentConfig,
    DEFAULT_FETCH_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
