//! Crawler module for page fetching and processing
//!
//! This module contains the pipeline driving the audit:
//! - HTTP fetching with a per-fetch timeout
//! - Anchor extraction and classification per page
//! - Concurrent coordination across all target URLs

mod coordinator;
mod fetcher;
mod page;

pub use coordinator::{crawl, Coordinator, CrawlReport, FetchOutcome, UrlOutcome, UrlStatus};
pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageFetcher, DEFAULT_USER_AGENT};
pub use page::{process_page, Finding};
