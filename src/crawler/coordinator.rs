//! Crawl coordinator - concurrent fan-out over the target URLs
//!
//! This module runs one task per URL, all at once:
//! - Fetching the page with a per-task timeout
//! - Handing the markup to the page processor
//! - Collecting findings in completion order
//! - Recording a per-URL outcome log
//!
//! A failing URL contributes no findings and never stops its siblings.

use crate::crawler::fetcher::{FetchError, PageFetcher};
use crate::crawler::page::{process_page, Finding};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

/// Result of one URL's unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Page was fetched and processed; findings are in document order
    Success(Vec<Finding>),

    /// Page produced no usable markup
    EmptyOrFailed(FetchError),
}

/// Final status of a URL in the outcome log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlStatus {
    /// Page was processed and produced this many findings
    Audited { findings: usize },

    /// Page could not be fetched or was empty
    Failed(FetchError),

    /// The task for this URL ended without reporting
    Lost,
}

/// Outcome log entry for one input URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOutcome {
    pub url: String,
    pub status: UrlStatus,
}

/// Everything a crawl produced
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    /// All findings; grouped per page in completion order
    pub findings: Vec<Finding>,

    /// One entry per input URL, in input order
    pub outcomes: Vec<UrlOutcome>,
}

impl CrawlReport {
    /// Number of URLs that were fetched and processed
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, UrlStatus::Audited { .. }))
            .count()
    }

    /// Number of URLs that contributed nothing
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Concurrent crawl driver
pub struct Coordinator<F: PageFetcher> {
    fetcher: Arc<F>,
    timeout: Duration,
}

impl<F: PageFetcher> Coordinator<F> {
    /// Creates a coordinator
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Shared fetch primitive used by every task
    /// * `timeout` - Limit applied to each individual fetch
    pub fn new(fetcher: Arc<F>, timeout: Duration) -> Self {
        Self { fetcher, timeout }
    }

    /// Audits all `urls` concurrently
    ///
    /// There is no concurrency cap and no batch-wide timeout. The call
    /// always completes; failures show up only in the outcome log and in
    /// the logs.
    pub async fn run(&self, urls: &[String]) -> CrawlReport {
        tracing::info!("Starting crawl of {} URLs", urls.len());
        let start_time = std::time::Instant::now();

        let mut tasks = JoinSet::new();
        for (index, url) in urls.iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let url = url.clone();
            let timeout = self.timeout;
            tasks.spawn(async move {
                let outcome = audit_url(fetcher.as_ref(), &url, timeout).await;
                (index, outcome)
            });
        }

        let mut statuses: Vec<Option<UrlStatus>> = urls.iter().map(|_| None).collect();
        let mut findings = Vec::new();

        // Single consumer: each completed task is appended exactly once.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, FetchOutcome::Success(page_findings))) => {
                    statuses[index] = Some(UrlStatus::Audited {
                        findings: page_findings.len(),
                    });
                    findings.extend(page_findings);
                }
                Ok((index, FetchOutcome::EmptyOrFailed(error))) => {
                    statuses[index] = Some(UrlStatus::Failed(error));
                }
                Err(e) => {
                    tracing::error!("An audit task failed before reporting: {}", e);
                }
            }
        }

        let outcomes: Vec<UrlOutcome> = urls
            .iter()
            .zip(statuses)
            .map(|(url, status)| UrlOutcome {
                url: url.clone(),
                status: status.unwrap_or(UrlStatus::Lost),
            })
            .collect();

        let report = CrawlReport { findings, outcomes };

        tracing::info!(
            "Crawl completed: {} pages audited, {} failed, {} findings in {:?}",
            report.succeeded(),
            report.failed(),
            report.findings.len(),
            start_time.elapsed()
        );

        report
    }
}

/// Fetches and processes a single URL
///
/// Every failure is logged here and converted to `EmptyOrFailed`.
async fn audit_url<F: PageFetcher>(fetcher: &F, url: &str, timeout: Duration) -> FetchOutcome {
    tracing::debug!("Fetching {}", url);

    let fetched = match tokio::time::timeout(timeout, fetcher.fetch(url, timeout)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            url: url.to_string(),
        }),
    };

    let body = match fetched {
        Ok(body) if body.trim().is_empty() => {
            let error = FetchError::EmptyBody {
                url: url.to_string(),
            };
            tracing::warn!("{}", error);
            return FetchOutcome::EmptyOrFailed(error);
        }
        Ok(body) => body,
        Err(error) => {
            tracing::warn!("Failed to retrieve {}: {}", url, error);
            return FetchOutcome::EmptyOrFailed(error);
        }
    };

    FetchOutcome::Success(process_page(&body, url))
}

/// Runs a crawl over `urls` with the given fetcher
///
/// # Example
///
/// ```no_run
/// use anchor_audit::crawler::{crawl, HttpFetcher, DEFAULT_USER_AGENT};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = Arc::new(HttpFetcher::new(DEFAULT_USER_AGENT)?);
/// let urls = vec!["https://example.com/".to_string()];
/// let report = crawl(&urls, fetcher, Duration::from_secs(10)).await;
/// println!("{} findings", report.findings.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl<F: PageFetcher>(urls: &[String], fetcher: Arc<F>, timeout: Duration) -> CrawlReport {
    Coordinator::new(fetcher, timeout).run(urls).await
}
