//! Run statistics
//!
//! Summarizes a crawl report for the end-of-run console output.

use crate::audit::Severity;
use crate::crawler::{CrawlReport, UrlStatus};

/// Summary counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditStatistics {
    /// Number of input URLs
    pub total_pages: usize,

    /// Pages fetched and processed
    pub pages_audited: usize,

    /// Pages that contributed nothing
    pub pages_failed: usize,

    /// Total findings
    pub findings: usize,

    /// Findings with severity WARNING
    pub warnings: usize,

    /// Findings with severity NOTICE
    pub notices: usize,

    /// Failed URLs with the reason
    pub failures: Vec<(String, String)>,
}

/// Computes statistics from a crawl report
pub fn compute_statistics(report: &CrawlReport) -> AuditStatistics {
    let warnings = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .count();

    let failures = report
        .outcomes
        .iter()
        .filter_map(|o| match &o.status {
            UrlStatus::Audited { .. } => None,
            UrlStatus::Failed(error) => Some((o.url.clone(), error.to_string())),
            UrlStatus::Lost => Some((o.url.clone(), "task aborted".to_string())),
        })
        .collect();

    AuditStatistics {
        total_pages: report.outcomes.len(),
        pages_audited: report.succeeded(),
        pages_failed: report.failed(),
        findings: report.findings.len(),
        warnings,
        notices: report.findings.len() - warnings,
        failures,
    }
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &AuditStatistics) {
    println!("=== Audit Statistics ===\n");

    println!("Pages:");
    println!("  Requested: {}", stats.total_pages);
    println!("  Audited: {}", stats.pages_audited);
    println!("  Failed: {}", stats.pages_failed);
    println!();

    println!("Findings: {}", stats.findings);
    println!("  WARNING: {}", stats.warnings);
    println!("  NOTICE: {}", stats.notices);
    println!();

    if !stats.failures.is_empty() {
        println!("Failed Pages ({}):", stats.failures.len());
        for (url, reason) in &stats.failures {
            println!("  - {}: {}", url, reason);
        }
        println!();
    }
}
