//! Report aggregation
//!
//! Flattens crawl findings into the row shape written to the report sink.

use crate::crawler::Finding;

/// One row of the final report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// 1-based serial number across the whole batch
    pub serial: usize,

    /// Page the anchor was found on
    pub url: String,

    /// Serialized anchor markup
    pub tag: String,

    /// Comma-joined rule identifiers
    pub rule: String,

    /// `WARNING` or `NOTICE`
    pub severity: String,
}

/// Converts findings to report rows, numbering them in emission order
///
/// Every finding becomes exactly one row. Serial numbers are independent
/// of each finding's position on its page.
pub fn to_rows(findings: &[Finding]) -> Vec<ReportRow> {
    findings
        .iter()
        .enumerate()
        .map(|(index, finding)| ReportRow {
            serial: index + 1,
            url: finding.source_url.clone(),
            tag: finding.anchor_markup.clone(),
            rule: finding.rules.as_str().to_string(),
            severity: finding.severity.as_str().to_string(),
        })
        .collect()
}
