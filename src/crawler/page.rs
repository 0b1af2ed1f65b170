//! Page processing: parse markup and classify every anchor
//!
//! Anchors are visited in document order and numbered from 1. Each anchor
//! is classified in isolation; a fault while deriving or classifying one
//! anchor drops only that anchor.

use crate::audit::{classify, AnchorSignals, Classification, RuleSet, Severity};
use scraper::{Html, Selector};
use std::panic::{self, AssertUnwindSafe};

/// One reported anchor on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based index of the anchor among all anchors on the page
    pub position: usize,

    /// URL the page was fetched from
    pub source_url: String,

    /// Serialized markup of the anchor element
    pub anchor_markup: String,

    /// Matched rule family
    pub rules: RuleSet,

    /// Severity of the finding
    pub severity: Severity,
}

/// Classifies all anchors in `markup` and returns the reported ones
///
/// Empty or unparsable markup yields no findings.
///
/// # Example
///
/// ```
/// use anchor_audit::crawler::process_page;
///
/// let html = r#"<a href="/about"></a><a href="/" aria-label="Home"></a>"#;
/// let findings = process_page(html, "https://example.com/");
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].position, 1);
/// ```
pub fn process_page(markup: &str, source_url: &str) -> Vec<Finding> {
    process_page_with(markup, source_url, classify)
}

fn process_page_with<C>(markup: &str, source_url: &str, classifier: C) -> Vec<Finding>
where
    C: Fn(&AnchorSignals) -> Option<Classification>,
{
    if markup.trim().is_empty() {
        return Vec::new();
    }

    let (Ok(anchors), Ok(images)) = (Selector::parse("a"), Selector::parse("img")) else {
        return Vec::new();
    };

    let document = Html::parse_document(markup);
    let mut findings = Vec::new();

    for (index, element) in document.select(&anchors).enumerate() {
        let position = index + 1;

        let classified = panic::catch_unwind(AssertUnwindSafe(|| {
            let signals = AnchorSignals::from_element(&element, &images);
            classifier(&signals).map(|c| (c, element.html()))
        }));

        match classified {
            Ok(Some((classification, anchor_markup))) => findings.push(Finding {
                position,
                source_url: source_url.to_string(),
                anchor_markup,
                rules: classification.rules,
                severity: classification.severity,
            }),
            Ok(None) => {}
            Err(_) => {
                tracing::error!(
                    "Fault classifying anchor {} on {}; anchor skipped",
                    position,
                    source_url
                );
            }
        }
    }

    tracing::debug!("{}: {} findings", source_url, findings.len());
    findings
}
