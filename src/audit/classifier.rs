//! Anchor classification policy
//!
//! Earlier checks win, so the order of the branches below is part of the
//! policy:
//!
//! 1. A non-empty `aria-label` is a sufficient accessible name.
//! 2. A descendant image with a non-blank `alt` is sufficient content.
//! 3. Otherwise the anchor is judged on its `title`, `href`, text and
//!    `aria-hidden` signals.
//!
//! | title | href | condition                              | result                   |
//! |-------|------|----------------------------------------|--------------------------|
//! | yes   | no   | text empty, aria-hidden                | none                     |
//! | yes   | no   | text empty                             | with-title, WARNING      |
//! | yes   | no   | text differs from title                | none                     |
//! | yes   | no   | text equals title                      | with-title, WARNING      |
//! | yes   | yes  | title set, href empty                  | with-title, WARNING      |
//! | yes   | yes  | title empty, href and text set         | base, NOTICE             |
//! | yes   | yes  | title empty, otherwise                 | base, WARNING            |
//! | yes   | yes  | text empty                             | with-title, NOTICE       |
//! | yes   | yes  | text equals title                      | with-title, WARNING      |
//! | yes   | yes  | text differs from title                | with-title, NOTICE       |
//! | no    | no   | text empty, aria-hidden                | none                     |
//! | no    | no   | otherwise                              | base, WARNING            |
//! | no    | yes  | text set                               | base, NOTICE             |
//! | no    | yes  | aria-hidden                            | none                     |
//! | no    | yes  | otherwise                              | base, WARNING            |

use crate::audit::rules::{Classification, RuleSet};
use crate::audit::signals::AnchorSignals;

const BASE: RuleSet = RuleSet::LinkPurpose;
const WITH_TITLE: RuleSet = RuleSet::LinkPurposeWithTitle;

/// Classifies one anchor
///
/// Pure and total: the same signals always produce the same result.
///
/// # Returns
///
/// * `Some(Classification)` - The anchor warrants a report row
/// * `None` - The anchor has an adequate accessible name
pub fn classify(signals: &AnchorSignals) -> Option<Classification> {
    if !signals.aria_label.is_empty() {
        return None;
    }

    if signals.has_descriptive_image_alt {
        return None;
    }

    if signals.has_title {
        classify_titled(signals)
    } else {
        classify_untitled(signals)
    }
}

fn classify_titled(signals: &AnchorSignals) -> Option<Classification> {
    let text = signals.anchor_text.as_str();
    let title = signals.title_value.as_str();

    if !signals.has_href {
        return if text.is_empty() {
            if signals.has_aria_hidden {
                None
            } else {
                Some(Classification::warning(WITH_TITLE))
            }
        } else if text != title {
            None
        } else {
            Some(Classification::warning(WITH_TITLE))
        };
    }

    let href = signals.href_value.as_str();

    if !title.is_empty() && href.is_empty() {
        Some(Classification::warning(WITH_TITLE))
    } else if title.is_empty() {
        if !href.is_empty() && !text.is_empty() {
            Some(Classification::notice(BASE))
        } else {
            Some(Classification::warning(BASE))
        }
    } else if text.is_empty() {
        Some(Classification::notice(WITH_TITLE))
    } else if text == title {
        Some(Classification::warning(WITH_TITLE))
    } else {
        Some(Classification::notice(WITH_TITLE))
    }
}

fn classify_untitled(signals: &AnchorSignals) -> Option<Classification> {
    let text = signals.anchor_text.as_str();

    if !signals.has_href {
        return if text.is_empty() && signals.has_aria_hidden {
            None
        } else {
            Some(Classification::warning(BASE))
        };
    }

    // In the second arm text is known empty, so only `has_aria_hidden`
    // can hold.
    if !text.is_empty() {
        Some(Classification::notice(BASE))
    } else if !text.is_empty() || signals.has_aria_hidden {
        None
    } else {
        Some(Classification::warning(BASE))
    }
}
