//! Rule identifiers and severity levels reported for anchors

use std::fmt;

/// The rule family matched by an anchor
///
/// Both sets belong to WCAG success criterion 2.4.4 (link purpose).
/// `LinkPurposeWithTitle` additionally names H33, the technique for
/// supplementing link text with a `title` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// H77, H78, H79, H80, H81
    LinkPurpose,

    /// H77, H78, H79, H80, H81, H33
    LinkPurposeWithTitle,
}

impl RuleSet {
    /// Returns the comma-joined identifier string used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkPurpose => "2_4_4_H77,H78,H79,H80,H81",
            Self::LinkPurposeWithTitle => "2_4_4_H77,H78,H79,H80,H81,H33",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Likely accessibility defect
    Warning,

    /// Softer advisory, e.g. link text differing from its title
    Notice,
}

impl Severity {
    /// Returns the label written to reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "WARNING",
            Self::Notice => "NOTICE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty classification result for one anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub rules: RuleSet,
    pub severity: Severity,
}

impl Classification {
    pub const fn warning(rules: RuleSet) -> Self {
        Self {
            rules,
            severity: Severity::Warning,
        }
    }

    pub const fn notice(rules: RuleSet) -> Self {
        Self {
            rules,
            severity: Severity::Notice,
        }
    }
}
