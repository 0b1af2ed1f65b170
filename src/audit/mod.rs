//! Anchor accessibility audit
//!
//! This module holds the pure part of the pipeline:
//! - `signals`: normalized per-anchor inputs read from the parsed element
//! - `classifier`: the order-sensitive link-purpose policy
//! - `rules`: rule identifiers and severity levels

mod classifier;
mod rules;
mod signals;

pub use classifier::classify;
pub use rules::{Classification, RuleSet, Severity};
pub use signals::AnchorSignals;
