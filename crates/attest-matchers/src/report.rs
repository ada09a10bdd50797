//! Structured mismatch reports.
//!
//! A report is the machine-readable form of an aggregated failure
//! description: one entry per failed check, in evaluation order. The
//! `Display` rendering produces the `Expected: <description> but <detail>`
//! lines consumed by test output.

use serde::Serialize;
use std::fmt;

/// A single failed check from a combinator evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MismatchEntry {
    /// What the failed check required.
    pub expectation: String,
    /// Check-specific detail about the candidate.
    pub explanation: String,
}

impl MismatchEntry {
    /// Create a new entry.
    pub fn new(expectation: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            expectation: expectation.into(),
            explanation: explanation.into(),
        }
    }
}

/// Aggregated outcome of evaluating a set of checks against one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MismatchReport {
    /// Failed checks, in evaluation order.
    pub entries: Vec<MismatchEntry>,
    /// Number of checks that were evaluated.
    pub checks_run: usize,
}

impl MismatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check.
    pub fn add_entry(&mut self, entry: MismatchEntry) {
        self.entries.push(entry);
    }

    /// Whether every evaluated check passed.
    pub fn is_match(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of failed checks.
    pub fn failures(&self) -> usize {
        self.entries.len()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: MismatchReport) {
        self.entries.extend(other.entries);
        self.checks_run += other.checks_run;
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entry) in self.entries.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "Expected: {} but {}", entry.expectation, entry.explanation)?;
        }
        Ok(())
    }
}
