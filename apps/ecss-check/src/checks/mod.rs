//! Compliance rule evaluators.
//!
//! Each evaluator looks up its own inputs through a [`Finder`] and returns a
//! [`SectionResult`]: the issues it found plus short progress notes for the
//! console. Evaluators never print and never treat a missing artifact as an
//! error; only read failures on discovered files propagate.

pub mod documentation;
pub mod requirements;
pub mod traceability;
pub mod verification;

use crate::audit::Audit;
use crate::discover::Finder;
use crate::error::Result;
use crate::models::Issue;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Evaluation stage, in fixed run order.
pub enum Section {
    Requirements,
    Traceability,
    TestCoverage,
    Documentation,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Requirements => "Checking Requirements (ECSS-E-ST-10-02C)...",
            Section::Traceability => "Checking Requirements Traceability...",
            Section::TestCoverage => "Checking Test Coverage (ECSS-E-ST-10-03C)...",
            Section::Documentation => "Checking Documentation Completeness...",
        }
    }
}

#[derive(Debug, Clone)]
/// Output of one evaluator.
pub struct SectionResult {
    pub section: Section,
    pub notes: Vec<String>,
    pub issues: Vec<Issue>,
}

impl SectionResult {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            notes: Vec::new(),
            issues: Vec::new(),
        }
    }
}

/// Run every evaluator in order and aggregate the results.
pub fn check_all(finder: &Finder) -> Result<Audit> {
    info!(root = %finder.root().display(), "checking ECSS compliance");
    let mut audit = Audit::new(finder.root());
    audit.push(requirements::check(finder)?);
    audit.push(traceability::check(finder)?);
    audit.push(verification::check(finder)?);
    audit.push(documentation::check(finder)?);
    info!(issues = audit.issues().count(), verdict = %audit.verdict(), "checks complete");
    Ok(audit)
}

/// Last path component for progress notes.
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
