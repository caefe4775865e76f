//! Test coverage checks (ECSS-E-ST-10-03C): test plan presence and a
//! file-count proxy for test artifacts.

use super::{Section, SectionResult};
use crate::discover::Finder;
use crate::error::Result;
use crate::models::{Category, Clause, Issue, Severity, Standard};

pub const PLAN_PATTERN: &str = "*test*plan*.md";
pub const TEST_PATTERNS: [&str; 2] = ["test*.py", "test*.md"];
/// Fewer test artifacts than this raises an advisory finding.
pub const MIN_TEST_FILES: usize = 5;

pub fn check(finder: &Finder) -> Result<SectionResult> {
    let mut out = SectionResult::new(Section::TestCoverage);

    let plans = finder.find(PLAN_PATTERN)?;
    match plans.first() {
        None => out.issues.push(
            Issue::new(
                Severity::Critical,
                Category::Verification,
                "No test plan document found",
                finder.root(),
            )
            .citing(Clause::new(Standard::ESt1003C, "5.4.1")),
        ),
        Some(first) => out
            .notes
            .push(format!("Found test plan: {}", super::file_name(first))),
    }

    let tests = finder.find_any(&TEST_PATTERNS)?.len();
    if tests < MIN_TEST_FILES {
        out.issues.push(
            Issue::new(
                Severity::Minor,
                Category::Verification,
                format!(
                    "Only {} test files found - may indicate insufficient coverage",
                    tests
                ),
                finder.root(),
            )
            .citing(Clause::new(Standard::ESt1003C, "5.4.2")),
        );
    }
    Ok(out)
}
