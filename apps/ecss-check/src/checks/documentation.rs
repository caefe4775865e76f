//! Documentation completeness (ECSS-Q-ST-80C): one name fragment per
//! required document category. Files and directories both count.

use super::{Section, SectionResult};
use crate::discover::Finder;
use crate::error::Result;
use crate::models::{Category, Clause, Issue, Severity, Standard};

/// (name pattern, category label)
pub const REQUIRED_DOCS: [(&str, &str); 4] = [
    ("*README.md*", "Project overview"),
    ("*requirements*", "Requirements specification"),
    ("*design*", "Design documentation"),
    ("*test*", "Test documentation"),
];

pub fn check(finder: &Finder) -> Result<SectionResult> {
    let mut out = SectionResult::new(Section::Documentation);
    for (pattern, label) in REQUIRED_DOCS {
        if finder.find(pattern)?.is_empty() {
            out.issues.push(
                Issue::new(
                    Severity::Minor,
                    Category::Documentation,
                    format!("Missing {}", label),
                    finder.root(),
                )
                .citing(Clause::new(Standard::QSt80C, "5.7")),
            );
        } else {
            out.notes.push(format!("Found {}", label));
        }
    }
    Ok(out)
}
