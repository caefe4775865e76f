//! Traceability matrix presence. Existence only; the matrix is not opened.

use super::{Section, SectionResult};
use crate::discover::Finder;
use crate::error::Result;
use crate::models::{Category, Clause, Issue, Severity, Standard};

pub const PATTERNS: [&str; 2] = ["*trace*.xlsx", "*trace*.md"];

pub fn check(finder: &Finder) -> Result<SectionResult> {
    let mut out = SectionResult::new(Section::Traceability);
    let found = finder.find_any(&PATTERNS)?;
    match found.first() {
        None => out.issues.push(
            Issue::new(
                Severity::Major,
                Category::Traceability,
                "No traceability matrix found",
                finder.root(),
            )
            .citing(Clause::new(Standard::ESt1002C, "5.2.3")),
        ),
        Some(first) => out.notes.push(format!(
            "Found traceability matrix: {}",
            super::file_name(first)
        )),
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_matrix_is_major() {
        let dir = tempdir().unwrap();
        let res = check(&Finder::new(dir.path(), &[]).unwrap()).unwrap();
        assert_eq!(res.issues.len(), 1);
        assert_eq!(res.issues[0].severity(), Severity::Major);
        assert_eq!(res.issues[0].category(), Category::Traceability);
        assert_eq!(
            res.issues[0].clause_text(),
            "ECSS-E-ST-10-02C § 5.2.3"
        );
    }

    #[test]
    fn test_spreadsheet_or_markdown_satisfies() {
        for name in ["req_traceability.xlsx", "traceability_matrix.md"] {
            let dir = tempdir().unwrap();
            fs::create_dir_all(dir.path().join("docs")).unwrap();
            fs::write(dir.path().join("docs").join(name), "").unwrap();
            let res = check(&Finder::new(dir.path(), &[]).unwrap()).unwrap();
            assert!(res.issues.is_empty(), "{name}");
            assert_eq!(res.notes, vec![format!("Found traceability matrix: {name}")]);
        }
    }

    #[test]
    fn test_other_extensions_do_not_count() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("trace.csv"), "").unwrap();
        let res = check(&Finder::new(dir.path(), &[]).unwrap()).unwrap();
        assert_eq!(res.issues.len(), 1);
    }
}
