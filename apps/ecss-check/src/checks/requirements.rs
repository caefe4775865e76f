//! Requirements specification checks (ECSS-E-ST-10-02C).
//!
//! Presence first: without a requirements document the finer checks are
//! meaningless and are skipped. Otherwise every `*requirements*.md` file is
//! read once and scanned for recommendatory wording, duplicate identifiers,
//! open TBD/TBC items and missing verification methods.

use super::{Section, SectionResult};
use crate::discover::Finder;
use crate::error::{CheckError, Result};
use crate::models::{Category, Clause, Issue, Severity, Standard};
use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

pub const PATTERN: &str = "*requirements*.md";

const CLAUSE_IDS: Clause = Clause::new(Standard::ESt1002C, "5.2.1");
const CLAUSE_WORDING: Clause = Clause::new(Standard::ESt1002C, "5.2.2");
const CLAUSE_VERIFICATION: Clause = Clause::new(Standard::ESt1002C, "6.2.1");

const VERIFICATION_KEYWORDS: [&str; 4] = ["test", "analysis", "review", "inspection"];

fn should_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bshould\b").expect("valid regex"))
}

fn req_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"R-[A-Z]+-\d+").expect("valid regex"))
}

pub fn check(finder: &Finder) -> Result<SectionResult> {
    let mut out = SectionResult::new(Section::Requirements);
    let files = finder.find_files(PATTERN)?;
    if files.is_empty() {
        out.issues.push(
            Issue::new(
                Severity::Critical,
                Category::Requirements,
                "No requirements specification found",
                finder.root(),
            )
            .citing(CLAUSE_IDS),
        );
        return Ok(out);
    }
    for path in files {
        debug!(path = %path.display(), "reading requirements file");
        let content = fs::read_to_string(&path).map_err(|source| CheckError::Read {
            path: path.clone(),
            source,
        })?;
        out.issues.extend(check_content(&path, &content));
        out.notes.push(format!("Checked {}", super::file_name(&path)));
    }
    Ok(out)
}

/// Evaluate one requirements document. Issues come out in a fixed order:
/// wording, identifiers, TBD/TBC, verification.
pub fn check_content(path: &Path, content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    let should = count_should(content);
    if should > 0 {
        issues.push(
            Issue::new(
                Severity::Major,
                Category::Requirements,
                format!(
                    "Found {} instances of \"should\" - use \"shall\" for mandatory requirements",
                    should
                ),
                path,
            )
            .citing(CLAUSE_WORDING),
        );
    }

    let dups = duplicate_ids(content);
    if !dups.is_empty() {
        let set = dups.into_iter().collect::<Vec<_>>().join("', '");
        issues.push(
            Issue::new(
                Severity::Critical,
                Category::Requirements,
                format!("Duplicate requirement IDs found: {{'{}'}}", set),
                path,
            )
            .citing(CLAUSE_IDS),
        );
    }

    let tbd = tbd_lines(content);
    if let Some(first) = tbd.first() {
        issues.push(
            Issue::new(
                Severity::Major,
                Category::Requirements,
                format!(
                    "Found {} TBD/TBC items - should be resolved for baseline",
                    tbd.len()
                ),
                path,
            )
            .at_line(*first)
            .citing(CLAUSE_WORDING),
        );
    }

    let unverified = count_unverified(content);
    if unverified > 0 {
        issues.push(
            Issue::new(
                Severity::Major,
                Category::Requirements,
                format!(
                    "{} requirements lack verification method specification",
                    unverified
                ),
                path,
            )
            .citing(CLAUSE_VERIFICATION),
        );
    }

    issues
}

/// Case-insensitive whole-word occurrences of "should".
pub fn count_should(content: &str) -> usize {
    should_re().find_iter(content).count()
}

/// Identifiers of the form `R-<UPPER>-<DIGITS>` that occur more than once.
pub fn duplicate_ids(content: &str) -> BTreeSet<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for m in req_id_re().find_iter(content) {
        *seen.entry(m.as_str()).or_insert(0) += 1;
    }
    seen.into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

/// 1-based numbers of lines containing `TBD` or `TBC`.
pub fn tbd_lines(content: &str) -> Vec<usize> {
    content
        .split('\n')
        .enumerate()
        .filter(|(_, line)| line.contains("TBD") || line.contains("TBC"))
        .map(|(i, _)| i + 1)
        .collect()
}

/// Fragments following each `R-` marker that name no verification method.
///
/// Any `R-` counts as a marker, including ones inside longer tokens, so the
/// figure is an approximation of the number of requirements.
pub fn count_unverified(content: &str) -> usize {
    content
        .split("R-")
        .skip(1)
        .filter(|block| {
            let lower = block.to_lowercase();
            !VERIFICATION_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .count()
}
