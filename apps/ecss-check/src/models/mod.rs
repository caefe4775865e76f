//! Shared data models for findings: severity, category, clause citations.

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
/// Finding severity. Declaration order is the report tier order.
pub enum Severity {
    Critical,
    Major,
    Minor,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Critical, Severity::Major, Severity::Minor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }

    /// Capitalized label used in the report summary table.
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Major => "Major",
            Severity::Minor => "Minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Group of related checks.
pub enum Category {
    Requirements,
    Traceability,
    Verification,
    Documentation,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Requirements => "Requirements",
            Category::Traceability => "Traceability",
            Category::Verification => "Verification",
            Category::Documentation => "Documentation",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// ECSS standards cited by the checks.
pub enum Standard {
    /// System engineering general requirements.
    ESt1002C,
    /// Testing.
    ESt1003C,
    /// Software product assurance.
    QSt80C,
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Standard::ESt1002C => "ECSS-E-ST-10-02C",
            Standard::ESt1003C => "ECSS-E-ST-10-03C",
            Standard::QSt80C => "ECSS-Q-ST-80C",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Citation of a section within a standard, rendered as `<standard> § <section>`.
pub struct Clause {
    pub standard: Standard,
    pub section: &'static str,
}

impl Clause {
    pub const fn new(standard: Standard, section: &'static str) -> Self {
        Self { standard, section }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} § {}", self.standard, self.section)
    }
}

impl Serialize for Clause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A single compliance finding.
///
/// Built with [`Issue::new`] and the consuming `at_line`/`citing` helpers;
/// there are no setters, so a recorded issue never changes.
pub struct Issue {
    severity: Severity,
    category: Category,
    description: String,
    #[serde(rename = "file")]
    source_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(rename = "ecss_clause", skip_serializing_if = "Option::is_none")]
    clause: Option<Clause>,
}

impl Issue {
    pub fn new(
        severity: Severity,
        category: Category,
        description: impl Into<String>,
        source_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            severity,
            category,
            description: description.into(),
            source_path: source_path.into(),
            line: None,
            clause: None,
        }
    }

    /// Attach a 1-based line number; `0` keeps the issue file-level.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = (line > 0).then_some(line);
        self
    }

    pub fn citing(mut self, clause: Clause) -> Self {
        self.clause = Some(clause);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn clause(&self) -> Option<Clause> {
        self.clause
    }

    /// Clause text, empty when the issue cites nothing.
    pub fn clause_text(&self) -> String {
        self.clause.map(|c| c.to_string()).unwrap_or_default()
    }

    /// `path` or `path:line` for display.
    pub fn location(&self) -> String {
        match self.line {
            Some(n) => format!("{}:{}", self.source_path.display(), n),
            None => self.source_path.display().to_string(),
        }
    }
}
