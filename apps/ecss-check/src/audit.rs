//! Aggregation of evaluator results: ordered issues, severity counts, verdict.

use crate::checks::SectionResult;
use crate::models::{Issue, Severity};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// All results of one checker run, in evaluation order.
pub struct Audit {
    root: PathBuf,
    sections: Vec<SectionResult>,
}

impl Audit {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sections: Vec::new(),
        }
    }

    pub fn push(&mut self, section: SectionResult) {
        self.sections.push(section);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Final path component of the root, used as the project name.
    pub fn project_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.root.display().to_string())
    }

    pub fn sections(&self) -> &[SectionResult] {
        &self.sections
    }

    /// Every issue in insertion order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.sections.iter().flat_map(|s| s.issues.iter())
    }

    /// Issues of one severity tier, in insertion order.
    pub fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues().filter(move |i| i.severity() == severity)
    }

    pub fn counts(&self) -> Counts {
        let mut c = Counts::default();
        for is in self.issues() {
            match is.severity() {
                Severity::Critical => c.critical += 1,
                Severity::Major => c.major += 1,
                Severity::Minor => c.minor += 1,
            }
        }
        c
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_counts(&self.counts())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
/// Issue counts per severity.
pub struct Counts {
    pub critical: usize,
    pub major: usize,
    pub minor: usize,
}

impl Counts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Major => self.major,
            Severity::Minor => self.minor,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.major + self.minor
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Overall outcome. Minor issues never influence it.
pub enum Verdict {
    Pass,
    ConditionalPass,
    Fail,
}

impl Verdict {
    pub fn from_counts(c: &Counts) -> Self {
        if c.critical > 0 {
            Verdict::Fail
        } else if c.major > 0 {
            Verdict::ConditionalPass
        } else {
            Verdict::Pass
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Pass => 0,
            Verdict::ConditionalPass => 1,
            Verdict::Fail => 2,
        }
    }

    /// Console verdict line.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Pass => "PASS - Project meets ECSS compliance requirements",
            Verdict::ConditionalPass => "CONDITIONAL PASS - Major issues should be addressed",
            Verdict::Fail => "FAIL - Critical issues must be resolved",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Pass => "PASS",
            Verdict::ConditionalPass => "CONDITIONAL_PASS",
            Verdict::Fail => "FAIL",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::Section;
    use crate::models::Category;

    fn counts(critical: usize, major: usize, minor: usize) -> Counts {
        Counts {
            critical,
            major,
            minor,
        }
    }

    #[test]
    fn test_verdict_is_total_over_counts() {
        for minor in [0, 3] {
            assert_eq!(Verdict::from_counts(&counts(0, 0, minor)), Verdict::Pass);
            assert_eq!(
                Verdict::from_counts(&counts(0, 2, minor)),
                Verdict::ConditionalPass
            );
            for major in [0, 1] {
                assert_eq!(
                    Verdict::from_counts(&counts(1, major, minor)),
                    Verdict::Fail
                );
            }
        }
        assert_eq!(Verdict::Pass.exit_code(), 0);
        assert_eq!(Verdict::ConditionalPass.exit_code(), 1);
        assert_eq!(Verdict::Fail.exit_code(), 2);
    }

    #[test]
    fn test_by_severity_keeps_insertion_order() {
        let mut a = Audit::new("/proj");
        let mut s1 = SectionResult::new(Section::Requirements);
        s1.issues.push(Issue::new(Severity::Major, Category::Requirements, "m1", "/proj"));
        s1.issues.push(Issue::new(Severity::Critical, Category::Requirements, "c1", "/proj"));
        let mut s2 = SectionResult::new(Section::Traceability);
        s2.issues.push(Issue::new(Severity::Major, Category::Traceability, "m2", "/proj"));
        a.push(s1);
        a.push(s2);

        let majors: Vec<_> = a.by_severity(Severity::Major).map(|i| i.description()).collect();
        assert_eq!(majors, vec!["m1", "m2"]);
        assert_eq!(a.counts(), counts(1, 2, 0));
        assert_eq!(a.counts().total(), 3);
        assert_eq!(a.verdict(), Verdict::Fail);
        assert_eq!(a.project_name(), "proj");
    }
}
