//! Markdown compliance report.
//!
//! The document is a pure function of the audit plus the generation context
//! line (the working directory), so identical runs produce identical bytes.

use crate::audit::Audit;
use crate::error::{CheckError, Result};
use crate::models::Severity;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

pub const TITLE: &str = "# ECSS Compliance Report";

/// Render the report. `generated` is written verbatim as the context line.
pub fn render_report(audit: &Audit, generated: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", TITLE);
    let _ = writeln!(out, "**Project**: {}", audit.project_name());
    let _ = writeln!(out, "**Generated**: {}\n", generated.display());

    let counts = audit.counts();
    out.push_str("## Summary\n\n");
    out.push_str("| Severity | Count |\n");
    out.push_str("|----------|-------|\n");
    for sev in Severity::ALL {
        let _ = writeln!(out, "| {} | {} |", sev.title(), counts.get(sev));
    }
    out.push('\n');

    out.push_str("## Findings\n\n");
    for sev in Severity::ALL {
        let issues: Vec<_> = audit.by_severity(sev).collect();
        if issues.is_empty() {
            continue;
        }
        let _ = writeln!(out, "### {} Issues\n", sev.as_str().to_uppercase());
        for (i, is) in issues.iter().enumerate() {
            let _ = writeln!(out, "{}. **{}**: {}", i + 1, is.category(), is.description());
            let _ = writeln!(out, "   - File: `{}`", is.source_path().display());
            let _ = writeln!(out, "   - ECSS Reference: {}\n", is.clause_text());
        }
    }
    out
}

/// Write the report to `path`, using the current directory as context.
pub fn write_report(audit: &Audit, path: &Path) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|source| CheckError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    let body = render_report(audit, &cwd);
    fs::write(path, body).map_err(|source| CheckError::Report {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "report written");
    Ok(())
}
