//! Console rendering of an audit.
//!
//! Supports `human` (default) and `json` outputs. Rendering is a separate
//! pass over a finished [`Audit`]; the evaluators themselves never print.

use crate::audit::{Audit, Verdict};
use crate::checks::Section;
use crate::models::Severity;
use crate::utils::use_colors;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;
use std::fmt::Write as _;

const RULE: &str = "============================================================";

/// Print the audit in the requested output mode.
pub fn print_audit(audit: &Audit, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_audit_json(audit)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => print!("{}", render_human(audit, use_colors(output))),
    }
}

/// Human console text: progress per section, grouped summary, verdict.
pub fn render_human(audit: &Audit, color: bool) -> String {
    let bold = |s: &str| {
        if color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    };
    let mut out = String::new();
    let _ = writeln!(out, "🔍 Checking ECSS compliance for: {}", audit.root().display());
    let _ = writeln!(out, "{}", RULE);

    for sec in audit.sections() {
        let icon = match sec.section {
            Section::Requirements => "📋",
            Section::Traceability => "🔗",
            Section::TestCoverage => "🧪",
            Section::Documentation => "📚",
        };
        let _ = writeln!(out, "\n{} {}", icon, bold(sec.section.title()));
        for note in &sec.notes {
            let tick = if color {
                "✓".green().to_string()
            } else {
                "✓".to_string()
            };
            let _ = writeln!(out, "  {} {}", tick, note);
        }
    }

    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "📊 {}", bold("COMPLIANCE CHECK SUMMARY"));
    let _ = writeln!(out, "{}", RULE);

    let counts = audit.counts();
    for sev in Severity::ALL {
        let n = counts.get(sev);
        if n == 0 {
            continue;
        }
        let (dot, mark, heading) = match sev {
            Severity::Critical => ("🔴", "❌", "CRITICAL Issues:"),
            Severity::Major => ("🟡", "⚠️ ", "MAJOR Issues:"),
            Severity::Minor => ("🔵", "ℹ️ ", "MINOR Issues:"),
        };
        let heading = if color {
            match sev {
                Severity::Critical => heading.red().bold().to_string(),
                Severity::Major => heading.yellow().bold().to_string(),
                Severity::Minor => heading.blue().bold().to_string(),
            }
        } else {
            heading.to_string()
        };
        let _ = writeln!(out, "\n{} {} {}", dot, heading, n);
        for is in audit.by_severity(sev) {
            let _ = writeln!(out, "  {} {}: {}", mark, is.category(), is.description());
            if sev != Severity::Minor {
                let _ = writeln!(out, "     File: {}", is.location());
            }
            let _ = writeln!(out, "     ECSS: {}", is.clause_text());
        }
    }

    let verdict = audit.verdict();
    let icon = match verdict {
        Verdict::Pass => "✅",
        Verdict::ConditionalPass => "⚠️ ",
        Verdict::Fail => "❌",
    };
    let _ = writeln!(out, "\n{}", RULE);
    let _ = writeln!(out, "{} {}", icon, bold(verdict.message()));
    if verdict == Verdict::Pass {
        let _ = writeln!(out, "(Minor issues are recommendations for improvement)");
    }
    let _ = writeln!(out, "{}", RULE);
    out
}

/// Compose the JSON document (pure) for testing/snapshot purposes.
pub fn compose_audit_json(audit: &Audit) -> JsonVal {
    let counts = audit.counts();
    let verdict = audit.verdict();
    let issues: Vec<JsonVal> = Severity::ALL
        .iter()
        .flat_map(|sev| audit.by_severity(*sev))
        .map(|is| serde_json::to_value(is).unwrap_or(JsonVal::Null))
        .collect();
    json!({
        "project": audit.root().to_string_lossy(),
        "issues": issues,
        "summary": {
            "critical": counts.critical,
            "major": counts.major,
            "minor": counts.minor,
            "total": counts.total(),
        },
        "verdict": verdict,
        "exit_code": verdict.exit_code(),
    })
}
