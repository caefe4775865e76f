//! CLI argument parsing via `clap`.

use clap::Parser;

pub const VERSION_LINE: &str = concat!("ECSS Compliance Checker v", env!("CARGO_PKG_VERSION"));

#[derive(Parser)]
#[command(
    name = "ecss-check",
    about = "ECSS Compliance Checker - Automated verification of ECSS standards",
    long_about = "ECSS Compliance Checker - Automated verification of ECSS standards in project documentation.\n\nConfiguration precedence: CLI > ecss-check.toml > defaults.",
    after_help = "Examples:\n  ecss-check /path/to/project\n  ecss-check . --report compliance_report.md\n  ecss-check ../my_project --output json\n\nECSS Standards Checked:\n  - ECSS-E-ST-10-02C: System engineering general requirements\n  - ECSS-E-ST-10-03C: Testing\n  - ECSS-Q-ST-80C: Software product assurance\n\nExit codes: 0 PASS, 1 CONDITIONAL PASS or usage error, 2 FAIL",
    disable_version_flag = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(default_value = ".", help = "Path to project directory (default: current directory)")]
    pub project_path: String,
    #[arg(short = 'r', long, value_name = "PATH", help = "Generate detailed report to specified file")]
    pub report: Option<String>,
    #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, value_name = "PATH", help = "Config file (default: ecss-check.toml in the project)")]
    pub config: Option<String>,
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue, help = "Print version and exit")]
    pub version: bool,
}
