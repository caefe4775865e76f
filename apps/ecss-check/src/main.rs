//! ecss-check CLI binary entry point.
//! Resolves configuration, runs all checks, prints results and exits with
//! the verdict code.

use clap::Parser;
use ecss_check::cli::{Cli, VERSION_LINE};
use ecss_check::{check_all, config, output, report, utils, CheckError, Finder};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", VERSION_LINE);
        return ExitCode::SUCCESS;
    }
    init_tracing();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: &Cli) -> Result<u8, CheckError> {
    let eff = config::resolve_effective(
        &cli.project_path,
        cli.config.as_deref(),
        cli.output.as_deref(),
        cli.report.as_deref(),
    )?;
    if let Some(p) = eff.config_path.as_ref() {
        if eff.output != "json" {
            eprintln!("{} Using config {}", utils::info_prefix(), p.display());
        }
    }

    let finder = Finder::new(&eff.project_root, &eff.exclude)?;
    let audit = check_all(&finder)?;
    output::print_audit(&audit, &eff.output);

    if let Some(path) = eff.report.as_ref() {
        report::write_report(&audit, path)?;
        if eff.output != "json" {
            println!("\n📄 Detailed report saved to: {}", path.display());
        }
    }
    Ok(audit.verdict().exit_code())
}
