//! `tickstats <file>`: print daily trade statistics for one headerless trade file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tickstats::Analyzer;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "tickstats")]
#[command(about = "Summary statistics for a file of tick-level trades")]
#[command(version)]
struct Cli {
    /// Headerless, comma-separated trade file.
    input: Option<PathBuf>,
}

fn run(input: PathBuf) -> anyhow::Result<()> {
    let analyzer = Analyzer::builder().build()?;
    let report = analyzer
        .analyze_path(&input)
        .with_context(|| format!("analyzing {}", input.display()))?;
    print!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so the report on stdout stays clean.
    // Suggested: RUST_LOG=tickstats=debug,tickstats_core=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();

    let cli = Cli::parse();
    let Some(input) = cli.input else {
        println!("need to specify input file");
        println!("{}", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    match run(input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "analysis failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
