mod builder;
mod config;
mod engine;
mod error;
mod evaluator;
mod executor;
mod locator;
mod reporter;
mod runner;


use anyhow::Result;
use clap::Parser;
use config::ConfigOverrides;
use engine::LocalInvoker;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "judge-runner")]
#[command(
    about = "Compile a program and check it against the numbered cases of a judge directory",
    long_about = None
)]
struct Cli {
    /// Source file to compile (default: main.cpp)
    source: Option<PathBuf>,

    /// Directory holding exampleXX.txt / sol_exampleXX.txt pairs (default: judge)
    #[arg(short, long)]
    judge_dir: Option<PathBuf>,

    /// Highest case index to look for (default: 10)
    #[arg(short = 'n', long = "max-cases")]
    max_cases: Option<u32>,

    /// File the program's output is captured into (default: out.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path of the built executable (default: main)
    #[arg(short, long)]
    executable: Option<PathBuf>,

    /// Compiler command (default: g++)
    #[arg(long)]
    compiler: Option<String>,

    /// Compiler flag, repeatable; replaces the default -O3
    #[arg(long = "compiler-flag", allow_hyphen_values = true)]
    compiler_flags: Vec<String>,

    /// JSON file with harness settings; flags above take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the run summary as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_path: self.source.clone(),
            judge_dir: self.judge_dir.clone(),
            max_case_index: self.max_cases,
            output_path: self.output.clone(),
            executable_path: self.executable.clone(),
            compiler: self.compiler.clone(),
            compiler_flags: self.compiler_flags.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries the test report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = config::resolve(cli.config.as_deref(), cli.overrides())?;
    debug!(config = ?config, "Resolved harness configuration");

    let summary = match executor::run_harness(&config, &LocalInvoker).await {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Harness aborted");
            reporter::print_fatal(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut success = summary.all_passed;

    if let Some(report_path) = &cli.report {
        match reporter::write_report(report_path, &summary) {
            Ok(()) => debug!(path = %report_path.display(), "Report written"),
            Err(e) => {
                error!(error = %e, "Failed to write report");
                eprintln!("Failed to write report: {:#}", e);
                success = false;
            }
        }
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
