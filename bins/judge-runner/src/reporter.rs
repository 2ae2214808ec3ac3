// Console and JSON reporting of case outcomes
use crate::error::HarnessError;
use anyhow::{Context, Result};
use judge_common::types::{CaseOutcome, Summary, TestCase};
use std::fs;
use std::path::Path;

pub fn print_case_outcome(case: &TestCase, outcome: &CaseOutcome) {
    match outcome {
        CaseOutcome::Passed => {
            println!("✅ Test {} passed!", case.name());
        }
        CaseOutcome::Failed { mismatches } => {
            println!("❌ Test {} failed!", case.name());
            println!("Differences found:");
            for mismatch in mismatches {
                println!("Line {}:", mismatch.line);
                println!("  Expected: {}", mismatch.expected);
                println!("  Obtained: {}", mismatch.obtained);
            }
        }
        CaseOutcome::ExecutionError { exit_code, detail } => {
            println!(
                "Error running the program with input {}",
                case.input_path.display()
            );
            match exit_code {
                Some(code) => println!("Exit code: {}", code),
                None => println!("Exit code: none (terminated by a signal or not started)"),
            }
            if let Some(detail) = detail {
                println!("  {}", detail);
            }
        }
        CaseOutcome::ComparisonError { message } => {
            println!("Error reading output files: {}", message);
        }
    }
}

pub fn print_summary(summary: &Summary) {
    println!();
    if summary.all_passed {
        println!("All tests passed!");
    } else {
        println!(
            "Some tests failed! ({} of {} passed)",
            summary.passed_count(),
            summary.results.len()
        );
    }
}

/// Console output for an aborted run
pub fn print_fatal(error: &HarnessError) {
    println!("Error: {}", error);
    if let Some(hint) = error.hint() {
        println!("{}", hint);
    }
    println!();
    println!("Some tests failed!");
}

/// Persist the run summary as pretty JSON
pub fn write_report(path: &Path, summary: &Summary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;

    fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    Ok(())
}
