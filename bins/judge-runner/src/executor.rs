/// Harness Executor - Pipeline Orchestration
///
/// **Responsibility:**
/// Drive one run end to end: locate cases, compile, then run and judge each
/// case in order.
///
/// **Architecture:**
/// 1. Locator checks the judge directory (locator.rs)
/// 2. Builder compiles the source (builder.rs)
/// 3. Runner executes the program per case (runner.rs)
/// 4. Evaluator compares its output (evaluator.rs)
/// 5. Reporter prints each outcome and the summary (reporter.rs)
///
/// Cases run strictly one after another. They all share `output_path`, which
/// is written, closed and read back before the next case starts; running
/// cases concurrently would need one output file per case.

use crate::engine::ProcessInvoker;
use crate::error::HarnessError;
use crate::{builder, evaluator, locator, reporter, runner};
use chrono::Utc;
use judge_common::config::HarnessConfig;
use judge_common::types::{CaseReport, Summary};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Run the whole harness.
///
/// `Err` is a fatal error: nothing (more) was executed. Per-case failures are
/// part of the returned `Summary`.
#[instrument(skip_all, fields(judge_dir = %config.judge_dir.display()))]
pub async fn run_harness<I: ProcessInvoker>(
    config: &HarnessConfig,
    invoker: &I,
) -> Result<Summary, HarnessError> {
    let started_at = Utc::now();

    // Checked before compiling so a bad judge directory never spawns anything
    let cases = locator::locate_cases(&config.judge_dir, config.max_case_index)?;

    println!();
    builder::compile(invoker, config).await?;

    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        println!();
        println!("Testing with input: {}", case.name());

        let start = Instant::now();
        let outcome = match runner::run_case(invoker, config, &case).await {
            Some(execution_error) => execution_error,
            None => evaluator::evaluate_case(&case, &config.output_path),
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        reporter::print_case_outcome(&case, &outcome);
        debug!(
            case = %case.name(),
            outcome = ?outcome,
            elapsed_ms = elapsed_ms,
            "Case finished"
        );

        reports.push(CaseReport {
            case,
            outcome,
            elapsed_ms,
        });
    }

    let summary = Summary::from_reports(reports, started_at);
    reporter::print_summary(&summary);

    info!(
        all_passed = summary.all_passed,
        passed = summary.passed_count(),
        total = summary.results.len(),
        "Run complete"
    );

    Ok(summary)
}
