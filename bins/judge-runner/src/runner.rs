// Runs the built executable once for a test case
use crate::engine::{runnable_path, Invocation, ProcessInvoker};
use judge_common::config::HarnessConfig;
use judge_common::types::{CaseOutcome, TestCase};
use tracing::{debug, warn};

/// `{executable} {input_path}` with the input on stdin and stdout captured
/// into the shared output file.
pub fn run_invocation(config: &HarnessConfig, case: &TestCase) -> Invocation {
    Invocation::new(runnable_path(&config.executable_path))
        .arg(&case.input_path)
        .stdin_from(&case.input_path)
        .stdout_to(&config.output_path)
}

/// Execute one case.
///
/// Returns the `ExecutionError` to record when the program could not run or
/// exited non-zero, or `None` once the output file is complete and ready to
/// be compared.
pub async fn run_case<I: ProcessInvoker>(
    invoker: &I,
    config: &HarnessConfig,
    case: &TestCase,
) -> Option<CaseOutcome> {
    let invocation = run_invocation(config, case);

    match invoker.invoke(&invocation).await {
        Ok(exit) if exit.success() => {
            debug!(case = %case.name(), "Program exited cleanly");
            None
        }
        Ok(exit) => {
            warn!(case = %case.name(), exit_code = ?exit.code, "Program exited with failure");
            Some(CaseOutcome::ExecutionError {
                exit_code: exit.code,
                detail: None,
            })
        }
        Err(e) => {
            warn!(case = %case.name(), error = %e, "Program could not be started");
            Some(CaseOutcome::ExecutionError {
                exit_code: None,
                detail: Some(format!("{:#}", e)),
            })
        }
    }
}
