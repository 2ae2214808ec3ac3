use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An input file paired with the solution it must reproduce.
///
/// Only built by the case locator, and only when both files exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub index: u32,
    pub input_path: PathBuf,
    pub expected_output_path: PathBuf,
}

impl TestCase {
    /// File name of the input, used as the case label in console output
    pub fn name(&self) -> String {
        self.input_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.input_path.display().to_string())
    }
}

/// A single differing line, numbered from 1.
///
/// Both sides hold the trailing-whitespace-stripped text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineMismatch {
    pub line: usize,
    pub expected: String,
    pub obtained: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    /// Output differs. `mismatches` only covers the overlapping line range,
    /// so it is empty when the outputs differ in length alone.
    Failed { mismatches: Vec<LineMismatch> },
    /// The program exited non-zero, was killed by a signal (`exit_code` is
    /// `None`), or could not be started at all (`detail` says why).
    ExecutionError {
        exit_code: Option<i32>,
        detail: Option<String>,
    },
    /// The captured output or the expected file could not be read.
    ComparisonError { message: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: TestCase,
    pub outcome: CaseOutcome,
    pub elapsed_ms: u64,
}

/// Aggregate of one harness run, in case order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub all_passed: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub results: Vec<CaseReport>,
}

impl Summary {
    /// Close a run. A run without any case never counts as passed.
    pub fn from_reports(results: Vec<CaseReport>, started_at: DateTime<Utc>) -> Self {
        let all_passed = !results.is_empty() && results.iter().all(|r| r.outcome.is_passed());

        Self {
            all_passed,
            started_at,
            finished_at: Utc::now(),
            results,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_passed()).count()
    }
}
