/// Output Evaluator - Line-Based Comparison
///
/// **Core Responsibility:**
/// Decide whether the captured output of a case matches its solution file.
///
/// **Critical Properties:**
/// - Knows nothing about processes or compilers
/// - Pure comparison once both files are read
/// - Compares raw bytes; text decoding is only used to display mismatches
///
/// **Normalization Rules:**
/// - Line terminators: \n, \r\n and a lone \r
/// - Trim trailing ASCII whitespace of each line: YES
/// - Ignore a missing final newline: YES
/// - Trim leading whitespace: NO
/// - Collapse internal whitespace: NO
/// - Trim trailing non-ASCII whitespace (e.g. U+00A0): NO
/// - Floating-point tolerance: NO
///
/// Mismatches are only itemised over the lines both sides have. Outputs that
/// differ in length still fail, possibly with no itemised line.

use judge_common::types::{CaseOutcome, LineMismatch, TestCase};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Split into lines and strip trailing whitespace from each
pub fn normalize_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                if content.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }

    lines.into_iter().map(<[u8]>::trim_ascii_end).collect()
}

/// Compare normalized line sequences
pub fn compare_lines(expected: &[&[u8]], obtained: &[&[u8]]) -> CaseOutcome {
    if expected == obtained {
        return CaseOutcome::Passed;
    }

    let mismatches = expected
        .iter()
        .zip(obtained.iter())
        .enumerate()
        .filter(|(_, (exp, got))| exp != got)
        .map(|(i, (exp, got))| LineMismatch {
            line: i + 1,
            expected: String::from_utf8_lossy(exp).into_owned(),
            obtained: String::from_utf8_lossy(got).into_owned(),
        })
        .collect();

    CaseOutcome::Failed { mismatches }
}

/// Judge a case whose program already ran and wrote `output_path`
pub fn evaluate_case(case: &TestCase, output_path: &Path) -> CaseOutcome {
    let obtained = match fs::read(output_path) {
        Ok(content) => content,
        Err(e) => {
            return CaseOutcome::ComparisonError {
                message: format!("{}: {}", output_path.display(), e),
            }
        }
    };
    let expected = match fs::read(&case.expected_output_path) {
        Ok(content) => content,
        Err(e) => {
            return CaseOutcome::ComparisonError {
                message: format!("{}: {}", case.expected_output_path.display(), e),
            }
        }
    };

    let expected_lines = normalize_lines(&expected);
    let obtained_lines = normalize_lines(&obtained);

    debug!(
        case = %case.name(),
        expected_lines = expected_lines.len(),
        obtained_lines = obtained_lines.len(),
        "Comparing output"
    );

    compare_lines(&expected_lines, &obtained_lines)
}
