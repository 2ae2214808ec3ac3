// Test case discovery in the judge directory
use crate::error::HarnessError;
use judge_common::types::TestCase;
use std::path::Path;
use tracing::{debug, info};

pub fn input_file_name(index: u32) -> String {
    format!("example{:02}.txt", index)
}

pub fn expected_file_name(index: u32) -> String {
    format!("sol_example{:02}.txt", index)
}

/// Collect every complete `exampleXX.txt` / `sol_exampleXX.txt` pair for
/// indices `1..=max_case_index`.
///
/// An incomplete pair is skipped with a warning. A missing directory or an
/// empty result is fatal.
pub fn locate_cases(judge_dir: &Path, max_case_index: u32) -> Result<Vec<TestCase>, HarnessError> {
    if !judge_dir.exists() {
        return Err(HarnessError::MissingDirectory {
            path: judge_dir.to_path_buf(),
        });
    }

    let mut cases = Vec::new();
    for index in 1..=max_case_index {
        let input_path = judge_dir.join(input_file_name(index));
        let expected_output_path = judge_dir.join(expected_file_name(index));

        if input_path.exists() && expected_output_path.exists() {
            cases.push(TestCase {
                index,
                input_path,
                expected_output_path,
            });
        } else {
            println!("Warning: file pair for test {:02} not found", index);
            debug!(
                index = index,
                input_exists = input_path.exists(),
                expected_exists = expected_output_path.exists(),
                "Skipping incomplete case"
            );
        }
    }

    if cases.is_empty() {
        return Err(HarnessError::NoValidCases {
            dir: judge_dir.to_path_buf(),
        });
    }

    println!();
    println!("Found {} valid test cases", cases.len());
    info!(case_count = cases.len(), judge_dir = %judge_dir.display(), "Located test cases");

    Ok(cases)
}
