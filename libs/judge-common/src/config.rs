// Harness configuration shared by the runner and its tests
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SOURCE_PATH: &str = "main.cpp";
pub const DEFAULT_JUDGE_DIR: &str = "judge";
pub const DEFAULT_MAX_CASE_INDEX: u32 = 10;
pub const DEFAULT_OUTPUT_PATH: &str = "out.txt";
pub const DEFAULT_EXECUTABLE_PATH: &str = "main";
pub const DEFAULT_COMPILER: &str = "g++";
pub const DEFAULT_COMPILER_FLAGS: &[&str] = &["-O3"];

/// Everything one harness run needs to know.
///
/// Missing fields in a JSON config file fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub source_path: PathBuf,
    pub judge_dir: PathBuf,
    /// Cases are looked up for indices `1..=max_case_index`
    pub max_case_index: u32,
    /// Captured stdout of the program, overwritten for every case
    pub output_path: PathBuf,
    pub executable_path: PathBuf,
    pub compiler: String,
    pub compiler_flags: Vec<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            judge_dir: PathBuf::from(DEFAULT_JUDGE_DIR),
            max_case_index: DEFAULT_MAX_CASE_INDEX,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            executable_path: PathBuf::from(DEFAULT_EXECUTABLE_PATH),
            compiler: DEFAULT_COMPILER.to_string(),
            compiler_flags: DEFAULT_COMPILER_FLAGS.iter().map(|f| f.to_string()).collect(),
        }
    }
}
