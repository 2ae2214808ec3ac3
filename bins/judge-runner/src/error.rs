// Fatal harness errors: any of these aborts the run before (further) cases execute
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Compilation failed: `{command}` {}", describe_exit(.exit_code))]
    Compile {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("Compilation failed: could not run `{command}`: {detail}")]
    CompilerSpawn { command: String, detail: String },

    #[error("Directory '{}' not found", .path.display())]
    MissingDirectory { path: PathBuf },

    #[error("No complete test case found in '{}'", .dir.display())]
    NoValidCases { dir: PathBuf },
}

impl HarnessError {
    /// Extra line telling the user how to fix the judge directory
    pub fn hint(&self) -> Option<String> {
        match self {
            HarnessError::MissingDirectory { path } => Some(format!(
                "Make sure a '{}' directory exists with the test files.",
                path.display()
            )),
            HarnessError::NoValidCases { dir } => Some(format!(
                "Make sure '{}' contains exampleXX.txt and sol_exampleXX.txt pairs.",
                dir.display()
            )),
            HarnessError::Compile { .. } | HarnessError::CompilerSpawn { .. } => None,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}
