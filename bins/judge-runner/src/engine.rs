/// Process Engine - Abstraction for Launching External Programs
///
/// **Core Responsibility:**
/// Start a program with arguments, wire its stdin/stdout to files, and report
/// how it exited.
///
/// **Critical Architectural Boundary:**
/// - Engine knows HOW to start processes
/// - Engine does NOT know what a test case is
/// - Engine does NOT read or judge the captured output
///
/// Both the compiler and the program under test go through `ProcessInvoker`,
/// so the whole pipeline can be driven by a fake in tests.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A fully described process launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// File fed to the child's stdin; `None` inherits ours
    pub stdin: Option<PathBuf>,
    /// File the child's stdout is written to, truncated first; `None` inherits ours
    pub stdout: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            stdin: None,
            stdout: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn stdin_from(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdin = Some(path.into());
        self
    }

    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout = Some(path.into());
        self
    }

    /// Space-joined command line, for display only
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a finished process exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Capability to run an external program to completion.
///
/// `Err` means the process could not be set up or started. A process that
/// ran and failed is an `Ok` with a non-zero `ProcessExit`.
pub trait ProcessInvoker {
    async fn invoke(&self, invocation: &Invocation) -> Result<ProcessExit>;
}

/// Runs programs on the local machine and waits for them
pub struct LocalInvoker;

impl ProcessInvoker for LocalInvoker {
    async fn invoke(&self, invocation: &Invocation) -> Result<ProcessExit> {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stderr(Stdio::inherit());

        match &invocation.stdin {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                command.stdin(Stdio::from(file));
            }
            None => {
                command.stdin(Stdio::inherit());
            }
        }

        match &invocation.stdout {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file {}", path.display()))?;
                command.stdout(Stdio::from(file));
            }
            None => {
                command.stdout(Stdio::inherit());
            }
        }

        debug!(command = %invocation.command_line(), "Spawning process");

        let status = command
            .status()
            .await
            .with_context(|| format!("Failed to start `{}`", invocation.command_line()))?;

        // `command` owns the redirected file handles; they close when it drops here
        Ok(ProcessExit { code: status.code() })
    }
}

/// Path to launch a built executable with.
///
/// A bare file name like `main` would be searched on `PATH`, so it is
/// anchored to the current directory instead.
pub fn runnable_path(executable: &Path) -> PathBuf {
    let is_bare_name = executable.is_relative()
        && executable
            .parent()
            .map_or(true, |parent| parent.as_os_str().is_empty());

    if is_bare_name {
        Path::new(".").join(executable)
    } else {
        executable.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runnable_path_anchors_bare_names() {
        assert_eq!(runnable_path(Path::new("main")), PathBuf::from("./main"));
        assert_eq!(runnable_path(Path::new("build/main")), PathBuf::from("build/main"));
        assert_eq!(runnable_path(Path::new("./main")), PathBuf::from("./main"));
        assert_eq!(runnable_path(Path::new("/tmp/main")), PathBuf::from("/tmp/main"));
    }

    #[test]
    fn test_command_line() {
        let invocation = Invocation::new("g++")
            .arg("-O3")
            .arg("main.cpp")
            .arg("-o")
            .arg("main");
        assert_eq!(invocation.command_line(), "g++ -O3 main.cpp -o main");
    }

    #[test]
    fn test_process_exit_success() {
        assert!(ProcessExit { code: Some(0) }.success());
        assert!(!ProcessExit { code: Some(2) }.success());
        assert!(!ProcessExit { code: None }.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_invoker_redirects_stdin_and_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        std::fs::write(&input, "3\n1 2 3\n").unwrap();
        std::fs::write(&output, "stale content from a previous case\n").unwrap();

        let invocation = Invocation::new("sh")
            .arg("-c")
            .arg("cat")
            .stdin_from(&input)
            .stdout_to(&output);

        let exit = LocalInvoker.invoke(&invocation).await.unwrap();

        assert!(exit.success());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "3\n1 2 3\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_invoker_reports_exit_code() {
        let invocation = Invocation::new("sh").arg("-c").arg("exit 3");

        let exit = LocalInvoker.invoke(&invocation).await.unwrap();

        assert_eq!(exit.code, Some(3));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_local_invoker_signal_has_no_exit_code() {
        let invocation = Invocation::new("sh").arg("-c").arg("kill -9 $$");

        let exit = LocalInvoker.invoke(&invocation).await.unwrap();

        assert_eq!(exit.code, None);
        assert!(!exit.success());
    }

    #[tokio::test]
    async fn test_local_invoker_missing_program_is_error() {
        let invocation = Invocation::new("./definitely-not-a-built-program");

        let result = LocalInvoker.invoke(&invocation).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_local_invoker_missing_stdin_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let invocation = Invocation::new("sh").stdin_from(dir.path().join("absent.txt"));

        let err = LocalInvoker.invoke(&invocation).await.unwrap_err();

        assert!(err.to_string().contains("Failed to open input file"));
    }
}
