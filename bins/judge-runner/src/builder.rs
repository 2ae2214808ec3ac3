// Compile step: turns the source file into the executable every case runs
use crate::engine::{Invocation, ProcessInvoker};
use crate::error::HarnessError;
use judge_common::config::HarnessConfig;
use std::time::Instant;
use tracing::{info, instrument, warn};

/// `{compiler} {flags...} {source} -o {executable}`
pub fn compile_invocation(config: &HarnessConfig) -> Invocation {
    let mut invocation = Invocation::new(&config.compiler);
    for flag in &config.compiler_flags {
        invocation = invocation.arg(flag);
    }
    invocation
        .arg(&config.source_path)
        .arg("-o")
        .arg(&config.executable_path)
}

/// Build the executable. Any failure here is fatal for the run.
#[instrument(skip_all, fields(source = %config.source_path.display()))]
pub async fn compile<I: ProcessInvoker>(
    invoker: &I,
    config: &HarnessConfig,
) -> Result<(), HarnessError> {
    let invocation = compile_invocation(config);
    let command = invocation.command_line();

    println!("Compiling: {}", command);

    let start = Instant::now();
    let exit = invoker
        .invoke(&invocation)
        .await
        .map_err(|e| HarnessError::CompilerSpawn {
            command: command.clone(),
            detail: format!("{:#}", e),
        })?;
    let compilation_time_ms = start.elapsed().as_millis() as u64;

    if !exit.success() {
        warn!(
            exit_code = ?exit.code,
            compilation_time_ms = compilation_time_ms,
            "Compilation failed"
        );
        return Err(HarnessError::Compile {
            command,
            exit_code: exit.code,
        });
    }

    info!(
        compilation_time_ms = compilation_time_ms,
        executable = %config.executable_path.display(),
        "Compilation succeeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_compile_command() {
        let invocation = compile_invocation(&HarnessConfig::default());
        assert_eq!(invocation.program, PathBuf::from("g++"));
        assert_eq!(invocation.command_line(), "g++ -O3 main.cpp -o main");
        assert!(invocation.stdin.is_none());
        assert!(invocation.stdout.is_none());
    }

    #[test]
    fn test_compile_command_uses_config() {
        let config = HarnessConfig {
            source_path: PathBuf::from("solutions/tp2.cpp"),
            executable_path: PathBuf::from("build/tp2"),
            compiler: "clang++".to_string(),
            compiler_flags: vec!["-O2".to_string(), "-std=c++17".to_string()],
            ..HarnessConfig::default()
        };

        assert_eq!(
            compile_invocation(&config).command_line(),
            "clang++ -O2 -std=c++17 solutions/tp2.cpp -o build/tp2"
        );
    }
}
