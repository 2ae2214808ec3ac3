// Configuration loading for the judge runner: defaults < JSON file < CLI flags
use anyhow::{bail, Context, Result};
use judge_common::config::HarnessConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Values given on the command line; `None` keeps the lower layer's value
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub source_path: Option<PathBuf>,
    pub judge_dir: Option<PathBuf>,
    pub max_case_index: Option<u32>,
    pub output_path: Option<PathBuf>,
    pub executable_path: Option<PathBuf>,
    pub compiler: Option<String>,
    /// Replaces the configured flags entirely when non-empty
    pub compiler_flags: Vec<String>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut HarnessConfig) {
        if let Some(source_path) = self.source_path {
            config.source_path = source_path;
        }
        if let Some(judge_dir) = self.judge_dir {
            config.judge_dir = judge_dir;
        }
        if let Some(max_case_index) = self.max_case_index {
            config.max_case_index = max_case_index;
        }
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }
        if let Some(executable_path) = self.executable_path {
            config.executable_path = executable_path;
        }
        if let Some(compiler) = self.compiler {
            config.compiler = compiler;
        }
        if !self.compiler_flags.is_empty() {
            config.compiler_flags = self.compiler_flags;
        }
    }
}

/// Load a harness configuration from a JSON file
pub fn load(config_path: &Path) -> Result<HarnessConfig> {
    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}

/// Build the effective configuration for a run
pub fn resolve(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<HarnessConfig> {
    let mut config = match config_path {
        Some(path) => load(path)?,
        None => HarnessConfig::default(),
    };

    overrides.apply(&mut config);

    if config.compiler.trim().is_empty() {
        bail!("Compiler command cannot be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = resolve(None, ConfigOverrides::default()).unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn test_file_values_then_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.json");
        fs::write(
            &path,
            r#"{ "judge_dir": "cases", "max_case_index": 20, "compiler": "clang++" }"#,
        )
        .unwrap();

        let overrides = ConfigOverrides {
            source_path: Some(PathBuf::from("tp2.cpp")),
            max_case_index: Some(5),
            compiler_flags: vec!["-O2".to_string()],
            ..ConfigOverrides::default()
        };

        let config = resolve(Some(&path), overrides).unwrap();

        assert_eq!(config.source_path, PathBuf::from("tp2.cpp"));
        assert_eq!(config.judge_dir, PathBuf::from("cases"));
        assert_eq!(config.max_case_index, 5);
        assert_eq!(config.compiler, "clang++");
        assert_eq!(config.compiler_flags, vec!["-O2".to_string()]);
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_malformed_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.json");
        fs::write(&path, "{ judge_dir: ").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_empty_compiler_rejected() {
        let overrides = ConfigOverrides {
            compiler: Some("  ".to_string()),
            ..ConfigOverrides::default()
        };
        assert!(resolve(None, overrides).is_err());
    }
}
