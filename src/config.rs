use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".testportrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing the origin Python dialect tests.
    #[serde(default = "default_origin_root")]
    pub origin_root: String,

    /// Directory receiving the generated TypeScript test files.
    #[serde(default = "default_out_root")]
    pub out_root: String,

    /// Origin filenames (exact or glob patterns) to skip entirely.
    /// These are test files that are not dialect-specific.
    #[serde(default = "default_skip_files")]
    pub skip_files: Vec<String>,

    /// Destination filenames that must never be regenerated.
    /// These are hand-maintained test files.
    #[serde(default = "default_protected_files")]
    pub protected_files: Vec<String>,

    /// Module specifier for the `transpile` import in generated files.
    #[serde(default = "default_transpile_import")]
    pub transpile_import: String,
}

fn default_origin_root() -> String {
    "../tests/dialects".to_string()
}

fn default_out_root() -> String {
    "tests/dialects".to_string()
}

fn default_skip_files() -> Vec<String> {
    ["test_dialect.py", "test_pipe_syntax.py"]
        .map(String::from)
        .to_vec()
}

fn default_protected_files() -> Vec<String> {
    [
        "test_mysql_to_postgres.test.ts",
        "test_playground_e2e.test.ts",
        "test_advanced_transpile.test.ts",
    ]
    .map(String::from)
    .to_vec()
}

fn default_transpile_import() -> String {
    "../../src/index.js".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin_root: default_origin_root(),
            out_root: default_out_root(),
            skip_files: default_skip_files(),
            protected_files: default_protected_files(),
            transpile_import: default_transpile_import(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `skipFiles` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.skip_files {
            if pattern.contains(['*', '?', '[']) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'skipFiles': \"{}\"", pattern)
                })?;
            }
        }
        Ok(())
    }

    /// Should this origin filename be skipped entirely?
    pub fn is_skipped(&self, file_name: &str) -> bool {
        self.skip_files.iter().any(|entry| {
            entry == file_name
                || (entry.contains(['*', '?', '['])
                    && Pattern::new(entry).is_ok_and(|p| p.matches(file_name)))
        })
    }

    /// Is this destination filename hand-maintained and off-limits?
    pub fn is_protected(&self, file_name: &str) -> bool {
        self.protected_files.iter().any(|entry| entry == file_name)
    }
}

/// Load configuration from `path`, or from `.testportrc.json` in the
/// working directory. A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILE_NAME));
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// The default configuration as pretty-printed JSON, for `init`.
pub fn default_config_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&Config::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_known_special_files() {
        let config = Config::default();
        assert!(config.is_skipped("test_dialect.py"));
        assert!(config.is_skipped("test_pipe_syntax.py"));
        assert!(!config.is_skipped("test_mysql.py"));
        assert!(config.is_protected("test_playground_e2e.test.ts"));
        assert!(!config.is_protected("test_mysql.test.ts"));
    }

    #[test]
    fn skip_entries_may_be_globs() {
        let config = Config {
            skip_files: vec!["test_wip_*.py".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_ok());
        assert!(config.is_skipped("test_wip_mysql.py"));
        assert!(!config.is_skipped("test_mysql.py"));
    }

    #[test]
    fn invalid_glob_patterns_are_rejected() {
        let config = Config {
            skip_files: vec!["test_[".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config.origin_root, Config::default().origin_root);
        assert_eq!(config.protected_files, Config::default().protected_files);
    }

    #[test]
    fn partial_config_files_fill_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"originRoot": "py/tests"}"#).unwrap();
        assert_eq!(config.origin_root, "py/tests");
        assert_eq!(config.out_root, default_out_root());
        assert_eq!(config.skip_files, default_skip_files());
    }
}
