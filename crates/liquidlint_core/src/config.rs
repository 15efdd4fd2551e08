//! Linter configuration.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use liquidlint_engine::EngineOptions;
use serde::{Deserialize, Serialize};

use crate::LinterError;

const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// External linter invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Program run once per file.
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments placed before the custom block/tag options.
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_command() -> String {
    "liquid-linter".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

/// Configuration for a lint run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinterConfig {
    #[serde(default)]
    pub engine: EngineConfig,

    /// Extra block tag names known to the engine.
    #[serde(default)]
    pub custom_blocks: Vec<String>,

    /// Extra tag names known to the engine.
    #[serde(default)]
    pub custom_tags: Vec<String>,

    /// Maximum dispatches in flight. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,

    /// Directory containing the configuration file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl LinterConfig {
    /// Config file names looked up in a directory, in priority order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".liquidlint.jsonc", ".liquidlint.json"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the first config file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let mut config = Self::from_json(&content)?;

        if let Some(parent) = path.parent() {
            config.base_dir = Some(parent.to_path_buf());
        }

        Ok(config)
    }

    /// Parses configuration from JSONC with schema validation.
    ///
    /// An empty document yields the defaults.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            return Err(LinterError::config(format!(
                "Config validation failed: {} at {}",
                e,
                e.instance_path()
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))
    }

    /// Options forwarded to the engine on every dispatch.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            custom_blocks: self.custom_blocks.clone(),
            custom_tags: self.custom_tags.clone(),
        }
    }

    /// The engine program to run.
    ///
    /// A relative command with a path separator resolves against the config
    /// file's directory; a bare name is left for `PATH` lookup.
    pub fn engine_command(&self) -> OsString {
        let command = Path::new(&self.engine.command);
        match &self.base_dir {
            Some(base) if command.is_relative() && command.components().count() > 1 => {
                base.join(command).into_os_string()
            }
            _ => command.as_os_str().to_os_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = LinterConfig::new();
        assert_eq!(config.engine.command, "liquid-linter");
        assert!(config.engine.args.is_empty());
        assert!(config.custom_blocks.is_empty());
        assert!(config.custom_tags.is_empty());
        assert_eq!(config.jobs, None);
    }

    #[test]
    fn test_config_from_jsonc() {
        let json = r#"{
            // engine installed next to the theme
            "engine": { "command": "./bin/liquid-lint", "args": ["--strict"] },
            "custom_blocks": ["schema"],
            "custom_tags": ["render", "section"],
            "jobs": 4,
        }"#;

        let config = LinterConfig::from_json(json).unwrap();
        assert_eq!(config.engine.command, "./bin/liquid-lint");
        assert_eq!(config.engine.args, vec!["--strict"]);
        assert_eq!(config.custom_blocks, vec!["schema"]);
        assert_eq!(config.custom_tags, vec!["render", "section"]);
        assert_eq!(config.jobs, Some(4));
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(LinterConfig::from_json("").unwrap(), LinterConfig::default());
        assert_eq!(LinterConfig::from_json("{}").unwrap(), LinterConfig::default());
    }

    #[test]
    fn test_engine_options() {
        let config = LinterConfig::from_json(r#"{ "custom_blocks": ["a"], "custom_tags": ["b"] }"#)
            .unwrap();
        let options = config.engine_options();
        assert_eq!(options.custom_blocks, vec!["a"]);
        assert_eq!(options.custom_tags, vec!["b"]);
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let temp_dir = tempdir().unwrap();
        assert_eq!(LinterConfig::discover(temp_dir.path()), None);

        fs::write(temp_dir.path().join(".liquidlint.json"), "{}").unwrap();
        assert_eq!(
            LinterConfig::discover(temp_dir.path()),
            Some(temp_dir.path().join(".liquidlint.json"))
        );

        fs::write(temp_dir.path().join(".liquidlint.jsonc"), "{}").unwrap();
        assert_eq!(
            LinterConfig::discover(temp_dir.path()),
            Some(temp_dir.path().join(".liquidlint.jsonc"))
        );
    }

    #[test]
    fn test_from_file_sets_base_dir() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join(".liquidlint.jsonc");
        fs::write(&path, r#"{ "engine": { "command": "tools/lint.sh" } }"#).unwrap();

        let config = LinterConfig::from_file(&path).unwrap();
        assert_eq!(config.base_dir.as_deref(), Some(temp_dir.path()));
        assert_eq!(
            config.engine_command(),
            temp_dir.path().join("tools/lint.sh").into_os_string()
        );
    }

    #[test]
    fn test_bare_command_is_not_rebased() {
        let config = LinterConfig {
            base_dir: Some(PathBuf::from("/themes/dawn")),
            ..LinterConfig::default()
        };
        assert_eq!(config.engine_command(), OsString::from("liquid-linter"));
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = tempdir().unwrap();
        let err = LinterConfig::from_file(temp_dir.path().join("nope.jsonc")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[rstest]
    #[case::unknown_property(r#"{ "extensions": ["txt"] }"#, "Config validation failed")]
    #[case::type_mismatch(r#"{ "custom_tags": "render" }"#, "Config validation failed")]
    #[case::zero_jobs(r#"{ "jobs": 0 }"#, "Config validation failed")]
    #[case::empty_command(r#"{ "engine": { "command": "" } }"#, "Config validation failed")]
    #[case::malformed(r#"{ "jobs": "#, "Invalid JSON")]
    fn test_config_validation_errors(#[case] json: &str, #[case] expected_error_part: &str) {
        let result = LinterConfig::from_json(json);
        assert!(result.is_err(), "Expected error for JSON: {}", json);
        let err = result.unwrap_err();
        assert!(
            err.to_string().contains(expected_error_part),
            "Error message '{}' should contain '{}'",
            err,
            expected_error_part
        );
    }
}
