use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CgError, Result};

/// File name of the configuration, resolved against the base directory.
pub const CONFIG_FILE_NAME: &str = "cg.config.json";

/// Parsed contents of `cg.config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory that receives generated components, relative to the base directory.
    #[serde(rename = "COMPONENTS_DIR")]
    pub components_dir: String,

    /// Directory holding the template files, relative to the base directory.
    #[serde(rename = "TEMPLATE_DIR")]
    pub template_dir: String,

    /// Token replaced by the component name in file names and contents.
    #[serde(rename = "COMPONENT_NAME_PLACEHOLDER")]
    pub placeholder: String,
}

impl Config {
    /// The example configuration shown in error messages and written by `cg init`.
    #[must_use]
    pub fn sample() -> Self {
        Config {
            components_dir: "./src/components".to_string(),
            template_dir: "./template".to_string(),
            placeholder: "COMPONENT_NAME".to_string(),
        }
    }

    /// Render as pretty-printed JSON with a trailing newline.
    pub fn to_pretty_json(&self) -> String {
        // Three string fields cannot fail to serialize.
        let mut json = serde_json::to_string_pretty(self).unwrap_or_default();
        json.push('\n');
        json
    }
}

/// Path of the configuration file inside `base_dir`.
#[must_use]
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE_NAME)
}

/// Load `cg.config.json` from `base_dir`.
pub fn load_config(base_dir: &Path) -> Result<Config> {
    load_config_from(&config_path(base_dir))
}

/// Load a configuration from an explicit file path.
///
/// A missing file is `ConfigMissing`; anything that does not parse into the
/// three string fields (bad JSON, missing key, wrong type) is `ConfigInvalid`.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CgError::ConfigMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(CgError::ConfigInvalid {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };
    serde_json::from_str(&content).map_err(|e| CgError::ConfigInvalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Help text describing the expected configuration shape.
pub(crate) fn remediation() -> String {
    format!(
        "Create {CONFIG_FILE_NAME} in the project root (or run `cg init`) with the following shape:\n{}",
        Config::sample().to_pretty_json().trim_end()
    )
}

/// Write the sample configuration into `dir`, creating the directory if needed.
///
/// Returns `AlreadyExists` if a configuration is already present and `force`
/// is not set.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let path = config_path(dir);
    if path.exists() && !force {
        return Err(CgError::AlreadyExists { path });
    }
    std::fs::create_dir_all(dir).map_err(|source| CgError::Write {
        path: dir.to_path_buf(),
        source,
    })?;
    let content = Config::sample().to_pretty_json();
    std::fs::write(&path, content).map_err(|source| CgError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{"COMPONENTS_DIR":"./src/components","TEMPLATE_DIR":"./template","COMPONENT_NAME_PLACEHOLDER":"COMPONENT_NAME"}"#;

    #[test]
    fn load_valid_config() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), SAMPLE).unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config, Config::sample());
    }

    #[test]
    fn load_ignores_unknown_keys() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"COMPONENTS_DIR":"c","TEMPLATE_DIR":"t","COMPONENT_NAME_PLACEHOLDER":"X","EXTRA":1}"#,
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.components_dir, "c");
        assert_eq!(config.template_dir, "t");
        assert_eq!(config.placeholder, "X");
    }

    #[test]
    fn missing_config_is_config_missing() {
        let dir = tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, CgError::ConfigMissing { .. }), "got {err:?}");
    }

    #[test]
    fn missing_config_message_shows_expected_shape() {
        let dir = tempdir().unwrap();
        let msg = load_config(dir.path()).unwrap_err().to_string();
        assert!(msg.contains(CONFIG_FILE_NAME));
        assert!(msg.contains("\"COMPONENTS_DIR\""));
        assert!(msg.contains("\"TEMPLATE_DIR\""));
        assert!(msg.contains("\"COMPONENT_NAME_PLACEHOLDER\""));
    }

    #[test]
    fn malformed_json_is_config_invalid() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        let err = load_config(dir.path()).unwrap_err();
        match err {
            CgError::ConfigInvalid { message, .. } => assert!(!message.is_empty()),
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_config_invalid() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"COMPONENTS_DIR":"c","TEMPLATE_DIR":"t"}"#,
        )
        .unwrap();
        let msg = load_config(dir.path()).unwrap_err().to_string();
        assert!(msg.contains("COMPONENT_NAME_PLACEHOLDER"), "got: {msg}");
    }

    #[test]
    fn non_string_field_is_config_invalid() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{"COMPONENTS_DIR":1,"TEMPLATE_DIR":"t","COMPONENT_NAME_PLACEHOLDER":"X"}"#,
        )
        .unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, CgError::ConfigInvalid { .. }));
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.json");
        fs::write(&path, SAMPLE).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), Config::sample());
    }

    #[test]
    fn sample_json_round_trips() {
        let json = Config::sample().to_pretty_json();
        assert!(json.ends_with('\n'));
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Config::sample());
    }

    #[test]
    fn init_writes_sample_config() {
        let dir = tempdir().unwrap();
        let path = init_config(dir.path(), false).unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(load_config(dir.path()).unwrap(), Config::sample());
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();
        let err = init_config(dir.path(), false).unwrap_err();
        assert!(matches!(err, CgError::AlreadyExists { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILE_NAME)).unwrap(),
            "{}"
        );
    }

    #[test]
    fn init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{}").unwrap();
        init_config(dir.path(), true).unwrap();
        assert_eq!(load_config(dir.path()).unwrap(), Config::sample());
    }
}
