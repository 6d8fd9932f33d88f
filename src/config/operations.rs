//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{Result, ScaffoldError};
use crate::schema::provider_key;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// HCL identifier accepted as an instance label.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("identifier pattern is valid")
});

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScaffoldError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Otherwise `tfscaffold.yaml` in `dir` is
    /// used when present, and defaults when it is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            return Self::load(&candidate);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ScaffoldError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `provider` and `provider_source` must be non-empty
    /// - `provider` must not contain `/`
    /// - `instance_label` must be an HCL identifier
    pub fn validate(&self) -> Result<()> {
        if self.provider.trim().is_empty() {
            return Err(ScaffoldError::UserError(
                "config validation failed: provider must not be empty".to_string(),
            ));
        }

        if self.provider.contains('/') {
            return Err(ScaffoldError::UserError(format!(
                "config validation failed: provider must be a bare name (found '{}'). \
                 Put the registry namespace in provider_source instead.",
                self.provider
            )));
        }

        if self.provider_source.trim().is_empty() {
            return Err(ScaffoldError::UserError(
                "config validation failed: provider_source must not be empty".to_string(),
            ));
        }

        if !IDENTIFIER.is_match(&self.instance_label) {
            return Err(ScaffoldError::UserError(format!(
                "config validation failed: instance_label '{}' is not a valid identifier",
                self.instance_label
            )));
        }

        Ok(())
    }

    /// The `provider_schemas` key for the configured provider.
    pub fn provider_key(&self) -> String {
        provider_key(&self.provider_source, &self.provider)
    }
}
