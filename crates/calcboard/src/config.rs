//! YAML configuration
//!
//! ```yaml
//! locale: de-DE
//! group_separator: "'"
//! grouping: thousands
//! mouse: true
//! show_help: true
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use crate::display::{Grouping, NumberFormat};
use crate::error::{CalcboardError, CalcboardResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "calcboard.yaml";

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalcConfig {
    /// Locale used for digit grouping; the environment decides when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Overrides the locale's group separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_separator: Option<String>,
    /// Overrides the locale's grouping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Grouping>,
    /// Capture the mouse so keypad buttons can be clicked
    pub mouse: bool,
    /// Show the key help row under the keypad
    pub show_help: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            locale: None,
            group_separator: None,
            grouping: None,
            mouse: true,
            show_help: true,
        }
    }
}

impl CalcConfig {
    /// Parses configuration from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`CalcboardError::Yaml`] for malformed YAML or unknown keys.
    pub fn from_yaml_str(yaml: &str) -> CalcboardResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serializes the configuration to YAML
    ///
    /// # Errors
    ///
    /// Returns [`CalcboardError::Yaml`] if serialization fails.
    pub fn to_yaml(&self) -> CalcboardResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Loads configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> CalcboardResult<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| CalcboardError::io(path, e))?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Writes the configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> CalcboardResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|e| CalcboardError::io(path, e))
    }

    /// Finds and loads the configuration.
    ///
    /// An explicit path must exist. Otherwise [`DEFAULT_CONFIG_FILE`] in `dir`
    /// is used when present, and defaults when not.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> CalcboardResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            tracing::debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the locale
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Resolves the number format.
    ///
    /// Explicit `group_separator`/`grouping` win over the configured locale,
    /// which wins over the environment locale; `en-US` is the fallback.
    #[must_use]
    pub fn number_format(&self) -> NumberFormat {
        self.resolve_number_format(NumberFormat::from_env)
    }

    fn resolve_number_format(&self, from_env: impl FnOnce() -> Option<NumberFormat>) -> NumberFormat {
        let mut format = match &self.locale {
            Some(tag) => NumberFormat::for_locale(tag),
            None => from_env().unwrap_or_else(NumberFormat::en_us),
        };
        if let Some(separator) = &self.group_separator {
            format.separator.clone_from(separator);
        }
        if let Some(grouping) = self.grouping {
            format.grouping = grouping;
        }
        format
    }
}
