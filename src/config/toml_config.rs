use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub conference: ConferenceConfig,
    pub storage: Option<StorageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConferenceConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Roster file to load before the menu starts.
    pub roster_path: Option<String>,
    /// On-disk roster format: "legacy" (default) or "csv".
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment variable values.
    /// Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn conference_name(&self) -> &str {
        &self.conference.name
    }

    fn default_roster_path(&self) -> Option<&str> {
        self.storage.as_ref().and_then(|s| s.roster_path.as_deref())
    }

    fn roster_format(&self) -> &str {
        self.storage
            .as_ref()
            .and_then(|s| s.format.as_deref())
            .unwrap_or("legacy")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("conference.name", &self.conference.name)?;

        if let Some(storage) = &self.storage {
            if let Some(path) = &storage.roster_path {
                validation::validate_path("storage.roster_path", path)?;
            }
            if let Some(format) = &storage.format {
                validation::validate_format_name("storage.format", format)?;
            }
        }

        Ok(())
    }
}
