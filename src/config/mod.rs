pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "conference-planner")]
#[command(about = "A console roster manager for a single conference")]
pub struct CliConfig {
    /// TOML settings file. Command-line settings are ignored when given.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, default_value = "Conference & Event Planner")]
    pub name: String,

    /// Roster file to load before the menu starts.
    #[arg(long)]
    pub roster: Option<String>,

    #[arg(long, default_value = "legacy", help = "On-disk roster format: legacy or csv")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn conference_name(&self) -> &str {
        &self.name
    }

    fn default_roster_path(&self) -> Option<&str> {
        self.roster.as_deref()
    }

    fn roster_format(&self) -> &str {
        &self.format
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;
        validation::validate_format_name("format", &self.format)?;

        if let Some(path) = &self.roster {
            validation::validate_path("roster", path)?;
        }

        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }

        Ok(())
    }
}
