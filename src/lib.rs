pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::console::StdConsole;
pub use crate::app::menu::MenuSession;
pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::format::RosterFormat;
pub use crate::core::roster::Roster;
pub use crate::domain::model::Participant;
pub use crate::utils::error::{Result, RosterError};
