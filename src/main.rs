use std::path::Path;

use clap::Parser;
use conference_planner::domain::ports::ConfigProvider;
use conference_planner::utils::{logger, validation::Validate};
use conference_planner::{
    CliConfig, LocalStorage, MenuSession, Result, Roster, RosterFormat, StdConsole, TomlConfig,
};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting conference-planner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let result = match config.config.clone() {
        Some(path) => load_settings(&path).and_then(run_session),
        None => run_session(config),
    };

    match result {
        Ok(()) => {
            tracing::info!("Session ended");
        }
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn load_settings(path: &str) -> Result<TomlConfig> {
    let settings = TomlConfig::from_file(path)?;
    settings.validate()?;
    Ok(settings)
}

fn run_session<P: ConfigProvider>(config: P) -> Result<()> {
    let storage = LocalStorage::new();
    let format: RosterFormat = config.roster_format().parse()?;

    let roster = match config.default_roster_path() {
        Some(path) => {
            tracing::info!("Loading roster from {}", path);
            Roster::load(&storage, Path::new(path), format)?
        }
        None => Roster::new(),
    };

    let mut session = MenuSession::with_roster(StdConsole::new(), storage, config, roster);
    session.run()
}
