use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Show the active configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Config { print_config: true }) {
        let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
        println!("{yaml}");
    }

    Ok(())
}
