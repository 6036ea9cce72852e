use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

/// Copy the database to a backup file, optionally compressed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        BackupLogic::backup(cfg, file, *compress)?;
    }

    Ok(())
}
