use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Export the attendance log to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        event,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if ExportLogic::export(&mut pool, *format, file, *event, *force)? {
            success(format!("Exported attendance to {file}"));
        }
    }

    Ok(())
}
