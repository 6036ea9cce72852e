use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

/// Database maintenance: integrity check and vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, vacuum } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if result == "ok" {
                success("Database integrity: ok");
            } else {
                return Err(AppError::Other(format!(
                    "Database integrity check failed: {result}"
                )));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized (VACUUM).");
        }
    }

    Ok(())
}
