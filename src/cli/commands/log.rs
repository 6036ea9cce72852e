use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Print the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_audit(&pool.conn)?;

        header("Audit log");
        for (date, operation, message) in rows {
            println!("{date}  [{operation}]  {message}");
        }
    }

    Ok(())
}
