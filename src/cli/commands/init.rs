use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the configuration file and an empty database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let pool = DbPool::new(&db_path.to_string_lossy())?;
    init_db(&pool.conn)?;

    success(format!("Initialized database: {}", db_path.display()));
    Ok(())
}
