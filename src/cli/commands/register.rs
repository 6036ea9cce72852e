use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::RegisterLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Register a participant to an event and print the check-in token.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register { event, participant } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let (attendee, created) = RegisterLogic::apply(&pool.conn, *event, *participant)?;

        if created {
            success(format!(
                "Registered participant {} to event {}",
                participant, event
            ));
        } else {
            info("Already registered, returning the existing token");
        }

        // Token on its own line so scripts can capture it.
        println!("{}", attendee.qr_token);
    }

    Ok(())
}
