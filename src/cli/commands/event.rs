use crate::cli::parser::{Commands, EventAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_event, list_events};
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::ui::messages::{header, success};
use crate::utils::time::parse_required_timestamp;

/// Create or list events.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            EventAction::Add {
                title,
                start,
                late_threshold,
            } => {
                let start_at = parse_required_timestamp(start)?;
                let threshold =
                    late_threshold.unwrap_or(cfg.default_late_threshold_minutes);

                let ev = Event::new(0, title, start_at, threshold);
                let id = insert_event(&pool.conn, &ev)?;

                audit(
                    &pool.conn,
                    "event_add",
                    &id.to_string(),
                    &format!("Created event '{}' starting {}", title, ev.start_at_str()),
                )?;

                success(format!("Created event {id}: {title}"));
            }

            EventAction::List => {
                header("Events");
                for ev in list_events(&pool.conn)? {
                    println!(
                        "{:>4}  {}  (late after {} min)  {}",
                        ev.id,
                        ev.start_at_str(),
                        ev.late_threshold_minutes,
                        ev.title
                    );
                }
            }
        }
    }

    Ok(())
}
