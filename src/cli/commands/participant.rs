use crate::cli::parser::{Commands, ParticipantAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_participant, list_participants};
use crate::errors::AppResult;
use crate::models::participant::Participant;
use crate::ui::messages::{header, success};

/// Create or list participants.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Participant { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            ParticipantAction::Add { name, code } => {
                let p = Participant::new(0, name, code.clone());
                let id = insert_participant(&pool.conn, &p)?;

                audit(
                    &pool.conn,
                    "participant_add",
                    &id.to_string(),
                    &format!("Created participant '{}'", p.display_name()),
                )?;

                success(format!("Created participant {id}: {}", p.display_name()));
            }

            ParticipantAction::List => {
                header("Participants");
                for p in list_participants(&pool.conn)? {
                    println!(
                        "{:>4}  {}  {}",
                        p.id,
                        p.display_name(),
                        p.student_id.as_deref().unwrap_or("-")
                    );
                }
            }
        }
    }

    Ok(())
}
