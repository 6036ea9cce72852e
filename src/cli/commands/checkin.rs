use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::{CheckInFailure, CheckInProcessor, Clock, SystemClock};
use crate::db::pool::DbPool;
use crate::db::repository::SqliteAttendeeRepository;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_required_timestamp;

/// Process one scanned token: classify, log, transition on first scan.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Checkin {
        token,
        device,
        operator,
        at,
        json,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let repo = SqliteAttendeeRepository::new(&pool.conn);
        let processor = CheckInProcessor::new(&repo);

        // `--at` pins the scan instant for scripted scans; otherwise the
        // wall clock decides.
        let now = match at {
            Some(ts) => parse_required_timestamp(ts)?,
            None => SystemClock.now(),
        };

        let device_label = device
            .as_deref()
            .or(cfg.default_device_label.as_deref());

        let outcome = processor.process(token, device_label, operator.as_deref(), now);

        match outcome {
            Ok(result) => {
                if *json {
                    println!("{}", serde_json::to_string(&result)?);
                } else {
                    success(format!(
                        "{} — {} ({})",
                        result.event_title,
                        result.participant_name,
                        result.status.label()
                    ));
                    if result.is_first {
                        info(format!("First check-in at {}", result.checked_at));
                    } else {
                        info("Already checked in, scan logged");
                    }
                }
            }
            Err(e) => {
                if *json {
                    println!("{}", serde_json::to_string(&CheckInFailure::from_error(&e))?);
                }
                return Err(e);
            }
        }
    }

    Ok(())
}
