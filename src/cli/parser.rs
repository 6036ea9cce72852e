use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
/// CLI application to track event attendance with SQLite
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: register participants, scan check-in tokens and log attendance using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Manage the database (integrity checks, vacuum)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },

    /// Manage participants
    Participant {
        #[command(subcommand)]
        action: ParticipantAction,
    },

    /// Register a participant to an event and print the check-in token
    Register {
        #[arg(long, help = "Event id")]
        event: i64,

        #[arg(long, help = "Participant id")]
        participant: i64,
    },

    /// Check in a scanned token: classify the scan and log it
    Checkin {
        /// Raw scanned token
        token: String,

        #[arg(long = "device", help = "Label of the scanning device")]
        device: Option<String>,

        #[arg(long = "operator", help = "Staff operator handling the scan")]
        operator: Option<String>,

        #[arg(
            long = "at",
            help = "Scan instant (YYYY-MM-DD HH:MM[:SS]); defaults to the current time"
        )]
        at: Option<String>,

        #[arg(long = "json", help = "Emit the result as a JSON payload")]
        json: bool,
    },

    /// List the attendance log of one event, or of all events
    List {
        #[arg(long, help = "Event id")]
        event: Option<i64>,

        #[arg(
            long,
            help = "List attendance for every event",
            conflicts_with = "event"
        )]
        all: bool,
    },

    /// Export attendance data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Restrict the export to one event id")]
        event: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}

#[derive(Subcommand)]
pub enum EventAction {
    /// Create an event
    Add {
        /// Event title
        title: String,

        #[arg(long = "start", help = "Scheduled start (YYYY-MM-DD HH:MM[:SS])")]
        start: String,

        #[arg(
            long = "late-threshold",
            help = "Minutes after start before a scan counts as late"
        )]
        late_threshold: Option<i64>,
    },

    /// List events
    List,
}

#[derive(Subcommand)]
pub enum ParticipantAction {
    /// Create a participant
    Add {
        /// Participant name
        name: String,

        #[arg(long = "code", help = "Optional student/member code (unique)")]
        code: Option<String>,
    },

    /// List participants
    List,
}
