use clap::{Parser, Subcommand};

/// Command-line interface definition for rInterviews
#[derive(Parser)]
#[command(
    name = "rinterviews",
    version = env!("CARGO_PKG_VERSION"),
    about = "Schedule interviews, catch double bookings and get notified by email",
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
    Init {
        /// Recipient address for scheduling notifications
        #[arg(long = "email", value_name = "ADDRESS")]
        email: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or set the notification recipient email
    Email {
        #[arg(long = "set", value_name = "ADDRESS", help = "Set the recipient email")]
        set: Option<String>,
    },

    /// Schedule a new interview
    Add {
        /// Candidate name
        #[arg(long, short = 'c')]
        candidate: Option<String>,

        /// Interviewer name
        #[arg(long, short = 'i')]
        interviewer: Option<String>,

        /// Date of the interview (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(long, short = 's')]
        start: Option<String>,

        /// End time (HH:MM). Defaults to start + 10 minutes
        #[arg(long, short = 'e')]
        end: Option<String>,

        /// Interview type: Technical, HR, Behavioral
        #[arg(long = "type", short = 't')]
        kind: Option<String>,

        /// Do not send the notification email
        #[arg(long = "no-email")]
        no_email: bool,
    },

    /// Edit an existing interview (only the given fields change)
    Edit {
        /// Interview id
        id: String,

        #[arg(long, short = 'c')]
        candidate: Option<String>,

        #[arg(long, short = 'i')]
        interviewer: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(long, short = 's')]
        start: Option<String>,

        /// New end time (HH:MM)
        #[arg(long, short = 'e')]
        end: Option<String>,

        /// New interview type
        #[arg(long = "type", short = 't')]
        kind: Option<String>,
    },

    /// Move an interview to another date/start, keeping its duration
    Move {
        /// Interview id
        id: String,

        /// Target date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: String,

        /// Target start time (HH:MM)
        #[arg(long, short = 's')]
        start: String,
    },

    /// Delete an interview by id
    Del {
        /// Interview id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List interviews
    List {
        /// Only this date (YYYY-MM-DD)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Candidate name contains (case-insensitive)
        #[arg(long, short = 'c')]
        candidate: Option<String>,

        /// Interviewer name contains (case-insensitive)
        #[arg(long, short = 'i')]
        interviewer: Option<String>,

        /// Print the matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show interviews starting soon
    Notify {
        /// Window in minutes (default from config: 120)
        #[arg(long, value_name = "MINUTES")]
        window: Option<i64>,
    },

    /// Show the default end time and the end times offered for a start time
    Slots {
        /// Start time (HH:MM)
        start: String,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
