use clap::{Parser, Subcommand};

/// Command-line interface definition for punchlog
/// CLI application to track employee attendance with SQLite
#[derive(Parser)]
#[command(
    name = "punchlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record check-in/check-out punches and review daily summaries with lateness deductions",
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

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity and event records")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a check-in or check-out punch
    Punch {
        /// Punch kind: `in` or `out`
        kind: String,

        /// Date of the punch (YYYY-MM-DD, default: today)
        #[arg(long = "date", help = "Date of the punch (YYYY-MM-DD, default: today)")]
        date: Option<String>,

        /// Time of the punch (HH:MM, default: now)
        #[arg(long = "at", help = "Time of the punch (HH:MM, default: now)")]
        at: Option<String>,

        /// Employee id (default: the one configured)
        #[arg(
            long = "employee",
            short = 'e',
            help = "Employee id (default: the one configured)"
        )]
        employee: Option<String>,
    },

    /// Delete punches for a date
    Del {
        /// Date (YYYY-MM-DD) whose punches should be deleted
        date: String,

        #[arg(long = "id", help = "Delete only the event with this id")]
        id: Option<i64>,

        #[arg(
            long = "employee",
            short = 'e',
            help = "Employee id (default: the one configured)"
        )]
        employee: Option<String>,
    },

    /// List daily attendance summaries
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or A:B)"
        )]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's summary")]
        now: bool,

        #[arg(
            long = "employee",
            short = 'e',
            help = "Employee id (default: the one configured)"
        )]
        employee: Option<String>,

        #[arg(long = "events", help = "List raw punch events instead of summaries")]
        events: bool,

        #[arg(long = "json", help = "Print summaries and counters as JSON")]
        json: bool,
    },

    /// Show or edit the lateness deduction ladder
    Rules {
        #[arg(long = "list", help = "Print the configured deduction rules")]
        list: bool,

        #[arg(
            long = "add",
            value_name = "MIN:AMOUNT",
            help = "Add a rule: deduct AMOUNT when more than MIN minutes late"
        )]
        add: Option<String>,

        #[arg(
            long = "remove",
            value_name = "N",
            help = "Remove the rule at position N (1-based, see --list)"
        )]
        remove: Option<usize>,
    },
}
