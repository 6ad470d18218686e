use crate::config::StorageBackend;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rcalllog
/// CLI application to track daily login time and calls
#[derive(Parser)]
#[command(
    name = "rcalllog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track daily login time and call counts, see monthly statistics and salary, export reports",
    long_about = None
)]
pub struct Cli {
    /// Override storage path (SQLite file, or directory for the file backend)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the storage backend
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<StorageBackend>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the storage and configuration
    Init,

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

    /// Inspect the storage (statistics, integrity)
    Db {
        #[arg(long = "info", help = "Show storage information")]
        info: bool,

        #[arg(long = "check", help = "Check storage integrity")]
        check: bool,
    },

    /// Add or update the record of one day
    Add {
        /// Date of the record (YYYY-MM-DD or 'today'); defaults to today
        date: Option<String>,

        /// Login time (HH:MM:SS)
        #[arg(long = "login", help = "Total login time for the day (HH:MM:SS)")]
        login: Option<String>,

        /// Calls handled
        #[arg(long = "calls", help = "Number of calls handled that day")]
        calls: Option<String>,
    },

    /// Delete the record of one day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show the record of one day
    Show { date: String },

    /// List the records of a month
    List {
        #[arg(long, short, help = "Month to list (YYYY-MM); defaults to the latest month with data")]
        month: Option<String>,
    },

    /// List months that have at least one record
    Months,

    /// Totals, averages and salary for a month
    Summary {
        #[arg(long, short, help = "Month (YYYY-MM); defaults to the latest month with data")]
        month: Option<String>,
    },

    /// Export the monthly report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
