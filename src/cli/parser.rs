use crate::export::{ExportFormat, ExportTarget};
use clap::{Parser, Subcommand};

/// Command-line interface definition for golfstats
#[derive(Parser)]
#[command(
    name = "golfstats",
    version = env!("CARGO_PKG_VERSION"),
    about = "Golf-day tracker: days golfed, trips and estimated cost from a dated event log",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (YAML or JSON)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and a data file template
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use instead of $EDITOR")]
        editor: Option<String>,
    },

    /// Show days golfed, share of the term, trips and estimated cost
    Stats {
        #[arg(long, help = "Print the report as JSON")]
        json: bool,

        #[arg(long = "as-of", value_name = "DATE", help = "Reference date (YYYY-MM-DD)")]
        as_of: Option<String>,
    },

    /// List derived trips with their estimated cost
    Trips {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Filter by start date: year, month, day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Only trips at this location")]
        location: Option<String>,
    },

    /// List raw events
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "golf-only", help = "Only golf days")]
        golf_only: bool,
    },

    /// Tell whether a date (default: today, Eastern time) is a golf day
    Today {
        #[arg(long, value_name = "DATE")]
        date: Option<String>,
    },

    /// Lint the data file for suspicious entries
    Check {
        #[arg(long = "as-of", value_name = "DATE")]
        as_of: Option<String>,
    },

    /// Export trips, events or the stats report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_enum, default_value = "trips")]
        what: ExportTarget,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "as-of", value_name = "DATE")]
        as_of: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
