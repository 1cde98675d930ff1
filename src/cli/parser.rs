use crate::export::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rLeaveCalc
#[derive(Parser)]
#[command(
    name = "rleavecalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Leave calculator: business-day durations and annual limits against a production calendar",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override dataset path (JSON with employees, event_logs, categories, calendars)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how rows are written.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write CSV/JSON to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,

    /// Overwrite the output file if it exists
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// List event logs with their business-day durations
    Items {
        /// Only this employee's event logs
        #[arg(long, value_name = "ID")]
        employee: Option<String>,

        /// Name shown on every row (overrides the name stored on the records)
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Used and remaining days per category for one employee
    Limits {
        /// Employee id
        #[arg(long, value_name = "ID")]
        employee: String,

        /// Year to report (default: current year)
        #[arg(long, value_name = "YYYY")]
        year: Option<i32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Limits summary for every employee
    ReportLimits {
        /// Year to report (default: current year)
        #[arg(long, value_name = "YYYY")]
        year: Option<i32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Days per employee and category over a period
    Overview {
        /// Period filter.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges
        /// start:end in the same format (e.g. 2024-12:2025-01).
        /// `all` (the default) disables clipping.
        #[arg(long, short)]
        period: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a production-calendar CSV into dataset JSON
    Calendar {
        /// Production-calendar CSV file
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Output JSON file (default: stdout)
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}
