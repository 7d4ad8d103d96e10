use crate::report::ReportKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clockify-report
/// CLI application to rework Clockify time exports into Excel reports
#[derive(Parser)]
#[command(
    name = "clockify-report",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert a Clockify time-tracking export into project and HR Excel reports",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Load a Clockify export and print a preview of the first rows
    Preview {
        /// Path of the Clockify .xlsx export
        file: String,

        #[arg(long, help = "Number of rows to preview")]
        rows: Option<usize>,
    },

    /// Export a derived report workbook from a Clockify export
    Export {
        /// Path of the Clockify .xlsx export
        file: String,

        #[arg(long, value_enum, help = "Which report to produce")]
        report: ReportKind,

        #[arg(long = "out", value_name = "FILE", help = "Destination workbook path")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the destination without asking")]
        force: bool,
    },
}
