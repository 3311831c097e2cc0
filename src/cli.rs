use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::{ParseArgs, ServeArgs};
use crate::shared::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "quickissue",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the web front-end
    Serve(ServeArgs),

    /// Parse a command line and print the extracted fields as JSON
    Parse(ParseArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
