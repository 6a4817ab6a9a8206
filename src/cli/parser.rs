use clap::{Parser, Subcommand};

/// Command-line interface definition for schedbot
/// Chat-command bot announcing Forecast schedules for people and projects
#[derive(Parser)]
#[command(
    name = "schedbot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Announce people and project schedules from a Forecast-compatible scheduling service",
    long_about = None
)]
pub struct Cli {
    /// Override the API base URL (useful for tests or a mock service)
    #[arg(global = true, long = "api-base")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter configuration file
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check that credentials are configured")]
        check: bool,
    },

    /// Handle a single chat command, e.g. `run show 5 day schedule for Ada`
    Run {
        /// The chat command text
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },

    /// Read chat commands from stdin, one per line, replying on stdout
    Listen,
}
