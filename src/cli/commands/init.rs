use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` subcommand: write a starter configuration file.
pub fn handle() -> AppResult<()> {
    Config::init_all()
}
