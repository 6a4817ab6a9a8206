use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("Current configuration ({:?}):\n", Config::config_file());
            println!(
                "{}",
                serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?
            );
        }

        if *check {
            cfg.check()?;
            messages::info("Configuration OK");
        }
    }
    Ok(())
}
