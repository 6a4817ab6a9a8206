use crate::api::ForecastClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::command::ChatCommand;
use crate::core::schedule;
use crate::errors::AppResult;
use crate::ui::messages;

pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { text } = cmd {
        respond_to(&text.join(" "), cfg).await;
    }
    Ok(())
}

/// Send the reply for one chat command. A chat-level error (bad command,
/// fetch failure, unknown subject) becomes a single reply line rather
/// than a process failure, the same as any other outbound message.
pub async fn respond_to(text: &str, cfg: &Config) {
    match reply_lines(text, cfg).await {
        Ok(lines) => {
            for line in lines {
                messages::send(line);
            }
        }
        Err(e) => messages::send(e),
    }
}

async fn reply_lines(text: &str, cfg: &Config) -> AppResult<Vec<String>> {
    let command = ChatCommand::parse(text)?;
    let client = ForecastClient::new(cfg)?;
    schedule::respond(&client, cfg.default_days, command).await
}
