use std::io::{self, BufRead};

use crate::config::Config;
use crate::errors::AppResult;

/// Minimal chat-host harness: one command per stdin line, replies on
/// stdout. `quit`/`exit` ends the session.
pub async fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();

        if text.is_empty() {
            continue;
        }
        if text == "quit" || text == "exit" {
            break;
        }

        super::run::respond_to(text, cfg).await;
    }

    Ok(())
}
