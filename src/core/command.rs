use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{AppError, AppResult};

/// An inbound chat command.
///
/// `days`/`term` are left unset when the sender omitted them; defaults are
/// applied by the dispatcher (days from config, term meaning "everything").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `show forecast people`
    People,
    /// `show forecast projects`
    Projects,
    /// `show [<N> day] (schedule|forecast) [for <term>]`
    Schedule {
        days: Option<i64>,
        term: Option<String>,
    },
}

fn schedule_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^show (?:(\d+) day )?(?:schedule|forecast)(?: for(?: (.*))?)?$").unwrap()
    })
}

impl ChatCommand {
    pub fn parse(text: &str) -> AppResult<Self> {
        let text = text.trim();

        if text == "show forecast people" {
            return Ok(ChatCommand::People);
        }
        if text == "show forecast projects" {
            return Ok(ChatCommand::Projects);
        }

        if let Some(caps) = schedule_re().captures(text) {
            let days = match caps.get(1) {
                Some(m) => Some(
                    m.as_str()
                        .parse::<i64>()
                        .map_err(|_| AppError::InvalidDayCount(m.as_str().to_string()))?,
                ),
                None => None,
            };
            // A bare or empty "for" means no subject, same as omitting it.
            let term = caps
                .get(2)
                .map(|m| m.as_str().to_string())
                .filter(|t| !t.is_empty());
            return Ok(ChatCommand::Schedule { days, term });
        }

        Err(AppError::UnrecognizedCommand(text.to_string()))
    }
}
