use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_RED: &str = "\x1b[31m";

/// One outbound chat message. The chat host is stdout here, so a message
/// is simply a line.
pub fn send<T: fmt::Display>(msg: T) {
    println!("{}", msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}i{} {}", FG_BLUE, BOLD, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}!{} {}", FG_RED, BOLD, RESET, msg);
}
