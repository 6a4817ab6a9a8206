pub mod command;
pub mod report;
pub mod resolver;
pub mod schedule;
