pub mod config;
pub mod init;
pub mod listen;
pub mod run;
