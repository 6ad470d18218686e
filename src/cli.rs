//! Command-line interface: clap definitions and one handler per sub-command.

pub mod commands;
pub mod parser;
