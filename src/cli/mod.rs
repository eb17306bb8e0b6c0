// src/cli/mod.rs
use clap::Parser;

use crate::core::config::Config;
use crate::logging::LogTarget;

pub mod commands;
pub mod display;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Check password strength and generate passwords", long_about = None)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Interactive mode logs to a file so records don't land between prompts.
    pub fn log_target(&self, config: &Config) -> LogTarget {
        match self.command {
            None => LogTarget::File(config.log_file.clone()),
            Some(_) => LogTarget::Stderr,
        }
    }
}
