// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to check (read from stdin when omitted)
        password: Option<String>,
    },

    /// Generate random 16-character passwords
    Generate {
        /// Number of passwords to generate
        #[arg(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
        count: u32,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show password tips and common mistakes
    Tips,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (overrides WEB_PORT)
        #[arg(long, short)]
        port: Option<u16>,

        /// Address to bind (overrides WEB_ADDRESS)
        #[arg(long)]
        address: Option<String>,
    },
}
