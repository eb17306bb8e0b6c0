use clap::Parser;
use std::io;
use std::path::Path;

mod analysis;
mod api;
mod cli;
mod core;
mod crypto;
mod education;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::crypto::RandomSourceKind;

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();

    let log_target = args.log_target(&config);
    if let Err(e) = logging::init(config.log_level, &log_target) {
        eprintln!("⚠️ Logging disabled: {}", e);
    }
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        None => {
            log::info!("Launching interactive checker");
            cli::menu::run_cli_menu(&config).map_err(|e| {
                log::error!("CLI menu error: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            })?;
        }

        Some(CliCommand::Check { password }) => {
            let password = match password {
                Some(password) => password,
                None => utils::read_password_line(&mut io::stdin().lock())?,
            };
            println!("{}", cli::handlers::handle_check(&password, args.json).trim_end());
        }

        Some(CliCommand::Generate { count, seed }) => {
            let kind = seed.map(RandomSourceKind::Seeded).unwrap_or(config.random_source);
            match cli::handlers::handle_generate(count, kind, args.json) {
                Ok(output) => println!("{}", output.trim_end()),
                Err(e) => {
                    log::error!("Password generation failed: {}", e);
                    if args.json {
                        println!("{}", cli::handlers::error_json(&format!("Failed to generate password: {}", e)));
                    } else {
                        eprintln!("❌ Failed to generate password: {}", e);
                    }
                    std::process::exit(1);
                }
            }
        }

        Some(CliCommand::Tips) => {
            println!("{}", cli::handlers::handle_tips(args.json).trim_end());
        }

        Some(CliCommand::Serve { port, address }) => {
            if let Some(port) = port {
                config.web_port = port;
            }
            if let Some(address) = address {
                config.web_address = address;
            }
            api::start_server(&config).await.map_err(|e| {
                log::error!("API server failed: {}", e);
                e
            })?;
        }
    }

    Ok(())
}
