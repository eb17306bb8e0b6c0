// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::crypto::RandomSourceKind;

// Configuration for the password checker
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub random_source: RandomSourceKind,

    // Web Interface
    pub web_port: u16,
    pub web_address: String,
    pub web_base_path: String,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: PathBuf,

    // Problems found while loading, logged once the logger is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            random_source: RandomSourceKind::Thread,

            // Web Interface
            web_port: 3000,
            web_address: "127.0.0.1".to_string(),
            web_base_path: "/password-checker".to_string(),

            // Logging
            log_level: LevelFilter::Info,
            log_file: crate::utils::get_app_data_dir()
                .map(|dir| dir.join("logs"))
                .unwrap_or_else(|| PathBuf::from("./logs"))
                .join("password-checker.log"),

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(source) = lookup("RANDOM_SOURCE") {
            match source.parse() {
                Ok(kind) => config.random_source = kind,
                Err(e) => config
                    .warnings
                    .push(format!("{}, using {}", e, config.random_source)),
            }
        }

        // Web Interface
        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => config
                    .warnings
                    .push(format!("Invalid WEB_PORT '{}', using {}", val, config.web_port)),
            }
        }

        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(path) = lookup("WEB_BASE_PATH") {
            config.web_base_path = normalize_base_path(&path);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config
                    .warnings
                    .push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = PathBuf::from(file);
        } else if crate::utils::get_app_data_dir().is_none() {
            config.warnings.push(format!(
                "Could not determine data directory, logging to {}",
                config.log_file.display()
            ));
        }

        config
    }
}

// "/" and "" both mean the root scope
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
