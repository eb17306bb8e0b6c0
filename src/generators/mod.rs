// src/generators/mod.rs
pub mod charset;
mod password;

pub use password::{generate_password, GeneratorError, PasswordGenerator, PASSWORD_LENGTH};
