// src/generators/password.rs
use rand::RngCore;
use thiserror::Error;

use crate::crypto::{RandomSource, RandomSourceKind};
use super::charset::{ALPHABET, ALPHABET_LEN};

/// Length of every generated password.
pub const PASSWORD_LENGTH: usize = 16;

// Largest multiple of the alphabet length that fits in a byte; bytes at or
// above it are rejected so every symbol stays equally likely.
const ACCEPT_BELOW: u8 = (256 / ALPHABET_LEN * ALPHABET_LEN) as u8;

// Refills allowed without accepting a single byte.
const MAX_EMPTY_REFILLS: usize = 64;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Random source failed: {0}")]
    RandomSource(#[from] rand::Error),

    #[error("Random source produced no usable bytes after {0} refills")]
    SourceExhausted(usize),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Draw [`PASSWORD_LENGTH`] symbols uniformly, with replacement, from the
/// combined alphabet.
///
/// Classes are not forced: an output with no digit (or no special) is a
/// legitimate draw.
pub fn generate_password<R>(rng: &mut R) -> Result<String>
where
    R: RngCore + ?Sized,
{
    let mut password = String::with_capacity(PASSWORD_LENGTH);
    let mut buf = [0u8; 32];
    let mut empty_refills = 0;

    while password.len() < PASSWORD_LENGTH {
        rng.try_fill_bytes(&mut buf)?;

        let before = password.len();
        for &byte in buf.iter().filter(|b| **b < ACCEPT_BELOW) {
            password.push(ALPHABET[byte as usize % ALPHABET_LEN] as char);
            if password.len() == PASSWORD_LENGTH {
                break;
            }
        }

        if password.len() == before {
            empty_refills += 1;
            if empty_refills >= MAX_EMPTY_REFILLS {
                return Err(GeneratorError::SourceExhausted(empty_refills));
            }
        } else {
            empty_refills = 0;
        }
    }

    Ok(password)
}

pub struct PasswordGenerator {
    source: RandomSource,
}

impl PasswordGenerator {
    pub fn with_kind(kind: RandomSourceKind) -> Self {
        PasswordGenerator {
            source: RandomSource::new(kind),
        }
    }

    pub fn generate_password(&mut self) -> Result<String> {
        let password = generate_password(&mut self.source)?;
        log::debug!("Generated {}-character password", password.len());
        Ok(password)
    }

    pub fn source_mut(&mut self) -> &mut RandomSource {
        &mut self.source
    }
}
