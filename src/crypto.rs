// src/crypto.rs
use std::fmt;
use std::str::FromStr;
use rand::rngs::{OsRng, ThreadRng};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomSourceError {
    #[error("Unknown random source '{0}' (expected 'thread' or 'os')")]
    UnknownKind(String),
}

/// Which random source the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomSourceKind {
    /// Thread-local generator seeded from the OS.
    #[default]
    Thread,
    /// Operating system entropy on every draw.
    Os,
    /// Reproducible ChaCha20 stream.
    Seeded(u64),
}

impl FromStr for RandomSourceKind {
    type Err = RandomSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thread" => Ok(RandomSourceKind::Thread),
            "os" => Ok(RandomSourceKind::Os),
            other => Err(RandomSourceError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for RandomSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RandomSourceKind::Thread => write!(f, "thread"),
            RandomSourceKind::Os => write!(f, "os"),
            RandomSourceKind::Seeded(seed) => write!(f, "seeded({})", seed),
        }
    }
}

/// A concrete random source handed to the generator.
///
/// Not `Send`: the thread-local variant must stay on the thread that built
/// it, so callers build one where they use it.
pub enum RandomSource {
    Thread(ThreadRng),
    Os(OsRng),
    Seeded(ChaCha20Rng),
}

impl RandomSource {
    pub fn new(kind: RandomSourceKind) -> Self {
        match kind {
            RandomSourceKind::Thread => RandomSource::Thread(rand::thread_rng()),
            RandomSourceKind::Os => RandomSource::Os(OsRng),
            RandomSourceKind::Seeded(seed) => RandomSource::Seeded(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RandomSource::Thread(_) => "Thread",
            RandomSource::Os(_) => "Os",
            RandomSource::Seeded(_) => "Seeded",
        };
        f.debug_tuple("RandomSource").field(&name).finish()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        match self {
            RandomSource::Thread(rng) => rng.next_u32(),
            RandomSource::Os(rng) => rng.next_u32(),
            RandomSource::Seeded(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            RandomSource::Thread(rng) => rng.next_u64(),
            RandomSource::Os(rng) => rng.next_u64(),
            RandomSource::Seeded(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            RandomSource::Thread(rng) => rng.fill_bytes(dest),
            RandomSource::Os(rng) => rng.fill_bytes(dest),
            RandomSource::Seeded(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            RandomSource::Thread(rng) => rng.try_fill_bytes(dest),
            RandomSource::Os(rng) => rng.try_fill_bytes(dest),
            RandomSource::Seeded(rng) => rng.try_fill_bytes(dest),
        }
    }
}
