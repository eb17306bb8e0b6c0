// src/core/session.rs
use std::time::{Duration, Instant};
use rand::RngCore;

use crate::analysis::evaluate;
use crate::generators::{generate_password, GeneratorError};
use crate::models::StrengthResult;

/// How long the "copied" indicator stays on after a copy.
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

pub const MASK_CHAR: char = '•';

/// State owned by one interactive checker session.
///
/// The strength result is replaced every time the password changes.
#[derive(Debug, Default)]
pub struct CheckerSession {
    password: String,
    strength: StrengthResult,
    show_password: bool,
    copied_at: Option<Instant>,
}

impl CheckerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> StrengthResult {
        self.strength
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.strength = evaluate(&self.password);
        log::debug!(
            "Password updated: {} chars, score {}",
            self.password.chars().count(),
            self.strength.score()
        );
    }

    /// Replace the password with a generated one. Leaves the session
    /// untouched if the random source fails.
    pub fn generate<R>(&mut self, rng: &mut R) -> Result<&str, GeneratorError>
    where
        R: RngCore + ?Sized,
    {
        let generated = generate_password(rng)?;
        self.set_password(generated);
        Ok(&self.password)
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_at
            .map(|at| now.saturating_duration_since(at) < COPIED_FEEDBACK)
            .unwrap_or(false)
    }

    /// The password as it should be shown: plaintext or one mask per char.
    pub fn display_password(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            std::iter::repeat(MASK_CHAR).take(self.password.chars().count()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::PASSWORD_LENGTH;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("no entropy"))
        }
    }

    #[test]
    fn new_session_has_no_password() {
        let session = CheckerSession::new();
        assert_eq!(session.password(), "");
        assert_eq!(session.strength().score(), 0);
        assert!(!session.show_password());
    }

    #[test]
    fn setting_password_reevaluates() {
        let mut session = CheckerSession::new();
        session.set_password("aaaaaaaa");
        assert_eq!(session.strength().score(), 2);
        session.set_password("Aa1!aaaa");
        assert_eq!(session.strength().score(), 5);
        session.set_password("");
        assert_eq!(session.strength(), StrengthResult::default());
    }

    #[test]
    fn generate_replaces_password() {
        let mut session = CheckerSession::new();
        session.set_password("old");
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let generated = session.generate(&mut rng).unwrap().to_string();
        assert_eq!(generated.len(), PASSWORD_LENGTH);
        assert_eq!(session.password(), generated);
        assert_eq!(session.strength(), evaluate(&generated));
    }

    #[test]
    fn failed_generation_keeps_state() {
        let mut session = CheckerSession::new();
        session.set_password("Keep me 1");
        let before = session.strength();
        assert!(session.generate(&mut FailingRng).is_err());
        assert_eq!(session.password(), "Keep me 1");
        assert_eq!(session.strength(), before);
    }

    #[test]
    fn password_is_masked_until_shown() {
        let mut session = CheckerSession::new();
        session.set_password("pä55");
        assert_eq!(session.display_password(), "••••");
        assert!(session.toggle_visibility());
        assert_eq!(session.display_password(), "pä55");
        assert!(!session.toggle_visibility());
    }

    #[test]
    fn copied_flag_expires() {
        let mut session = CheckerSession::new();
        let start = Instant::now();
        assert!(!session.is_copied(start));
        session.mark_copied(start);
        assert!(session.is_copied(start + Duration::from_millis(1999)));
        assert!(!session.is_copied(start + COPIED_FEEDBACK));
    }
}
