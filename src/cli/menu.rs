// src/cli/menu.rs
use std::error::Error;
use std::fmt;
use std::time::Instant;
use console::{style, Term};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::cli::display::{render_session, render_topic};
use crate::core::config::Config;
use crate::core::session::CheckerSession;
use crate::education::EducationManager;
use crate::generators::{PasswordGenerator, PASSWORD_LENGTH};
use crate::utils::copy_to_clipboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EnterPassword,
    ToggleVisibility { showing: bool },
    Generate,
    Copy,
    Tips,
    Exit,
}

impl MenuAction {
    pub fn for_session(session: &CheckerSession) -> Vec<MenuAction> {
        vec![
            MenuAction::EnterPassword,
            MenuAction::ToggleVisibility { showing: session.show_password() },
            MenuAction::Generate,
            MenuAction::Copy,
            MenuAction::Tips,
            MenuAction::Exit,
        ]
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::EnterPassword => write!(f, "✏️  Enter password"),
            MenuAction::ToggleVisibility { showing: true } => write!(f, "🙈  Hide password"),
            MenuAction::ToggleVisibility { showing: false } => write!(f, "👁  Show password"),
            MenuAction::Generate => write!(f, "🔄  Generate {}-character password", PASSWORD_LENGTH),
            MenuAction::Copy => write!(f, "📋  Copy to clipboard"),
            MenuAction::Tips => write!(f, "💡  Password tips"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

// Ask for a new password, echoing it only when the session is unmasked
fn prompt_password(session: &CheckerSession) -> Result<Option<String>, InquireError> {
    if session.show_password() {
        Text::new("Password:").prompt_skippable()
    } else {
        Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt_skippable()
    }
}

pub fn run_cli_menu(config: &Config) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║     🛡️  PASSWORD STRENGTH CHECKER     ║");
    println!("╚══════════════════════════════════════╝");

    let term = Term::stdout();
    let mut session = CheckerSession::new();
    let mut generator = PasswordGenerator::with_kind(config.random_source);
    let education = EducationManager::new();

    loop {
        println!("\n{}", render_session(&session, Instant::now()));

        let selection = Select::new("Choose an option:", MenuAction::for_session(&session))
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let action = match selection {
            Ok(Some(action)) => action,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match action {
            MenuAction::EnterPassword => {
                if let Some(password) = prompt_password(&session)? {
                    session.set_password(password);
                }
            }
            MenuAction::ToggleVisibility { .. } => {
                session.toggle_visibility();
            }
            MenuAction::Generate => {
                if let Err(e) = session.generate(generator.source_mut()) {
                    log::error!("Password generation failed: {}", e);
                    eprintln!("❌ Failed to generate password: {}", e);
                }
            }
            MenuAction::Copy => {
                if session.password().is_empty() {
                    println!("❗ Nothing to copy yet.");
                    continue;
                }
                match copy_to_clipboard(&term, session.password()) {
                    Ok(()) => session.mark_copied(Instant::now()),
                    Err(e) => {
                        log::warn!("Failed to copy password: {}", e);
                        eprintln!("❌ Failed to copy password: {}", e);
                    }
                }
            }
            MenuAction::Tips => {
                for topic in education.get_all_topics() {
                    println!("\n{}", render_topic(topic));
                }
            }
            MenuAction::Exit => break,
        }
    }

    println!("{}", style("Goodbye!").dim());
    Ok(())
}
