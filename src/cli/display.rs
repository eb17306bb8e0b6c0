// src/cli/display.rs
use std::time::Instant;
use console::Style;

use crate::core::session::CheckerSession;
use crate::education::{Advice, Topic};
use crate::models::{StrengthLevel, StrengthResult};
use crate::utils::{strength_bar, BAR_WIDTH};

// Colour of the label and bar for each level
pub fn level_style(level: StrengthLevel) -> Style {
    match level {
        StrengthLevel::NoPassword => Style::new().color256(248),
        StrengthLevel::VeryWeak => Style::new().red(),
        StrengthLevel::Weak => Style::new().color256(208),
        StrengthLevel::Medium => Style::new().yellow(),
        StrengthLevel::Strong => Style::new().green(),
        StrengthLevel::VeryStrong => Style::new().green().bright().bold(),
    }
}

pub fn render_strength(result: &StrengthResult) -> String {
    let level = result.level();
    let style = level_style(level);

    let mut out = format!("Strength: {}\n", style.apply_to(level.label()));
    out.push_str(&format!(
        "{} {:>3}%\n",
        style.apply_to(strength_bar(result.percent(), BAR_WIDTH)),
        result.percent()
    ));

    for (rule, met) in result.checklist() {
        if met {
            out.push_str(&format!("  {} {}\n", Style::new().green().apply_to("✔"), Style::new().green().apply_to(rule)));
        } else {
            out.push_str(&format!("  {} {}\n", Style::new().color256(208).apply_to("⚠"), Style::new().color256(208).apply_to(rule)));
        }
    }

    out
}

pub fn render_session(session: &CheckerSession, now: Instant) -> String {
    let shown = if session.password().is_empty() {
        Style::new().dim().apply_to("(empty)".to_string()).to_string()
    } else {
        session.display_password()
    };

    let mut out = format!("Password: {}", shown);
    if session.is_copied(now) {
        out.push_str(&format!("  {}", Style::new().green().apply_to("Copied!")));
    }
    out.push('\n');
    out.push_str(&render_strength(&session.strength()));
    out
}

pub fn render_topic(topic: &Topic) -> String {
    let (marker, style) = match topic.advice {
        Advice::Do => ("✔", Style::new().green()),
        Advice::Avoid => ("✘", Style::new().red()),
    };

    let mut out = format!("{}\n", Style::new().bold().apply_to(topic.title));
    for item in &topic.items {
        out.push_str(&format!("  {} {}\n", style.apply_to(marker), item));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::evaluate;
    use crate::education::EducationManager;
    use std::time::Duration;

    fn plain(s: &str) -> String {
        console::strip_ansi_codes(s).to_string()
    }

    #[test]
    fn strength_report_lists_every_rule() {
        let report = plain(&render_strength(&evaluate("aaaaaaaa")));
        assert!(report.starts_with("Strength: Weak\n"));
        assert!(report.contains(" 40%"));
        assert!(report.contains("✔ At least 8 characters"));
        assert!(report.contains("✔ Contains lowercase letter"));
        assert!(report.contains("⚠ Contains uppercase letter"));
        assert!(report.contains("⚠ Contains number"));
        assert!(report.contains("⚠ Contains special character"));
    }

    #[test]
    fn session_masks_password_and_shows_copied() {
        let mut session = CheckerSession::new();
        session.set_password("Aa1!aaaa");
        let now = Instant::now();
        session.mark_copied(now);

        let view = plain(&render_session(&session, now));
        assert!(view.starts_with("Password: ••••••••  Copied!\n"));
        assert!(view.contains("Strength: Very Strong"));

        let later = plain(&render_session(&session, now + Duration::from_secs(3)));
        assert!(!later.contains("Copied!"));
    }

    #[test]
    fn empty_session_shows_placeholder() {
        let view = plain(&render_session(&CheckerSession::new(), Instant::now()));
        assert!(view.starts_with("Password: (empty)\n"));
        assert!(view.contains("Strength: No Password"));
    }

    #[test]
    fn topic_uses_advice_marker() {
        let manager = EducationManager::new();
        let tips = plain(&render_topic(manager.get_topic_by_id("tips").unwrap()));
        let mistakes = plain(&render_topic(manager.get_topic_by_id("mistakes").unwrap()));
        assert!(tips.contains("✔ Use a unique password for each account"));
        assert!(mistakes.contains("✘ Using common words or phrases"));
    }
}
