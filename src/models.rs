// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrengthError {
    #[error("Score out of range: {0} (expected 0-5)")]
    ScoreOutOfRange(u8),
}

/// Outcome of evaluating one password against the five rules.
///
/// Built only through [`StrengthResult::new`], so `score` always equals the
/// number of flags that are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResult {
    score: u8,
    has_min_length: bool,
    has_uppercase: bool,
    has_lowercase: bool,
    has_digit: bool,
    has_special: bool,
}

impl StrengthResult {
    pub fn new(
        has_min_length: bool,
        has_uppercase: bool,
        has_lowercase: bool,
        has_digit: bool,
        has_special: bool,
    ) -> Self {
        let score = [has_min_length, has_uppercase, has_lowercase, has_digit, has_special]
            .iter()
            .filter(|met| **met)
            .count() as u8;

        Self {
            score,
            has_min_length,
            has_uppercase,
            has_lowercase,
            has_digit,
            has_special,
        }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn has_min_length(&self) -> bool {
        self.has_min_length
    }

    pub fn has_uppercase(&self) -> bool {
        self.has_uppercase
    }

    pub fn has_lowercase(&self) -> bool {
        self.has_lowercase
    }

    pub fn has_digit(&self) -> bool {
        self.has_digit
    }

    pub fn has_special(&self) -> bool {
        self.has_special
    }

    pub fn is_met(&self, rule: Rule) -> bool {
        match rule {
            Rule::MinLength => self.has_min_length(),
            Rule::Uppercase => self.has_uppercase(),
            Rule::Lowercase => self.has_lowercase(),
            Rule::Digit => self.has_digit(),
            Rule::Special => self.has_special(),
        }
    }

    pub fn level(&self) -> StrengthLevel {
        match StrengthLevel::try_from(self.score) {
            Ok(level) => level,
            // new() counts five flags, so the score never leaves 0..=5
            Err(e) => unreachable!("{}", e),
        }
    }

    /// Width of the strength bar, 0-100.
    pub fn percent(&self) -> u8 {
        self.score * 20
    }

    /// Rules in display order, paired with whether each one is met.
    pub fn checklist(&self) -> [(Rule, bool); 5] {
        Rule::ALL.map(|rule| (rule, self.is_met(rule)))
    }

    /// Rules the password still fails.
    pub fn unmet_rules(&self) -> Vec<Rule> {
        Rule::ALL.into_iter().filter(|rule| !self.is_met(*rule)).collect()
    }
}

/// The five independent password rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::MinLength,
        Rule::Uppercase,
        Rule::Lowercase,
        Rule::Digit,
        Rule::Special,
    ];

    /// Checklist text shown next to the rule.
    pub fn description(&self) -> &'static str {
        match self {
            Rule::MinLength => "At least 8 characters",
            Rule::Uppercase => "Contains uppercase letter",
            Rule::Lowercase => "Contains lowercase letter",
            Rule::Digit => "Contains number",
            Rule::Special => "Contains special character",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    NoPassword,
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::NoPassword => "No Password",
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl TryFrom<u8> for StrengthLevel {
    type Error = StrengthError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        match score {
            0 => Ok(StrengthLevel::NoPassword),
            1 => Ok(StrengthLevel::VeryWeak),
            2 => Ok(StrengthLevel::Weak),
            3 => Ok(StrengthLevel::Medium),
            4 => Ok(StrengthLevel::Strong),
            5 => Ok(StrengthLevel::VeryStrong),
            other => Err(StrengthError::ScoreOutOfRange(other)),
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_counts_flags() {
        assert_eq!(StrengthResult::new(false, false, false, false, false).score(), 0);
        assert_eq!(StrengthResult::new(true, false, true, false, false).score(), 2);
        assert_eq!(StrengthResult::new(true, true, true, true, true).score(), 5);
    }

    #[test]
    fn label_table_is_total() {
        let labels: Vec<&str> = (0..=5u8)
            .map(|score| StrengthLevel::try_from(score).unwrap().label())
            .collect();
        assert_eq!(
            labels,
            vec!["No Password", "Very Weak", "Weak", "Medium", "Strong", "Very Strong"]
        );
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        assert_eq!(StrengthLevel::try_from(6), Err(StrengthError::ScoreOutOfRange(6)));
        assert_eq!(StrengthLevel::try_from(255), Err(StrengthError::ScoreOutOfRange(255)));
    }

    #[test]
    fn serializes_with_camel_case_flags() {
        let result = StrengthResult::new(true, false, true, false, false);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "score": 2,
                "hasMinLength": true,
                "hasUppercase": false,
                "hasLowercase": true,
                "hasDigit": false,
                "hasSpecial": false
            })
        );
    }

    #[test]
    fn checklist_follows_rule_order() {
        let result = StrengthResult::new(false, true, false, true, false);
        let checklist = result.checklist();
        assert_eq!(checklist[0], (Rule::MinLength, false));
        assert_eq!(checklist[1], (Rule::Uppercase, true));
        assert_eq!(checklist[3], (Rule::Digit, true));
        assert_eq!(result.unmet_rules(), vec![Rule::MinLength, Rule::Lowercase, Rule::Special]);
    }

    #[test]
    fn rule_lookup_matches_accessors() {
        let result = StrengthResult::new(true, false, false, true, true);
        assert_eq!(result.is_met(Rule::MinLength), result.has_min_length());
        assert_eq!(result.is_met(Rule::Uppercase), result.has_uppercase());
        assert_eq!(result.is_met(Rule::Lowercase), result.has_lowercase());
        assert_eq!(result.is_met(Rule::Digit), result.has_digit());
        assert_eq!(result.is_met(Rule::Special), result.has_special());
    }

    #[test]
    fn percent_scales_score() {
        assert_eq!(StrengthResult::default().percent(), 0);
        assert_eq!(StrengthResult::new(true, true, true, false, false).percent(), 60);
        assert_eq!(StrengthResult::new(true, true, true, true, true).percent(), 100);
    }
}
