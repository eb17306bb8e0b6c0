// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::education::{Advice, Topic};
use crate::models::{Rule, StrengthResult};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Password to evaluate (may be empty)
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ChecklistItem {
    /// Rule identifier
    pub rule: Rule,
    /// Human-readable rule text
    pub description: String,
    /// Whether the password satisfies the rule
    pub met: bool,
}

impl ChecklistItem {
    pub fn from_result(result: &StrengthResult) -> Vec<ChecklistItem> {
        result
            .checklist()
            .into_iter()
            .map(|(rule, met)| ChecklistItem {
                rule,
                description: rule.description().to_string(),
                met,
            })
            .collect()
    }
}

#[derive(Serialize, ToSchema)]
pub struct StrengthResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Score and rule flags
    pub result: Option<StrengthResult>,
    /// Strength label ("No Password" .. "Very Strong")
    pub label: Option<String>,
    /// Strength bar width (0-100)
    pub percent: Option<u8>,
    /// Rules in display order
    pub checklist: Vec<ChecklistItem>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated 16-character password
    pub password: Option<String>,
    /// Strength of the generated password
    pub result: Option<StrengthResult>,
    /// Strength label of the generated password
    pub label: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct EducationTopic {
    /// Topic ID
    pub id: String,
    /// Topic title
    pub title: String,
    /// Whether the items are advice to follow or mistakes to avoid
    pub advice: Advice,
    /// Topic items
    pub items: Vec<String>,
}

impl From<&Topic> for EducationTopic {
    fn from(topic: &Topic) -> Self {
        EducationTopic {
            id: topic.id.to_string(),
            title: topic.title.to_string(),
            advice: topic.advice,
            items: topic.items.iter().map(|item| item.to_string()).collect(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct TopicContent {
    /// Topic ID
    pub id: String,
    /// Topic title
    pub title: String,
    /// Topic content in Markdown format
    pub content: String,
}

impl From<&Topic> for TopicContent {
    fn from(topic: &Topic) -> Self {
        TopicContent {
            id: topic.id.to_string(),
            title: topic.title.to_string(),
            content: topic.content(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct TopicListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// List of education topics
    pub topics: Vec<EducationTopic>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TopicContentResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Topic content
    pub topic: Option<TopicContent>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}
