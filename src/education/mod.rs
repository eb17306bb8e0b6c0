// src/education/mod.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Whether a topic lists things to do or things to avoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Advice {
    Do,
    Avoid,
}

#[derive(Debug, Clone, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub advice: Advice,
    pub items: Vec<&'static str>,
}

impl Topic {
    // Markdown rendering, one bullet per item
    pub fn content(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        for item in &self.items {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
        out
    }
}

pub struct EducationManager {
    topics: Vec<Topic>,
}

impl EducationManager {
    pub fn new() -> Self {
        let topics = vec![
            Topic {
                id: "tips",
                title: "Password Tips",
                advice: Advice::Do,
                items: vec![
                    "Use a unique password for each account",
                    "Avoid using personal information",
                    "Consider using a password manager",
                ],
            },
            Topic {
                id: "mistakes",
                title: "Common Mistakes",
                advice: Advice::Avoid,
                items: vec![
                    "Using common words or phrases",
                    "Reusing passwords across accounts",
                    "Using sequential numbers or letters",
                ],
            },
        ];

        Self { topics }
    }

    pub fn get_all_topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn get_topic_by_id(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id.eq_ignore_ascii_case(id))
    }
}

impl Default for EducationManager {
    fn default() -> Self {
        Self::new()
    }
}
