use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier of a question. Numeric and string ids are both kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route to the detail page of this question.
    pub fn detail_path(&self) -> String {
        format!("/question/{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for QuestionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Question as shown on the home page list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSummary {
    pub id: QuestionId,
    pub title: String,
    pub body: Option<String>,
    pub author: Option<String>,
    pub answer_count: u32,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
