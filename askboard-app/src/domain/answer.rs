use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub id: Option<String>,
    pub body: String,
    pub author: Option<String>,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Answer {
    /// Stable key for list rendering; falls back to the position in the list.
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("#{}", index),
        }
    }
}
