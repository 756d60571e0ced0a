use super::QaBackend;
use crate::domain::{HomeFeed, SessionContext};
use askboard_errors::AppError;
use std::sync::Arc;

/// Fetches the question summaries shown on the home page.
pub struct ListQuestions<B> {
    backend: Arc<B>,
}

impl<B: QaBackend> ListQuestions<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn execute(&self, session: Option<&SessionContext>) -> Result<HomeFeed, AppError> {
        let token = session.map(|s| s.token.as_str());
        let questions = self.backend.list_questions(token).await?;
        tracing::debug!("Listed {} questions", questions.len());

        Ok(HomeFeed {
            viewer_name: session.map(|s| s.display_name.clone()),
            questions,
        })
    }
}
