use super::QaBackend;
use crate::domain::{DetailLoad, QuestionId, QuestionThread, SessionContext};
use askboard_errors::AppError;
use std::sync::Arc;

/// Loads a question together with its answers for the detail page.
pub struct LoadQuestionDetail<B> {
    backend: Arc<B>,
}

impl<B: QaBackend> LoadQuestionDetail<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn execute(&self, session: Option<&SessionContext>, id: &QuestionId) -> DetailLoad {
        let Some(session) = session else {
            tracing::info!("Detail load for question {} without session", id);
            return DetailLoad::SignInRequired;
        };

        if id.as_str().trim().is_empty() {
            return DetailLoad::Failed(AppError::NotFound);
        }

        let token = Some(session.token.as_str());
        let (question, answers) = tokio::join!(
            self.backend.fetch_question(id, token),
            self.backend.fetch_answers(id, token),
        );

        let question = match question {
            Ok(question) => question,
            Err(AppError::Unauthorized) => return DetailLoad::SignInRequired,
            Err(e) => {
                tracing::error!("Failed to load question {}: {}", id, e);
                return DetailLoad::Failed(e);
            }
        };

        // Answers are best effort; the question renders either way.
        let answers = answers.unwrap_or_else(|e| {
            tracing::warn!("Failed to load answers for question {}: {}", id, e);
            Vec::new()
        });

        DetailLoad::Ready(QuestionThread {
            question,
            answers,
            viewer_name: Some(session.display_name.clone()),
        })
    }
}
