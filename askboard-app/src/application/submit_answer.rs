use super::QaBackend;
use crate::domain::{QuestionId, SessionContext, SubmitOutcome, EMPTY_ANSWER_NOTICE};
use askboard_errors::AppError;
use std::sync::Arc;

/// Posts an answer and, once the backend accepted it, reads the answers again.
pub struct SubmitAnswer<B> {
    backend: Arc<B>,
}

impl<B: QaBackend> SubmitAnswer<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    pub async fn execute(
        &self,
        session: Option<&SessionContext>,
        id: &QuestionId,
        text: &str,
    ) -> SubmitOutcome {
        let Some(session) = session else {
            return SubmitOutcome::SignInRequired;
        };

        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Failed(AppError::Validation(EMPTY_ANSWER_NOTICE.to_string()));
        }

        match self.backend.post_answer(id, text, &session.token).await {
            Ok(()) => {}
            Err(AppError::Unauthorized) => return SubmitOutcome::SignInRequired,
            Err(e) => {
                tracing::warn!("Answer for question {} was not posted: {}", id, e);
                return SubmitOutcome::Failed(e);
            }
        }
        tracing::info!("Answer posted for question {} by {}", id, session.display_name);

        match self.backend.fetch_answers(id, Some(&session.token)).await {
            Ok(answers) => SubmitOutcome::Posted {
                answers: Some(answers),
            },
            Err(e) => {
                tracing::warn!("Failed to refresh answers for question {}: {}", id, e);
                SubmitOutcome::Posted { answers: None }
            }
        }
    }
}
