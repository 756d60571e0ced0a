use crate::domain::{Answer, Question, QuestionId, QuestionSummary};
use askboard_errors::AppError;
use std::future::Future;

/// Read/write access to the external question-and-answer REST backend.
pub trait QaBackend: Send + Sync {
    fn list_questions(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<QuestionSummary>, AppError>> + Send;

    fn fetch_question(
        &self,
        id: &QuestionId,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Question, AppError>> + Send;

    fn fetch_answers(
        &self,
        id: &QuestionId,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Answer>, AppError>> + Send;

    fn post_answer(
        &self,
        id: &QuestionId,
        text: &str,
        token: &str,
    ) -> impl Future<Output = Result<(), AppError>> + Send;
}
