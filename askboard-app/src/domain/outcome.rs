use super::{Answer, Question, QuestionSummary};
use askboard_errors::AppError;
use serde::{Deserialize, Serialize};

/// Everything the detail page needs once the question is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionThread {
    pub question: Question,
    pub answers: Vec<Answer>,
    pub viewer_name: Option<String>,
}

/// Result of the initial detail load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetailLoad {
    Ready(QuestionThread),
    SignInRequired,
    Failed(AppError),
}

/// Result of posting an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Post accepted. `answers` is the refreshed list, or `None` when the
    /// follow-up read failed and the current list should stay.
    Posted { answers: Option<Vec<Answer>> },
    SignInRequired,
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeFeed {
    pub viewer_name: Option<String>,
    pub questions: Vec<QuestionSummary>,
}
