use crate::application::{ListQuestions, LoadQuestionDetail, SubmitAnswer};
use crate::config::BoardConfig;
use crate::infrastructure::backend::BackendClient;
use askboard_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub list_questions: Arc<ListQuestions<BackendClient>>,
    pub load_question: Arc<LoadQuestionDetail<BackendClient>>,
    pub submit_answer: Arc<SubmitAnswer<BackendClient>>,
    pub config: BoardConfig,
}

impl AppContext {
    pub fn new(config: BoardConfig) -> Result<Self, AppError> {
        let backend = Arc::new(BackendClient::new(&config)?);

        Ok(Self {
            list_questions: Arc::new(ListQuestions::new(backend.clone())),
            load_question: Arc::new(LoadQuestionDetail::new(backend.clone())),
            submit_answer: Arc::new(SubmitAnswer::new(backend)),
            config,
        })
    }

    pub fn from_env() -> Result<Self, AppError> {
        let config = BoardConfig::from_env()?;
        tracing::info!("Using question backend at {}", config.backend_url);
        Self::new(config)
    }
}
