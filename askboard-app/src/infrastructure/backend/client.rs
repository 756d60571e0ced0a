use super::payload::{
    answers_from_value, question_from_value, questions_from_value, ErrorPayload, NewAnswer,
};
use crate::application::QaBackend;
use crate::config::BoardConfig;
use crate::domain::{Answer, Question, QuestionId, QuestionSummary};
use askboard_errors::AppError;
use reqwest::{Response, StatusCode};
use serde_json::Value;
use url::Url;

/// HTTP client for the question-and-answer REST backend.
#[derive(Clone)]
pub struct BackendClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(config: &BoardConfig) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.backend_url.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url, token: Option<&str>) -> Result<Value, AppError> {
        let mut request = self.http_client.get(url.clone());
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;
        let response = check_status(&url, response).await?;

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}

async fn check_status(url: &Url, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!("Backend error: {} {} - {}", url.path(), status, body);

    if let Some(message) = ErrorPayload::from_body(&body)
        .message
        .filter(|m| !m.trim().is_empty())
    {
        return Err(AppError::Rejected(message));
    }

    Err(match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthorized,
        StatusCode::NOT_FOUND => AppError::NotFound,
        _ => AppError::Backend(format!("API error: {}", status)),
    })
}

impl QaBackend for BackendClient {
    async fn list_questions(&self, token: Option<&str>) -> Result<Vec<QuestionSummary>, AppError> {
        let url = self.endpoint(&["api", "question"])?;
        let value = self.get_json(url, token).await?;
        Ok(questions_from_value(value))
    }

    async fn fetch_question(
        &self,
        id: &QuestionId,
        token: Option<&str>,
    ) -> Result<Question, AppError> {
        let url = self.endpoint(&["api", "question", id.as_str()])?;
        let value = self.get_json(url, token).await?;
        question_from_value(value, id)
    }

    async fn fetch_answers(
        &self,
        id: &QuestionId,
        token: Option<&str>,
    ) -> Result<Vec<Answer>, AppError> {
        let url = self.endpoint(&["api", "answer", id.as_str()])?;
        let value = self.get_json(url, token).await?;
        Ok(answers_from_value(value))
    }

    async fn post_answer(&self, id: &QuestionId, text: &str, token: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["api", "answer"])?;
        let body = NewAnswer {
            question_id: id.as_str(),
            answer: text,
        };

        let response = self
            .http_client
            .post(url.clone())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Backend(e.to_string()))?;

        check_status(&url, response).await.map(|_| ())
    }
}
