use serde::{Deserialize, Serialize};

pub const GENERIC_SUBMIT_FAILURE: &str = "Failed to post answer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Sign-in required")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    /// The backend answered with an error payload carrying its own message.
    #[error("Backend rejected request: {0}")]
    Rejected(String),

    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Unexpected backend response: {0}")]
    Decode(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
            Self::Unauthorized => "Please log in to continue.",
            Self::NotFound => "Question not found.",
            Self::Rejected(msg) => msg,
            Self::Backend(_) | Self::Decode(_) => "The server could not be reached. Try again later.",
            Self::Config(_) | Self::Internal(_) => "Something went wrong on our side. Try again later.",
        }
    }

    /// Notice shown after a failed answer post: the server's own message when
    /// it sent one, the generic failure text otherwise.
    pub fn submit_notice(&self) -> &str {
        match self {
            Self::Validation(msg) | Self::Rejected(msg) => msg,
            _ => GENERIC_SUBMIT_FAILURE,
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        message: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = match &self {
                AppError::Validation(_) => StatusCode::BAD_REQUEST,
                AppError::Unauthorized => StatusCode::UNAUTHORIZED,
                AppError::NotFound => StatusCode::NOT_FOUND,
                AppError::Rejected(_) | AppError::Backend(_) | AppError::Decode(_) => {
                    StatusCode::BAD_GATEWAY
                }
                AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            let message = self.user_message().to_string();
            (status, Json(ErrorResponse { message })).into_response()
        }
    }
}
