use askboard_app::domain::{SessionContext, SESSION_KEY};
use askboard_errors::AppError;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use tower_sessions::Session;

#[derive(Deserialize)]
pub struct LoginForm {
    display_name: String,
    token: String,
}

impl LoginForm {
    fn into_context(self) -> Result<SessionContext, AppError> {
        let display_name = self.display_name.trim().to_string();
        let token = self.token.trim().to_string();

        if display_name.is_empty() {
            return Err(AppError::Validation("Display name is required".to_string()));
        }
        if token.is_empty() {
            return Err(AppError::Validation("Access token is required".to_string()));
        }

        Ok(SessionContext::new(display_name, token))
    }
}

/// Stores the hand-off credentials in the session and sends the viewer home.
pub async fn login(session: Session, Form(form): Form<LoginForm>) -> Result<Redirect, AppError> {
    let context = form.into_context()?;

    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    session
        .insert(SESSION_KEY, &context)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!("Session started for {}", context.display_name);
    Ok(Redirect::to("/home"))
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Redirect::to("/login"))
}

/// Sends viewers without a session from a question page to `/login` before
/// any HTML is streamed.
pub async fn require_session(session: Session, request: Request, next: Next) -> Response {
    if !request.uri().path().starts_with("/question/") {
        return next.run(request).await;
    }

    match session.get::<SessionContext>(SESSION_KEY).await {
        Ok(Some(_)) => next.run(request).await,
        Ok(None) => Redirect::to("/login").into_response(),
        Err(e) => {
            tracing::warn!("Unreadable session: {}", e);
            Redirect::to("/login").into_response()
        }
    }
}
