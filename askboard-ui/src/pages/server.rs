use askboard_app::domain::{SessionContext, SESSION_KEY};
use askboard_app::AppContext;
use leptos::prelude::*;
use server_fn::ServerFnError;
use tower_sessions::Session;

pub(crate) fn app_context() -> Result<AppContext, ServerFnError> {
    use_context::<AppContext>().ok_or_else(|| ServerFnError::new("AppContext not provided"))
}

/// Session context of the current request, if the viewer handed one over.
pub(crate) async fn current_session() -> Option<SessionContext> {
    let session = match leptos_axum::extract::<Session>().await {
        Ok(session) => session,
        Err(e) => {
            tracing::warn!("No session layer on request: {}", e);
            return None;
        }
    };

    match session.get::<SessionContext>(SESSION_KEY).await {
        Ok(context) => context,
        Err(e) => {
            tracing::warn!("Unreadable session: {}", e);
            None
        }
    }
}
