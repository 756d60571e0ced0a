use askboard_app::domain::HomeFeed;
use leptos::prelude::*;
use server_fn::ServerFnError;

use crate::components::{LoadingSpinner, QuestionList};

#[server(HomeFeedFn, "/api", endpoint = "home_feed")]
pub async fn home_feed() -> Result<HomeFeed, ServerFnError> {
    use super::server::{app_context, current_session};

    let ctx = app_context()?;
    let session = current_session().await;

    ctx.list_questions
        .execute(session.as_ref())
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let feed = Resource::new(|| (), |_| home_feed());

    view! {
        <div class="hero">
            <h1 class="hero__title">"Questions"</h1>
            <p class="hero__subtitle">"Browse what people are asking and share what you know."</p>
        </div>

        <Suspense fallback=move || view! { <LoadingSpinner label="Loading questions..."/> }>
            {move || {
                feed.get().map(|result| {
                    match result {
                        Ok(feed) => view! {
                            <AuthSection viewer_name=feed.viewer_name/>
                            <QuestionList questions=feed.questions/>
                        }
                        .into_any(),
                        Err(_) => view! {
                            <AuthSection viewer_name=None/>
                            <p class="question-list__error">"Failed to load questions"</p>
                        }
                        .into_any(),
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn AuthSection(viewer_name: Option<String>) -> impl IntoView {
    match viewer_name {
        Some(name) => view! {
            <div class="auth-section auth-section--signed-in">
                <span class="auth-section__name">"Signed in as " <strong>{name}</strong></span>
                <form action="/auth/logout" method="post" class="logout-form">
                    <button type="submit" class="logout-btn">"Logout"</button>
                </form>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="auth-section">
                <a href="/login" class="login-link">"Sign in to answer questions"</a>
            </div>
        }
        .into_any(),
    }
}
