use askboard_app::domain::presentation::{
    answer_count_heading, answer_entries, QuestionHeader, NO_ANSWERS,
};
use askboard_app::domain::{
    AfterSubmit, DetailLoad, QuestionThread, SubmitOutcome, SubmitTicket, ThreadState,
};
use askboard_errors::AppError;
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_navigate, use_params_map};
use server_fn::ServerFnError;

use crate::components::{AnswerForm, AnswerItem, ErrorDisplay, LoadingSpinner, NoticeBanner};

#[server(LoadQuestionFn, "/api", endpoint = "question_detail")]
pub async fn load_question(id: String) -> Result<DetailLoad, ServerFnError> {
    use super::server::{app_context, current_session};
    use askboard_app::domain::QuestionId;

    let ctx = app_context()?;
    let session = current_session().await;

    Ok(ctx
        .load_question
        .execute(session.as_ref(), &QuestionId::from(id))
        .await)
}

#[server(PostAnswerFn, "/api", endpoint = "post_answer")]
pub async fn post_answer(question_id: String, text: String) -> Result<SubmitOutcome, ServerFnError> {
    use super::server::{app_context, current_session};
    use askboard_app::domain::QuestionId;

    let ctx = app_context()?;
    let session = current_session().await;

    Ok(ctx
        .submit_answer
        .execute(session.as_ref(), &QuestionId::from(question_id), &text)
        .await)
}

#[component]
pub fn QuestionPage() -> impl IntoView {
    let params = use_params_map();
    let question_id = move || params.read().get("id").unwrap_or_default();
    let detail = Resource::new(question_id, load_question);

    view! {
        <Suspense fallback=move || view! { <LoadingSpinner label="Loading question details..."/> }>
            {move || {
                detail.get().map(|result| match result {
                    Ok(DetailLoad::Ready(thread)) => view! {
                        <QuestionThreadView thread=thread/>
                    }
                    .into_any(),
                    Ok(DetailLoad::SignInRequired) => view! { <Redirect path="/login"/> }.into_any(),
                    Ok(DetailLoad::Failed(err)) => view! {
                        <ErrorDisplay message=err.user_message().to_string() back_href="/home"/>
                    }
                    .into_any(),
                    Err(_) => view! {
                        <ErrorDisplay message="Failed to load question details" back_href="/home"/>
                    }
                    .into_any(),
                })
            }}
        </Suspense>
    }
}

/// Populated detail view. Each mount owns one [`ThreadState`]; completions of
/// posts that arrive after the view is gone are dropped.
#[component]
fn QuestionThreadView(thread: QuestionThread) -> impl IntoView {
    let viewer_name = thread.viewer_name.clone();
    let header = QuestionHeader::from_question(&thread.question);
    let state = RwSignal::new(ThreadState::from_thread(thread));
    let navigate = use_navigate();

    let post = Action::new(|ticket: &SubmitTicket| {
        let ticket = ticket.clone();
        async move {
            let outcome = post_answer(ticket.question_id.to_string(), ticket.text.clone())
                .await
                .unwrap_or_else(|e| SubmitOutcome::Failed(AppError::Backend(e.to_string())));
            (ticket, outcome)
        }
    });

    Effect::new(move |_| {
        let Some((ticket, outcome)) = post.value().get() else {
            return;
        };
        let after = state.try_update(|s| s.finish_submit(&ticket, outcome));
        if after == Some(AfterSubmit::SignIn) {
            navigate("/login", Default::default());
        }
    });

    // Only notifies when the entries differ; draft edits never reach the list.
    let entries = Memo::new(move |_| {
        state.with(|s| answer_entries(s.answers(), viewer_name.as_deref()))
    });

    let on_submit = Callback::new(move |_: ()| {
        if let Some(ticket) = state.try_update(|s| s.begin_submit()).flatten() {
            post.dispatch(ticket);
        }
    });

    view! {
        <div class="thread">
            <div class="thread__nav">
                <a href="/home" class="thread__back">"← Back to Questions"</a>
                <h1 class="thread__heading">"Question Details"</h1>
            </div>

            <div class="question">
                <h2 class="question__title">{header.title}</h2>
                <div class="question__meta">
                    <span class="question__author">"Asked by: " <strong>{header.author}</strong></span>
                    <span class="question__date">{header.date}</span>
                </div>
                <p class="question__body">{header.body}</p>
            </div>

            <h3 class="answers__count">
                {move || entries.with(|e| answer_count_heading(e.len()))}
            </h3>
            <div class="answers">
                <Show
                    when=move || entries.with(|e| !e.is_empty())
                    fallback=|| view! {
                        <div class="answers__empty">
                            <p>{NO_ANSWERS}</p>
                        </div>
                    }
                >
                    <For
                        each=move || entries.get()
                        key=|entry| entry.key.clone()
                        children=|entry| view! { <AnswerItem entry=entry/> }
                    />
                </Show>
            </div>

            <NoticeBanner
                notice=Signal::derive(move || state.with(|s| s.notice().cloned()))
                on_dismiss=Callback::new(move |_: ()| state.update(|s| s.dismiss_notice()))
            />

            <AnswerForm
                draft=Signal::derive(move || state.with(|s| s.draft().to_string()))
                on_input=Callback::new(move |text: String| state.update(|s| s.set_draft(text)))
                on_submit=on_submit
                is_submitting=Signal::derive(move || state.with(|s| s.is_submitting()))
                can_submit=Signal::derive(move || state.with(|s| s.can_submit()))
            />
        </div>
    }
}
