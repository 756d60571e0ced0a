use askboard_app::domain::presentation::{question_cards, QuestionCard, NO_QUESTIONS};
use askboard_app::domain::QuestionSummary;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Renders the summaries handed in by the parent page. Clicking a card opens
/// the question; nothing here talks to the backend.
#[component]
pub fn QuestionList(#[prop(optional)] questions: Option<Vec<QuestionSummary>>) -> impl IntoView {
    let cards = question_cards(questions.as_deref());

    if cards.is_empty() {
        return view! {
            <div class="question-list__empty">
                <p>{NO_QUESTIONS}</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="question-list">
            {cards.into_iter().map(|card| view! { <QuestionCardView card=card/> }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

#[component]
fn QuestionCardView(card: QuestionCard) -> impl IntoView {
    let navigate = use_navigate();
    let href = card.href.clone();

    view! {
        <div
            class="question-card"
            on:click=move |_| navigate(&href, Default::default())
        >
            <div class="question-card__profile">
                <span class="avatar">{card.avatar}</span>
                <p class="question-card__author">{card.author}</p>
            </div>
            <div class="question-card__content">
                <h3 class="question-card__title">{card.title}</h3>
                {card.preview.map(|text| view! {
                    <p class="question-card__preview">{text}</p>
                })}
                <div class="question-card__meta">
                    <span class="question-card__answers">{card.answers}</span>
                    <span class="question-card__date">{card.date}</span>
                </div>
            </div>
            <div class="question-card__arrow">">"</div>
        </div>
    }
}
