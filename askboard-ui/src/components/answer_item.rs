use askboard_app::domain::presentation::AnswerEntry;
use leptos::prelude::*;

#[component]
pub fn AnswerItem(entry: AnswerEntry) -> impl IntoView {
    view! {
        <div class="answer">
            <div class="answer__header">
                <div class="answer__author">
                    <span class="avatar">{entry.avatar}</span>
                    <span class="answer__name">{entry.author}</span>
                </div>
                <span class="answer__date">{entry.date}</span>
            </div>
            <p class="answer__body">{entry.body}</p>
        </div>
    }
}
