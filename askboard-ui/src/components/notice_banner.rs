use askboard_app::domain::{Notice, NoticeKind};
use leptos::prelude::*;

/// Inline replacement for alert boxes after a submit attempt.
#[component]
pub fn NoticeBanner(
    #[prop(into)] notice: Signal<Option<Notice>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice--success",
                NoticeKind::Error => "notice notice--error",
            };
            view! {
                <div class=class role="alert">
                    <span class="notice__text">{notice.text}</span>
                    <button class="notice__close" on:click=move |_| on_dismiss.run(())>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
