use leptos::prelude::*;

#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional, into)] back_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error">
            <p class="error__title">"Error loading question"</p>
            <p class="error__message">{message}</p>
            {back_href.map(|href| view! {
                <a href=href class="error__back">"Back to Home"</a>
            })}
        </div>
    }
}
