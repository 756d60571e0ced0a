use leptos::prelude::*;

/// Hand-off form for credentials issued by the external auth service.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login">
            <h1 class="login__title">"Sign in"</h1>
            <p class="login__hint">
                "Enter the name to show on your answers and the access token issued by the Q&A service."
            </p>
            <form action="/auth/login" method="post" class="login__form">
                <input
                    type="text"
                    name="display_name"
                    class="login__input"
                    placeholder="Display name"
                    required
                />
                <input
                    type="password"
                    name="token"
                    class="login__input"
                    placeholder="Access token"
                    required
                />
                <button type="submit" class="login__button">"Continue"</button>
            </form>
        </div>
    }
}
