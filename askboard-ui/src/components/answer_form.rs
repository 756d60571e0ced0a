use leptos::prelude::*;

#[component]
pub fn AnswerForm(
    #[prop(into)] draft: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] is_submitting: Signal<bool>,
    #[prop(into)] can_submit: Signal<bool>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="answer-form">
            <h3 class="answer-form__title">"Your Answer"</h3>
            <form on:submit=on_form_submit>
                <textarea
                    class="answer-form__input"
                    placeholder="Post your answer"
                    rows="6"
                    prop:value=move || draft.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    prop:disabled=move || is_submitting.get()
                ></textarea>
                <button
                    type="submit"
                    class="answer-form__button"
                    prop:disabled=move || !can_submit.get()
                >
                    {move || if is_submitting.get() { "Posting Answer..." } else { "Post Your Answer" }}
                </button>
            </form>
        </div>
    }
}
