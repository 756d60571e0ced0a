mod auth;

use axum::{middleware, routing::post, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use askboard_app::AppContext;
use askboard_ui::pages::{HomeFeedFn, LoadQuestionFn, PostAnswerFn};
use askboard_ui::App;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = match AppContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(app_context.config.secure_cookies);

    let routes = generate_route_list(App);

    server_fn::axum::register_explicit::<HomeFeedFn>();
    server_fn::axum::register_explicit::<LoadQuestionFn>();
    server_fn::axum::register_explicit::<PostAnswerFn>();
    tracing::info!("Registered server functions: HomeFeedFn, LoadQuestionFn, PostAnswerFn");

    let app = Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/api/{*fn_name}", post({
            let ctx = app_context.clone();
            move |req| {
                let ctx = ctx.clone();
                async move {
                    handle_server_fns_with_context(
                        move || provide_context(ctx.clone()),
                        req
                    ).await
                }
            }
        }))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let ctx = app_context.clone();
                move || provide_context(ctx.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(session_layer)
                .layer(middleware::from_fn(auth::require_session)),
        )
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

fn shell(options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #faf4ed;
            --surface: #fffaf3;
            --overlay: #f2e9e1;
            --muted: #9893a5;
            --subtle: #797593;
            --text: #575279;
            --love: #b4637a;
            --gold: #ea9d34;
            --pine: #286983;
            --foam: #56949f;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            min-height: 100vh;
        }
        a { color: var(--pine); }
        .container { max-width: 800px; margin: 0 auto; padding: 1.5rem; }
        .hero { text-align: center; padding: 2.5rem 0 1.5rem; }
        .hero__title { font-size: clamp(2rem, 5vw, 2.75rem); color: var(--pine); font-weight: 800; margin-bottom: 0.5rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1.05rem; }
        .avatar {
            display: inline-flex; align-items: center; justify-content: center;
            width: 2.25rem; height: 2.25rem; border-radius: 50%;
            background: var(--foam); color: var(--base); font-weight: 700;
        }
        .auth-section { display: flex; justify-content: flex-end; align-items: center; gap: 1rem; margin-bottom: 1rem; }
        .logout-btn, .login__button, .answer-form__button {
            padding: 0.6rem 1.25rem; background: var(--love); color: var(--base);
            border: none; border-radius: 8px; font-weight: 600; cursor: pointer;
        }
        .answer-form__button:disabled { background: var(--muted); cursor: not-allowed; }
        .question-list { display: flex; flex-direction: column; gap: 0.75rem; }
        .question-list__empty, .question-list__error, .answers__empty { text-align: center; color: var(--subtle); padding: 2rem 0; }
        .question-card {
            display: flex; gap: 1rem; align-items: flex-start; cursor: pointer;
            background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1rem;
        }
        .question-card:hover { border-color: var(--foam); }
        .question-card__profile { display: flex; flex-direction: column; align-items: center; min-width: 5rem; font-size: 0.85rem; }
        .question-card__content { flex: 1; }
        .question-card__title { color: var(--text); margin-bottom: 0.35rem; }
        .question-card__preview { color: var(--subtle); margin-bottom: 0.5rem; }
        .question-card__meta { display: flex; gap: 1rem; color: var(--muted); font-size: 0.85rem; }
        .question-card__arrow { color: var(--muted); align-self: center; }
        .thread__nav { display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem; }
        .thread__heading { font-size: 1.4rem; }
        .question { background: var(--surface); border: 2px solid var(--overlay); border-radius: 12px; padding: 1.5rem; }
        .question__title { color: var(--love); margin-bottom: 0.75rem; }
        .question__meta { display: flex; justify-content: space-between; color: var(--subtle); font-size: 0.9rem; margin-bottom: 1rem; }
        .question__body { line-height: 1.7; white-space: pre-wrap; }
        .answers__count { margin: 1.5rem 0 0.75rem; }
        .answers { display: flex; flex-direction: column; gap: 0.75rem; }
        .answer { background: var(--surface); border: 1px solid var(--overlay); border-radius: 8px; padding: 1rem; }
        .answer__header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
        .answer__author { display: flex; align-items: center; gap: 0.5rem; font-weight: 600; }
        .answer__date { color: var(--muted); font-size: 0.85rem; }
        .answer__body { white-space: pre-wrap; line-height: 1.6; }
        .notice { display: flex; justify-content: space-between; border-radius: 8px; padding: 0.75rem 1rem; margin-top: 1.25rem; }
        .notice--success { background: #e3f1ee; color: var(--pine); }
        .notice--error { background: #fce8ec; color: #8b3d4d; }
        .notice__close { background: none; border: none; font-size: 1.1rem; cursor: pointer; color: inherit; }
        .answer-form { margin-top: 1.5rem; }
        .answer-form__title { margin-bottom: 0.75rem; }
        .answer-form__input, .login__input {
            width: 100%; padding: 0.9rem 1rem; border: 2px solid var(--overlay);
            border-radius: 8px; background: var(--surface); color: var(--text); font-size: 1rem; margin-bottom: 0.75rem;
        }
        .answer-form__input:focus, .login__input:focus { outline: none; border-color: var(--pine); }
        .login { max-width: 420px; margin: 3rem auto; }
        .login__title { color: var(--pine); margin-bottom: 0.5rem; }
        .login__hint { color: var(--subtle); margin-bottom: 1.25rem; }
        .loading { display: flex; flex-direction: column; align-items: center; padding: 3rem; }
        .loading__spinner {
            width: 50px; height: 50px; border: 4px solid var(--overlay);
            border-top-color: var(--gold); border-radius: 50%; animation: spin 1s linear infinite;
        }
        @keyframes spin { to { transform: rotate(360deg); } }
        .loading__text { margin-top: 1rem; color: var(--subtle); font-style: italic; }
        .error { background: #fce8ec; border: 2px solid var(--love); border-radius: 8px; padding: 1.25rem; margin: 2rem 0; }
        .error__title { color: var(--love); font-weight: 700; margin-bottom: 0.5rem; }
        .error__message { color: #8b3d4d; margin-bottom: 1rem; }
        .error__back { display: inline-block; padding: 0.5rem 1rem; background: var(--love); color: var(--base); border-radius: 4px; text-decoration: none; }
    "#;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"AskBoard"</title>
                <style>{css}</style>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}
