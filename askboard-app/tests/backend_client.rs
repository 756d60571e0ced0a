use askboard_app::application::QaBackend;
use askboard_app::domain::QuestionId;
use askboard_app::infrastructure::backend::BackendClient;
use askboard_app::BoardConfig;
use askboard_errors::AppError;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorded {
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
    posted: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
    fn record(&self, headers: &HeaderMap) {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(auth);
    }
}

async fn spawn_backend(router: Router) -> BackendClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let config = BoardConfig::new(&format!("http://{}", addr)).unwrap();
    BackendClient::new(&config).unwrap()
}

fn board_router(recorded: Recorded) -> Router {
    Router::new()
        .route(
            "/api/question",
            get(|State(rec): State<Recorded>, headers: HeaderMap| async move {
                rec.record(&headers);
                Json(json!([
                    { "question_id": 1, "title": "First", "user_name": "ana", "answer_count": 2 },
                    { "question_id": 2, "title": "Second" }
                ]))
            }),
        )
        .route(
            "/api/question/{id}",
            get(
                |State(rec): State<Recorded>, Path(id): Path<String>, headers: HeaderMap| async move {
                    rec.record(&headers);
                    if id == "404" {
                        return (StatusCode::NOT_FOUND, Json(json!({})));
                    }
                    (
                        StatusCode::OK,
                        Json(json!({
                            "question": {
                                "question_id": id,
                                "title": "How do I share state?",
                                "description": "Between handlers",
                                "created_at": "2024-06-01 09:00:00"
                            }
                        })),
                    )
                },
            ),
        )
        .route(
            "/api/answer/{id}",
            get(
                |State(rec): State<Recorded>, Path(id): Path<String>, headers: HeaderMap| async move {
                    rec.record(&headers);
                    if id == "bare" {
                        return Json(json!([{ "answer": "bare answer" }]));
                    }
                    if id == "weird" {
                        return Json(json!({ "status": "ok" }));
                    }
                    Json(json!({ "answers": [{ "answer_id": 10, "content": "Use State" }] }))
                },
            ),
        )
        .route(
            "/api/answer",
            axum::routing::post(
                |State(rec): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    rec.record(&headers);
                    let text = body["answer"].as_str().unwrap_or_default().to_string();
                    rec.posted.lock().unwrap().push(body);
                    match text.as_str() {
                        "rejected" => (
                            StatusCode::BAD_REQUEST,
                            Json(json!({ "message": "Answer must be longer" })),
                        ),
                        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))),
                        _ => (StatusCode::CREATED, Json(json!({ "msg": "created" }))),
                    }
                },
            ),
        )
        .with_state(recorded)
}

#[tokio::test]
async fn test_fetch_question_sends_bearer_token() {
    let recorded = Recorded::default();
    let client = spawn_backend(board_router(recorded.clone())).await;

    let question = client
        .fetch_question(&QuestionId::new("12"), Some("secret"))
        .await
        .unwrap();

    assert_eq!(question.id, QuestionId::new("12"));
    assert_eq!(question.title, "How do I share state?");
    assert_eq!(question.body, "Between handlers");
    assert!(question.created_at.is_some());
    assert_eq!(
        recorded.auth_headers.lock().unwrap().as_slice(),
        &[Some("Bearer secret".to_string())]
    );
}

#[tokio::test]
async fn test_missing_question_maps_to_not_found() {
    let client = spawn_backend(board_router(Recorded::default())).await;

    let err = client
        .fetch_question(&QuestionId::new("404"), None)
        .await
        .unwrap_err();
    assert_eq!(err, AppError::NotFound);
}

#[tokio::test]
async fn test_answers_in_every_shape() {
    let client = spawn_backend(board_router(Recorded::default())).await;

    let wrapped = client.fetch_answers(&QuestionId::new("1"), None).await.unwrap();
    assert_eq!(wrapped.len(), 1);
    assert_eq!(wrapped[0].id.as_deref(), Some("10"));

    let bare = client.fetch_answers(&QuestionId::new("bare"), None).await.unwrap();
    assert_eq!(bare[0].body, "bare answer");

    let weird = client.fetch_answers(&QuestionId::new("weird"), None).await.unwrap();
    assert!(weird.is_empty());
}

#[tokio::test]
async fn test_list_questions_without_token() {
    let recorded = Recorded::default();
    let client = spawn_backend(board_router(recorded.clone())).await;

    let questions = client.list_questions(None).await.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].answer_count, 2);
    assert_eq!(recorded.auth_headers.lock().unwrap().as_slice(), &[None]);
}

#[tokio::test]
async fn test_post_answer_body_and_errors() {
    let recorded = Recorded::default();
    let client = spawn_backend(board_router(recorded.clone())).await;
    let id = QuestionId::new("7");

    client.post_answer(&id, "Use Arc<Mutex<_>>", "tok").await.unwrap();
    assert_eq!(
        recorded.posted.lock().unwrap()[0],
        json!({ "question_id": "7", "answer": "Use Arc<Mutex<_>>" })
    );

    let err = client.post_answer(&id, "rejected", "tok").await.unwrap_err();
    assert_eq!(err, AppError::Rejected("Answer must be longer".to_string()));
    assert_eq!(err.submit_notice(), "Answer must be longer");

    let err = client.post_answer(&id, "broken", "tok").await.unwrap_err();
    assert!(matches!(err, AppError::Backend(_)));
    assert_eq!(err.submit_notice(), "Failed to post answer");
}
