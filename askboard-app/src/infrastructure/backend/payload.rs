//! Normalization of backend payloads.
//!
//! The backend is inconsistent about response shapes, so every read goes
//! through one of the functions here:
//!
//! - collections may arrive wrapped (`{ "answers": [...] }`) or bare (`[...]`);
//!   any other shape becomes an empty list and entries that cannot be read are
//!   skipped;
//! - a single question may arrive wrapped (`{ "question": {...} }`) or bare;
//! - ids may be JSON numbers or strings, under `question_id`/`answer_id` or `id`;
//! - bodies live under `description` or `content` (questions) and `content` or
//!   `answer` (answers);
//! - timestamps may be RFC 3339, `YYYY-MM-DD HH:MM:SS`, a plain date or epoch
//!   milliseconds. Anything else is an unknown date, never "now".

use crate::domain::{Answer, Question, QuestionId, QuestionSummary};
use askboard_errors::AppError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(u64),
    Text(String),
}

impl RawCount {
    fn value(&self) -> u32 {
        match self {
            Self::Number(n) => u32::try_from(*n).unwrap_or(u32::MAX),
            Self::Text(s) => s.trim().parse().unwrap_or(0),
        }
    }
}

/// Optional metadata is read leniently: a value of the wrong type is treated
/// as absent instead of failing the whole entry.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(default, deserialize_with = "lenient")]
    question_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    user_name: Option<String>,
    created_at: Option<Value>,
}

impl RawQuestion {
    fn id(&mut self) -> Option<String> {
        self.question_id
            .take()
            .or_else(|| self.id.take())
            .map(RawId::into_string)
    }

    fn body(&mut self) -> Option<String> {
        first_filled(self.description.take(), self.content.take())
    }
}

#[derive(Debug, Deserialize)]
struct RawAnswer {
    #[serde(default, deserialize_with = "lenient")]
    answer_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    content: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    answer: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    user_name: Option<String>,
    created_at: Option<Value>,
}

impl From<RawAnswer> for Answer {
    fn from(raw: RawAnswer) -> Self {
        Self {
            id: raw.answer_id.or(raw.id).map(RawId::into_string),
            body: first_filled(raw.content, raw.answer).unwrap_or_default(),
            author: raw.user_name,
            created_at: parse_timestamp(raw.created_at),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Body of `POST /api/answer`.
#[derive(Debug, Serialize)]
pub struct NewAnswer<'a> {
    pub question_id: &'a str,
    pub answer: &'a str,
}

/// Error body the backend sends alongside non-success statuses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorPayload {
    pub message: Option<String>,
}

impl ErrorPayload {
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

pub fn question_from_value(value: Value, requested: &QuestionId) -> Result<Question, AppError> {
    let inner = unwrap_envelope(value, "question");
    if !inner.is_object() {
        return Err(AppError::Decode("question payload is not an object".to_string()));
    }

    let mut raw: RawQuestion =
        serde_json::from_value(inner).map_err(|e| AppError::Decode(e.to_string()))?;

    Ok(Question {
        id: raw.id().map(QuestionId::from).unwrap_or_else(|| requested.clone()),
        title: raw.title.take().unwrap_or_default(),
        body: raw.body().unwrap_or_default(),
        author: raw.user_name.take(),
        created_at: parse_timestamp(raw.created_at.take()),
    })
}

pub fn answers_from_value(value: Value) -> Vec<Answer> {
    collection(value, "answers")
        .filter_map(|item| serde_json::from_value::<RawAnswer>(item).ok())
        .map(Answer::from)
        .collect()
}

/// Summaries without an id cannot be navigated to and are dropped.
pub fn questions_from_value(value: Value) -> Vec<QuestionSummary> {
    collection(value, "questions")
        .filter_map(|item| {
            let count = answer_count(item.get("answer_count"));
            let raw = serde_json::from_value::<RawQuestion>(item).ok()?;
            Some((raw, count))
        })
        .filter_map(|(mut raw, count)| {
            let id = raw.id()?;
            Some(QuestionSummary {
                id: QuestionId::from(id),
                title: raw.title.take().unwrap_or_default(),
                body: raw.body(),
                author: raw.user_name.take(),
                answer_count: count,
                created_at: parse_timestamp(raw.created_at.take()),
            })
        })
        .collect()
}

/// Only the list view reads `answer_count`. Negative, fractional or
/// unreadable counts show as zero.
fn answer_count(value: Option<&Value>) -> u32 {
    value
        .cloned()
        .and_then(|v| serde_json::from_value::<RawCount>(v).ok())
        .map(|count| count.value())
        .unwrap_or(0)
}

fn collection(value: Value, key: &str) -> impl Iterator<Item = Value> {
    let items = match unwrap_envelope(value, key) {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    items.into_iter()
}

fn unwrap_envelope(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) if map.contains_key(key) => map.remove(key).unwrap_or(Value::Null),
        other => other,
    }
}

fn first_filled(primary: Option<String>, secondary: Option<String>) -> Option<String> {
    primary
        .filter(|s| !s.is_empty())
        .or(secondary.filter(|s| !s.is_empty()))
}

fn parse_timestamp(value: Option<Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_timestamp_str(s.trim()),
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|d| d.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_wrapped_and_bare_answers() {
        let wrapped = json!({ "answers": [{ "answer_id": 1, "content": "first" }] });
        let bare = json!([{ "id": "a2", "answer": "second", "user_name": "lee" }]);

        let wrapped = answers_from_value(wrapped);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].id.as_deref(), Some("1"));
        assert_eq!(wrapped[0].body, "first");

        let bare = answers_from_value(bare);
        assert_eq!(bare[0].id.as_deref(), Some("a2"));
        assert_eq!(bare[0].body, "second");
        assert_eq!(bare[0].author.as_deref(), Some("lee"));
    }

    #[test]
    fn test_unexpected_answer_shapes_become_empty() {
        assert!(answers_from_value(json!({ "msg": "no answers" })).is_empty());
        assert!(answers_from_value(json!({ "answers": null })).is_empty());
        assert!(answers_from_value(json!("oops")).is_empty());
    }

    #[test]
    fn test_unreadable_entries_are_skipped() {
        let answers = answers_from_value(json!([{ "content": "ok" }, 17, { "content": "also ok" }]));
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_question_wrapped_or_bare() {
        let requested = QuestionId::new("9");
        let wrapped = json!({
            "question": {
                "question_id": 9,
                "title": "Borrowing in loops",
                "description": "",
                "content": "Why does this not compile?",
                "user_name": "mo",
                "created_at": "2024-02-01T08:30:00Z"
            }
        });
        let q = question_from_value(wrapped, &requested).unwrap();
        assert_eq!(q.id, requested);
        assert_eq!(q.body, "Why does this not compile?");
        assert_eq!(q.author.as_deref(), Some("mo"));
        assert_eq!(q.created_at, Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap()));

        let bare = json!({ "title": "No id here", "description": "body" });
        let q = question_from_value(bare, &requested).unwrap();
        assert_eq!(q.id, requested);
        assert_eq!(q.body, "body");
        assert_eq!(q.created_at, None);
    }

    #[test]
    fn test_null_question_is_an_error() {
        let err = question_from_value(json!({ "question": null }), &QuestionId::new("1"));
        assert!(matches!(err, Err(AppError::Decode(_))));
    }

    #[test]
    fn test_question_list_normalization() {
        let list = questions_from_value(json!({
            "questions": [
                { "question_id": "q1", "title": "One", "answer_count": "4" },
                { "title": "No id" },
                { "id": 2, "title": "Two", "content": "text", "answer_count": 1 }
            ]
        }));
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].answer_count, 4);
        assert_eq!(list[0].body, None);
        assert_eq!(list[1].id, QuestionId::new("2"));
        assert_eq!(list[1].body.as_deref(), Some("text"));
    }

    #[test]
    fn test_odd_metadata_does_not_fail_question() {
        let requested = QuestionId::new("1");
        let q = question_from_value(
            json!({ "question": {
                "question_id": 1,
                "title": "t",
                "description": "d",
                "answer_count": 2.5
            }}),
            &requested,
        )
        .unwrap();
        assert_eq!(q.title, "t");
        assert_eq!(q.body, "d");

        let q = question_from_value(
            json!({ "title": "t", "description": "d", "user_name": 7, "question_id": [1] }),
            &requested,
        )
        .unwrap();
        assert_eq!(q.author, None);
        assert_eq!(q.id, requested);
    }

    #[test]
    fn test_odd_counts_keep_summaries() {
        let list = questions_from_value(json!([
            { "question_id": 1, "title": "One", "answer_count": -1 },
            { "question_id": 2, "title": 5, "answer_count": 2.5, "user_name": false },
            { "question_id": 3, "title": "Three", "answer_count": 7 }
        ]));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].answer_count, 0);
        assert_eq!(list[1].answer_count, 0);
        assert_eq!(list[1].title, "");
        assert_eq!(list[1].author, None);
        assert_eq!(list[2].answer_count, 7);
    }

    #[test]
    fn test_odd_answer_fields_keep_answer() {
        let answers = answers_from_value(json!([{ "answer_id": 4, "content": "ok", "user_name": 12 }]));
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].body, "ok");
        assert_eq!(answers[0].author, None);
    }

    #[test]
    fn test_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2023, 11, 5, 14, 2, 3).unwrap();
        assert_eq!(parse_timestamp(Some(json!("2023-11-05 14:02:03"))), Some(expected));
        assert_eq!(parse_timestamp(Some(json!("2023-11-05T14:02:03.000Z"))), Some(expected));
        assert_eq!(
            parse_timestamp(Some(json!(expected.timestamp_millis()))),
            Some(expected)
        );
        assert_eq!(
            parse_timestamp(Some(json!("2023-11-05"))),
            Some(Utc.with_ymd_and_hms(2023, 11, 5, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_timestamp(Some(json!("yesterday"))), None);
        assert_eq!(parse_timestamp(None), None);
    }

    #[test]
    fn test_error_payload_message() {
        assert_eq!(
            ErrorPayload::from_body(r#"{"message":"Answer too short"}"#).message.as_deref(),
            Some("Answer too short")
        );
        assert_eq!(ErrorPayload::from_body("<html>502</html>").message, None);
    }
}
