use super::{Answer, Question, QuestionSummary};
use chrono::{DateTime, Utc};

pub const PREVIEW_LIMIT: usize = 150;
pub const ANONYMOUS: &str = "Anonymous";
pub const PLACEHOLDER_AVATAR: &str = "👤";
pub const UNKNOWN_DATE: &str = "Unknown date";

pub const NO_QUESTIONS: &str = "No questions available at the moment.";
pub const NO_ANSWERS: &str = "No answers yet. Be the first to answer this question!";

/// Cuts `body` to [`PREVIEW_LIMIT`] characters and marks the cut with "...".
pub fn preview(body: &str) -> String {
    let mut chars = body.char_indices();
    match chars.nth(PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// First character of the name, uppercased, or the placeholder glyph.
pub fn avatar_glyph(name: Option<&str>) -> String {
    name.map(str::trim)
        .and_then(|n| n.chars().next())
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_string())
}

/// Author shown for a post: the server-provided name, then the viewer's name,
/// then "Anonymous".
pub fn author_label(author: Option<&str>, viewer_name: Option<&str>) -> String {
    non_blank(author)
        .or_else(|| non_blank(viewer_name))
        .unwrap_or(ANONYMOUS)
        .to_string()
}

/// Missing timestamps render as [`UNKNOWN_DATE`] instead of today's date.
pub fn format_date(created_at: Option<DateTime<Utc>>) -> String {
    match created_at {
        Some(ts) => ts.format("%-m/%-d/%Y").to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

pub fn answer_count_heading(count: usize) -> String {
    if count == 1 {
        "1 Answer".to_string()
    } else {
        format!("{} Answers", count)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// One clickable card of the question list.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCard {
    pub href: String,
    pub avatar: String,
    pub author: String,
    pub title: String,
    pub preview: Option<String>,
    pub answers: String,
    pub date: String,
}

impl QuestionCard {
    pub fn from_summary(summary: &QuestionSummary) -> Self {
        let author = author_label(summary.author.as_deref(), None);
        Self {
            href: summary.id.detail_path(),
            avatar: avatar_glyph(non_blank(summary.author.as_deref())),
            author,
            title: summary.title.clone(),
            preview: summary
                .body
                .as_deref()
                .filter(|body| !body.is_empty())
                .map(preview),
            answers: format!("{} answers", summary.answer_count),
            date: format_date(summary.created_at),
        }
    }
}

/// Cards for the list view. An empty result means the empty state is shown.
pub fn question_cards(questions: Option<&[QuestionSummary]>) -> Vec<QuestionCard> {
    questions
        .unwrap_or_default()
        .iter()
        .map(QuestionCard::from_summary)
        .collect()
}

/// Header block of the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionHeader {
    pub title: String,
    pub author: String,
    pub date: String,
    pub body: String,
}

impl QuestionHeader {
    pub fn from_question(question: &Question) -> Self {
        Self {
            title: question.title.clone(),
            author: author_label(question.author.as_deref(), None),
            date: format_date(question.created_at),
            body: question.body.clone(),
        }
    }
}

/// One rendered answer on the detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerEntry {
    pub key: String,
    pub avatar: String,
    pub author: String,
    pub body: String,
    pub date: String,
}

impl AnswerEntry {
    pub fn from_answer(answer: &Answer, index: usize, viewer_name: Option<&str>) -> Self {
        let named = non_blank(answer.author.as_deref()).or_else(|| non_blank(viewer_name));
        Self {
            key: answer.key(index),
            avatar: avatar_glyph(named),
            author: author_label(answer.author.as_deref(), viewer_name),
            body: answer.body.clone(),
            date: format_date(answer.created_at),
        }
    }
}

pub fn answer_entries(answers: &[Answer], viewer_name: Option<&str>) -> Vec<AnswerEntry> {
    answers
        .iter()
        .enumerate()
        .map(|(i, answer)| AnswerEntry::from_answer(answer, i, viewer_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::QuestionId;
    use chrono::TimeZone;

    fn summary(body: Option<&str>, author: Option<&str>) -> QuestionSummary {
        QuestionSummary {
            id: QuestionId::new("42"),
            title: "How do lifetimes work?".to_string(),
            body: body.map(str::to_string),
            author: author.map(str::to_string),
            answer_count: 0,
            created_at: None,
        }
    }

    #[test]
    fn test_preview_truncates_long_body() {
        let body = "a".repeat(200);
        let cut = preview(&body);
        assert_eq!(cut, format!("{}...", "a".repeat(150)));
    }

    #[test]
    fn test_preview_keeps_short_body() {
        let body = "b".repeat(100);
        assert_eq!(preview(&body), body);
        assert_eq!(preview(&"c".repeat(150)), "c".repeat(150));
    }

    #[test]
    fn test_preview_counts_characters_not_bytes() {
        let body = "é".repeat(151);
        assert_eq!(preview(&body), format!("{}...", "é".repeat(150)));
    }

    #[test]
    fn test_avatar_glyph() {
        assert_eq!(avatar_glyph(Some("alice")), "A");
        assert_eq!(avatar_glyph(Some("  bob")), "B");
        assert_eq!(avatar_glyph(Some("")), PLACEHOLDER_AVATAR);
        assert_eq!(avatar_glyph(None), PLACEHOLDER_AVATAR);
    }

    #[test]
    fn test_author_label_fallback_chain() {
        assert_eq!(author_label(Some("carol"), Some("dave")), "carol");
        assert_eq!(author_label(None, Some("dave")), "dave");
        assert_eq!(author_label(Some(" "), None), ANONYMOUS);
        assert_eq!(author_label(None, None), ANONYMOUS);
    }

    #[test]
    fn test_missing_date_is_not_today() {
        assert_eq!(format_date(None), UNKNOWN_DATE);
        let ts = Utc.with_ymd_and_hms(2024, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(format_date(Some(ts)), "3/7/2024");
    }

    #[test]
    fn test_answer_count_heading() {
        assert_eq!(answer_count_heading(0), "0 Answers");
        assert_eq!(answer_count_heading(1), "1 Answer");
        assert_eq!(answer_count_heading(5), "5 Answers");
    }

    #[test]
    fn test_empty_collection_has_no_cards() {
        assert!(question_cards(None).is_empty());
        assert!(question_cards(Some(&[])).is_empty());
    }

    #[test]
    fn test_card_fields() {
        let mut s = summary(Some("x".repeat(200).as_str()), None);
        s.answer_count = 3;
        let card = QuestionCard::from_summary(&s);
        assert_eq!(card.href, "/question/42");
        assert_eq!(card.author, ANONYMOUS);
        assert_eq!(card.avatar, PLACEHOLDER_AVATAR);
        assert_eq!(card.answers, "3 answers");
        assert_eq!(card.preview.unwrap().chars().count(), 153);
    }

    #[test]
    fn test_card_without_body_has_no_preview() {
        let card = QuestionCard::from_summary(&summary(None, Some("erin")));
        assert_eq!(card.preview, None);
        assert_eq!(card.avatar, "E");
    }

    #[test]
    fn test_answer_entry_uses_viewer_when_author_missing() {
        let answer = Answer {
            id: None,
            body: "Use references".to_string(),
            author: None,
            created_at: None,
        };
        let entry = AnswerEntry::from_answer(&answer, 2, Some("frank"));
        assert_eq!(entry.key, "#2");
        assert_eq!(entry.author, "frank");
        assert_eq!(entry.avatar, "F");
        assert_eq!(entry.date, UNKNOWN_DATE);
    }

    #[test]
    fn test_entry_keys_are_stable_when_answers_arrive() {
        let with_id = |id: &str, body: &str| Answer {
            id: Some(id.to_string()),
            body: body.to_string(),
            author: None,
            created_at: None,
        };
        let before = vec![with_id("a1", "first"), Answer { id: None, ..with_id("", "second") }];
        let mut after = before.clone();
        after.push(with_id("a3", "third"));

        let keys = |answers: &[Answer]| {
            answer_entries(answers, None)
                .into_iter()
                .map(|e| e.key)
                .collect::<Vec<_>>()
        };
        assert_eq!(keys(&before), vec!["a1", "#1"]);
        assert_eq!(keys(&after), vec!["a1", "#1", "a3"]);
    }
}
