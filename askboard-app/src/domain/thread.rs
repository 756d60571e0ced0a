use super::{Answer, Question, QuestionId, QuestionThread, SubmitOutcome};
use askboard_errors::AppError;

pub const EMPTY_ANSWER_NOTICE: &str = "Please enter your answer";
pub const POSTED_NOTICE: &str = "Answer posted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Handed out when a submission starts; only the matching completion is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub generation: u64,
    pub question_id: QuestionId,
    pub text: String,
}

/// What the page should do after a submission completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    Stay,
    SignIn,
    /// The completion belonged to an older submission and was dropped.
    Ignored,
}

/// State of a loaded detail page: the question, its answers and the answer form.
///
/// One instance exists per mounted detail page, bound to one question.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadState {
    question: Question,
    answers: Vec<Answer>,
    draft: String,
    submitting: bool,
    notice: Option<Notice>,
    generation: u64,
}

impl ThreadState {
    pub fn new(question: Question, answers: Vec<Answer>) -> Self {
        Self {
            question,
            answers,
            draft: String::new(),
            submitting: false,
            notice: None,
            generation: 0,
        }
    }

    pub fn from_thread(thread: QuestionThread) -> Self {
        Self::new(thread.question, thread.answers)
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.draft.trim().is_empty()
    }

    pub fn set_draft(&mut self, text: String) {
        if !self.submitting {
            self.draft = text;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Starts a submission. Blank drafts are rejected with a notice and no
    /// ticket, so no request is sent.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.submitting {
            return None;
        }
        if self.draft.trim().is_empty() {
            self.notice = Some(Notice::error(EMPTY_ANSWER_NOTICE));
            return None;
        }

        self.generation += 1;
        self.submitting = true;
        self.notice = None;

        Some(SubmitTicket {
            generation: self.generation,
            question_id: self.question.id.clone(),
            text: self.draft.clone(),
        })
    }

    /// Applies a finished submission.
    pub fn finish_submit(&mut self, ticket: &SubmitTicket, outcome: SubmitOutcome) -> AfterSubmit {
        if !self.submitting
            || ticket.generation != self.generation
            || ticket.question_id != self.question.id
        {
            return AfterSubmit::Ignored;
        }
        self.submitting = false;

        match outcome {
            SubmitOutcome::Posted { answers } => {
                self.draft.clear();
                if let Some(answers) = answers {
                    self.answers = answers;
                }
                self.notice = Some(Notice::success(POSTED_NOTICE));
                AfterSubmit::Stay
            }
            SubmitOutcome::SignInRequired => AfterSubmit::SignIn,
            SubmitOutcome::Failed(err) => {
                self.notice = Some(Notice::error(err.submit_notice()));
                AfterSubmit::Stay
            }
        }
    }

    /// Fails the in-flight submission when the transport itself broke.
    pub fn fail_submit(&mut self, ticket: &SubmitTicket, err: AppError) -> AfterSubmit {
        self.finish_submit(ticket, SubmitOutcome::Failed(err))
    }
}
