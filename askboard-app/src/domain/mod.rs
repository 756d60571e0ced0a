mod answer;
mod outcome;
pub mod presentation;
mod question;
mod session;
mod thread;

pub use answer::Answer;
pub use outcome::{DetailLoad, HomeFeed, QuestionThread, SubmitOutcome};
pub use question::{Question, QuestionId, QuestionSummary};
pub use session::{SessionContext, SESSION_KEY};
pub use thread::{AfterSubmit, Notice, NoticeKind, SubmitTicket, ThreadState};
pub use thread::{EMPTY_ANSWER_NOTICE, POSTED_NOTICE};
