mod list_questions;
mod load_question;
mod qa_backend;
mod submit_answer;

pub use list_questions::ListQuestions;
pub use load_question::LoadQuestionDetail;
pub use qa_backend::QaBackend;
pub use submit_answer::SubmitAnswer;
