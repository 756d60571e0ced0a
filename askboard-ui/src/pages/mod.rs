mod home;
mod login;
mod question;

#[cfg(feature = "ssr")]
mod server;

pub use home::{HomeFeedFn, HomePage};
pub use login::LoginPage;
pub use question::{LoadQuestionFn, PostAnswerFn, QuestionPage};
