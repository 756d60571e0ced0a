mod answer_form;
mod answer_item;
mod error_display;
mod loading_spinner;
mod notice_banner;
mod question_list;

pub use answer_form::AnswerForm;
pub use answer_item::AnswerItem;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use notice_banner::NoticeBanner;
pub use question_list::QuestionList;
