mod app_error;

pub use app_error::{AppError, GENERIC_SUBMIT_FAILURE};
