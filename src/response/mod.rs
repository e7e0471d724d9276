//! Models and parsing for homework statuses responses.

mod homework;
mod homework_statuses;
mod status_message;

pub use homework::Homework;
pub use homework_statuses::{check_response, current_date};
pub use status_message::{StatusMessage, parse_status};
