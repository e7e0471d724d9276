//! Enumerated types.

mod homework_status;

pub use homework_status::HomeworkStatus;
