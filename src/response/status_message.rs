use super::Homework;
use crate::error::Error;
use crate::poller::ReportKey;
use crate::types::HomeworkId;
use std::fmt;
use serde_json::Value;

/// A formatted notice about a homework's status.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StatusMessage {
    /// The homework the message is about.
    pub homework_id: Option<HomeworkId>,
    /// The text to send.
    pub text: String,
}

impl StatusMessage {
    /// Creates the message for a homework.
    pub fn new(homework: &Homework) -> Self {
        Self {
            homework_id: homework.id,
            text: format!(
                "Изменился статус проверки работы \"{}\". \n\n{}",
                homework.homework_name,
                homework.status.verdict(),
            ),
        }
    }

    /// The key used to recognize this message when it comes up again.
    pub fn report_key(&self) -> ReportKey {
        ReportKey::Status {
            text: self.text.clone(),
            homework_id: self.homework_id,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Parses a single homework from a response into a [`StatusMessage`].
pub fn parse_status(homework: &Value) -> Result<StatusMessage, Error> {
    let homework = Homework::try_from(homework)?;

    Ok(StatusMessage::new(&homework))
}
