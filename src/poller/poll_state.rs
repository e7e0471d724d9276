use crate::time::Timestamp;
use crate::types::HomeworkId;

/// Identifies a delivered message so that it is not sent twice in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKey {
    /// A status change for a homework.
    Status {
        text: String,
        homework_id: Option<HomeworkId>,
    },
    /// A failure message.
    Failure(String),
}

/// The state carried from one poll to the next. Lives in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Where to fetch statuses since on the next poll.
    pub last_seen_timestamp: Timestamp,
    /// The last message that was delivered.
    pub last_reported_key: Option<ReportKey>,
}

impl PollState {
    /// Creates a state that fetches statuses since `last_seen_timestamp` with nothing reported.
    pub fn new(last_seen_timestamp: Timestamp) -> Self {
        Self {
            last_seen_timestamp,
            last_reported_key: None,
        }
    }

    /// Whether `key` was the last message delivered.
    pub fn is_reported(&self, key: &ReportKey) -> bool {
        self.last_reported_key.as_ref() == Some(key)
    }

    /// Records `key` as the last message delivered.
    pub fn set_reported(&mut self, key: ReportKey) {
        self.last_reported_key = Some(key);
    }

    /// Moves `last_seen_timestamp` to the server time of a response. Keeps the previous value
    /// if the response did not include one.
    pub fn advance(&mut self, current_date: Option<Timestamp>) {
        if let Some(current_date) = current_date {
            self.last_seen_timestamp = current_date;
        }
    }
}
