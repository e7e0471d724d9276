//! The poll loop.

mod poll_state;
mod poller;

pub use poll_state::{PollState, ReportKey};
pub use poller::Poller;

use crate::error::Error;
use crate::response::StatusMessage;
use std::time::Duration;

/// Options for polling.
#[derive(Debug, Clone, Copy)]
pub struct PollOptions {
    /// Interval to wait after a successful poll. Default is 10 minutes.
    pub retry_time: Duration,
    /// Interval to wait after a failed poll. Default is 20 minutes.
    pub error_retry_time: Duration,
    /// Treat a response without homeworks as a failure. Default is `false`, which quietly
    /// moves on to the next poll.
    pub empty_is_error: bool,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            retry_time: Duration::from_secs(60 * 10),
            error_retry_time: Duration::from_secs(60 * 20),
            empty_is_error: false,
        }
    }
}

impl PollOptions {
    /// How long to wait before polling again after `cycle`.
    pub fn interval_for(&self, cycle: &Cycle) -> Duration {
        if cycle.is_failure() {
            self.error_retry_time
        } else {
            self.retry_time
        }
    }
}

/// The outcome of a single poll.
#[derive(Debug)]
pub enum Cycle {
    /// A status change was sent.
    Notified(StatusMessage),
    /// The latest status was already sent.
    AlreadyReported,
    /// The response contained no homeworks.
    NoUpdates,
    /// The poll failed. `notified` is whether the failure was sent to the chat.
    Failed {
        error: Error,
        notified: bool,
    },
}

impl Cycle {
    /// Whether the poll failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
