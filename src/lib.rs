//! Polls the Practicum homework statuses API and sends review status changes to a Telegram
//! chat.
//!
//! The core is [`Poller`], which fetches the latest statuses from a [`HomeworkSource`],
//! formats the most recent one and sends it through a [`Notifier`], remembering the last
//! message delivered so that the same status or failure is not sent twice in a row.

pub mod api;
pub mod config;
pub mod enums;
pub mod error;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod response;
pub mod time;
pub mod types;

mod helpers;
#[cfg(test)]
mod test_server;

pub use api::{HomeworkAPI, HomeworkSource};
pub use config::{Config, LogConfig};
pub use error::{ConfigError, Error};
pub use notifier::{Notifier, TelegramBot};
pub use poller::{Cycle, PollOptions, PollState, Poller};
