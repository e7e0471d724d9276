//! Delivery of messages to the chat.

mod telegram;

pub use telegram::{TelegramBot, TelegramBotBuilder};

use crate::error::Error;

/// Sends text messages to a single destination.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Sends `text`. Fails if the message was not accepted.
    async fn send_message(&self, text: &str) -> Result<(), Error>;
}
