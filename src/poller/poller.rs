use super::{Cycle, PollOptions, PollState, ReportKey};
use crate::api::HomeworkSource;
use crate::error::Error;
use crate::notifier::Notifier;
use crate::response::{check_response, current_date, parse_status};
use crate::time::timestamp_to_date;

/// Polls a [`HomeworkSource`] and reports status changes and failures through a [`Notifier`].
/// Only one poll runs at a time.
#[derive(Debug)]
pub struct Poller<S, N> {
    pub source: S,
    pub notifier: N,
    pub options: PollOptions,
}

impl<S, N> Poller<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    pub fn new(source: S, notifier: N, options: PollOptions) -> Self {
        Self {
            source,
            notifier,
            options,
        }
    }

    /// Polls forever, waiting between polls according to the outcome of each.
    pub async fn run(&self, mut state: PollState) {
        log::info!(
            "Polling every {}s ({}s after a failure)",
            self.options.retry_time.as_secs(),
            self.options.error_retry_time.as_secs(),
        );

        loop {
            let (next_state, cycle) = self.run_cycle(state).await;
            let interval = self.options.interval_for(&cycle);

            state = next_state;
            log::debug!("Next poll in {}s", interval.as_secs());
            tokio::time::sleep(interval).await;
        }
    }

    /// Performs a single poll. Failures are reported and folded into the returned [`Cycle`].
    pub async fn run_cycle(&self, mut state: PollState) -> (PollState, Cycle) {
        let cycle = match self.check_updates(&mut state).await {
            Ok(cycle) => cycle,
            Err(error) => self.report_failure(&mut state, error).await,
        };

        (state, cycle)
    }

    async fn check_updates(&self, state: &mut PollState) -> Result<Cycle, Error> {
        match timestamp_to_date(state.last_seen_timestamp) {
            Some(date) => log::debug!("Requesting homework statuses since {date}"),
            None => log::debug!("Requesting homework statuses since {}", state.last_seen_timestamp),
        }

        let response = self.source.get_homework_statuses(state.last_seen_timestamp).await?;
        let homeworks = check_response(&response)?;
        let current_date = current_date(&response);
        let Some(homework) = homeworks.first() else {
            if self.options.empty_is_error {
                return Err(Error::NoHomeworks);
            }

            log::debug!("No homework status changes");
            state.advance(current_date);
            return Ok(Cycle::NoUpdates);
        };
        let message = parse_status(homework)?;
        let key = message.report_key();

        if state.is_reported(&key) {
            log::debug!("Status already reported: {message}");
            state.advance(current_date);
            return Ok(Cycle::AlreadyReported);
        }

        if let Err(error) = self.notify(&message.text).await {
            // The state is left as is so the next poll tries to send it again. The notifier
            // just failed so this failure is not sent through it.
            return Ok(Cycle::Failed {
                error,
                notified: false,
            });
        }

        state.advance(current_date);
        state.set_reported(key);
        Ok(Cycle::Notified(message))
    }

    async fn report_failure(&self, state: &mut PollState, error: Error) -> Cycle {
        let message = format!("Сбой в работе программы: {error}");

        log::error!("{message}");

        let key = ReportKey::Failure(message.clone());

        if state.is_reported(&key) {
            log::debug!("Failure already reported");
            return Cycle::Failed {
                error,
                notified: false,
            };
        }

        let notified = self.notify(&message).await.is_ok();

        if notified {
            state.set_reported(key);
        }

        Cycle::Failed {
            error,
            notified,
        }
    }

    async fn notify(&self, text: &str) -> Result<(), Error> {
        match self.notifier.send_message(text).await {
            Ok(()) => {
                log::info!("Sent message: {text}");
                Ok(())
            },
            Err(error) => {
                log::error!("Error sending message \"{text}\": {error}");
                Err(error)
            },
        }
    }
}
