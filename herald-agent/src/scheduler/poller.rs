//! Status poller
//!
//! Polls the status API, turns the latest homework status into a chat
//! message and delivers it when it differs from the last one sent.
//! One cycle runs to completion before the next one starts. Every cycle
//! failure is reported to the chat; none of them stops the loop.

use std::sync::Arc;

use herald_core::{check_response, current_date, parse_status};
use serde_json::Value;
use tokio::sync::watch;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};

use crate::context::PollContext;
use crate::error::CycleError;
use crate::repository::{Notifier, StatusRepository};
use crate::service::{failure_message, should_send};

/// What a single poll cycle ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message was delivered
    Notified,
    /// The latest status was already announced
    Unchanged,
    /// The response carried no homework records
    NoHomeworks,
    /// The cycle failed; the failure went through the report path
    Failed,
}

/// Poller that continuously checks for homework status changes
pub struct StatusPoller {
    poll_interval: Duration,
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    context: PollContext,
}

impl StatusPoller {
    /// Creates a poller whose cursor starts at the current time
    pub fn new(
        poll_interval: Duration,
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::with_context(poll_interval, statuses, notifier, PollContext::starting_now())
    }

    /// Creates a poller resuming from an existing context
    pub fn with_context(
        poll_interval: Duration,
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
        context: PollContext,
    ) -> Self {
        Self {
            poll_interval,
            statuses,
            notifier,
            context,
        }
    }

    pub fn context(&self) -> &PollContext {
        &self.context
    }

    /// Starts the polling loop
    ///
    /// Runs until `shutdown` turns `true`. The signal is only observed while
    /// waiting between cycles; a cycle in progress always completes.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.poll_interval,
            self.context.cursor()
        );

        loop {
            let outcome = self.poll_once().await;
            debug!("Poll cycle finished: {:?}", outcome);

            tokio::select! {
                _ = time::sleep(self.poll_interval) => {}
                _ = shutdown_requested(&mut shutdown) => {
                    info!("Shutdown requested, stopping status poller");
                    return;
                }
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// Never fails: errors are reported through the chat and folded into
    /// [`CycleOutcome::Failed`].
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let from_date = self.context.effective_cursor();

        let response = match self.statuses.fetch_statuses(from_date).await {
            Ok(response) => response,
            Err(e) => {
                self.report_failure(e.into()).await;
                return CycleOutcome::Failed;
            }
        };

        let outcome = match self.process(&response).await {
            Ok(outcome) => outcome,
            Err(e) => {
                self.report_failure(e).await;
                CycleOutcome::Failed
            }
        };

        self.context.advance_cursor(current_date(&response));
        outcome
    }

    async fn process(&mut self, response: &Value) -> Result<CycleOutcome, CycleError> {
        let homeworks = check_response(response)?;

        let Some(latest) = homeworks.first() else {
            debug!("No new statuses in the response");
            return Ok(CycleOutcome::NoHomeworks);
        };

        let message = parse_status(latest)?;

        if !should_send(&message, self.context.last_sent()) {
            debug!("No new status");
            return Ok(CycleOutcome::Unchanged);
        }

        self.notifier.send(&message).await?;
        info!("Message sent: {}", message);
        self.context.record_sent(message);

        Ok(CycleOutcome::Notified)
    }

    /// Reports a cycle failure to the chat
    ///
    /// Delivery problems here are logged and swallowed.
    async fn report_failure(&mut self, error: CycleError) {
        let message = failure_message(&error);
        error!("{}", message);

        if !should_send(&message, self.context.last_sent()) {
            debug!("Failure already reported, not repeating it");
            return;
        }

        match self.notifier.send(&message).await {
            Ok(()) => {
                info!("Failure report sent");
                self.context.record_sent(message);
            }
            Err(e) => error!("Failed to report failure to the chat: {}", e),
        }
    }
}

/// Resolves once the shutdown flag is set
///
/// If the sender is gone the flag can no longer change and this never resolves.
async fn shutdown_requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
