//! Submission manager.
//!
//! Owns the HTTP client and the one cancelable dismiss-timer handle. Each
//! accepted submission spawns a background POST task whose settlement comes
//! back to the main loop as [`AppEvent::SubmitSettled`]; each settlement arms
//! a timer whose firing comes back as [`AppEvent::DismissToast`]. At most one
//! timer handle is ever live: arming a new one or starting a new submission
//! aborts the old handle, and dropping the manager releases it on teardown.

use crate::app::event::{AppEvent, AttemptId};
use crate::config::model::EndpointConfig;
use crate::form::FormFields;
use crate::submit::SubmitError;
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct SubmitManager {
    client: reqwest::Client,
    endpoint: String,
    toast_duration: Duration,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    dismiss_timer: Option<JoinHandle<()>>,
}

impl SubmitManager {
    pub fn new(config: &EndpointConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: config.url.clone(),
            toast_duration: config.toast_duration(),
            event_tx,
            dismiss_timer: None,
        })
    }

    /// Issue the single POST for an accepted submission. A dismiss timer
    /// still pending from an earlier attempt is released first so it cannot
    /// fire while this attempt is in flight.
    pub fn submit(&mut self, attempt: AttemptId, fields: FormFields) {
        self.release_dismiss_timer();

        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = post_fields(&client, &endpoint, &fields).await;
            let _ = event_tx.send(AppEvent::SubmitSettled { attempt, outcome });
        });
    }

    /// Arm the dismiss timer for a settled attempt, replacing (and thereby
    /// canceling) any previously armed one.
    pub fn arm_dismiss_timer(&mut self, attempt: AttemptId) {
        self.release_dismiss_timer();

        let event_tx = self.event_tx.clone();
        let duration = self.toast_duration;
        self.dismiss_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let _ = event_tx.send(AppEvent::DismissToast { attempt });
        }));
    }

    fn release_dismiss_timer(&mut self) {
        if let Some(handle) = self.dismiss_timer.take() {
            handle.abort();
        }
    }
}

impl Drop for SubmitManager {
    fn drop(&mut self) {
        self.release_dismiss_timer();
    }
}

async fn post_fields(
    client: &reqwest::Client,
    endpoint: &str,
    fields: &FormFields,
) -> Result<(), SubmitError> {
    let response = client.post(endpoint).json(fields).send().await?;
    let status = response.status();
    if status.is_success() {
        // The body carries nothing the state machine needs.
        Ok(())
    } else {
        Err(SubmitError::Rejected {
            status: status.as_u16(),
        })
    }
}
