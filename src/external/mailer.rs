// ABOUTME: Email delivery collaborator contract for weekly digests
// ABOUTME: Typed delivery outcome plus a recording mailer that never touches the network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Result of one delivery attempt
///
/// Delivery failures are data, not errors: the caller decides whether to
/// retry or surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailOutcome {
    /// Whether the provider accepted the message
    pub success: bool,
    /// Provider error when `success` is false
    pub error: Option<String>,
}

impl MailOutcome {
    /// Accepted by the provider
    #[must_use]
    pub const fn delivered() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Rejected or not attempted
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Digest delivery collaborator
#[async_trait]
pub trait DigestMailer: Send + Sync {
    /// Send one digest email with plain-text and HTML bodies
    async fn send_digest(
        &self,
        to: &str,
        display_name: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> MailOutcome;
}

/// Message captured by [`RecordingMailer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentDigest {
    /// Recipient address
    pub to: String,
    /// Recipient display name
    pub display_name: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text_body: String,
    /// HTML body
    pub html_body: String,
}

/// Mailer for tests and dry runs: records every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentDigest>>,
    failure: Option<String>,
}

impl RecordingMailer {
    /// Mailer that accepts every message
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mailer that rejects every message with `error`
    #[must_use]
    pub fn failing(error: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(error.into()),
        }
    }

    /// Messages accepted so far
    pub async fn sent(&self) -> Vec<SentDigest> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl DigestMailer for RecordingMailer {
    async fn send_digest(
        &self,
        to: &str,
        display_name: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> MailOutcome {
        if let Some(error) = &self.failure {
            warn!(mail.to = %to, error = %error, "digest delivery rejected");
            return MailOutcome::failed(error.clone());
        }

        self.sent.lock().await.push(SentDigest {
            to: to.to_owned(),
            display_name: display_name.to_owned(),
            subject: subject.to_owned(),
            text_body: text_body.to_owned(),
            html_body: html_body.to_owned(),
        });
        info!(mail.to = %to, mail.subject = %subject, "digest recorded (delivery skipped)");
        MailOutcome::delivered()
    }
}
