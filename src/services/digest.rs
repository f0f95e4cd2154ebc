// ABOUTME: Weekly digest workflow: compose from stored summaries, persist, and dispatch by email
// ABOUTME: Delivery failures come back as a typed outcome alongside the stored digest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AnalyticsConfig;
use crate::digest::{compose_weekly_digest, digest_subject, render_html, render_text};
use crate::external::mailer::{DigestMailer, MailOutcome};
use crate::storage::NutritionStore;
use chrono::{DateTime, NaiveDate, Utc};
use nutrisnap_core::errors::{AppError, AppResult};
use nutrisnap_core::models::WeeklyDigest;
use nutrisnap_intelligence::units::week_bounds;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Stored digest and what happened when it was mailed
#[derive(Debug, Clone)]
pub struct DigestDelivery {
    /// Persisted digest snapshot
    pub digest: WeeklyDigest,
    /// Subject line used
    pub subject: String,
    /// Mailer result
    pub outcome: MailOutcome,
}

/// Weekly digest service
pub struct DigestService {
    store: Arc<dyn NutritionStore>,
    mailer: Arc<dyn DigestMailer>,
    config: AnalyticsConfig,
}

impl DigestService {
    /// Create a service over explicitly injected collaborators
    #[must_use]
    pub fn new(
        store: Arc<dyn NutritionStore>,
        mailer: Arc<dyn DigestMailer>,
        config: AnalyticsConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }

    /// Compose and persist the digest for the week containing `week_start`
    ///
    /// # Errors
    ///
    /// Returns a storage error
    pub async fn generate(
        &self,
        user_id: Uuid,
        week_start: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<WeeklyDigest> {
        let (monday, sunday) = week_bounds(week_start);
        let summaries = self.store.summaries_in_range(user_id, monday, sunday).await?;
        let digest = compose_weekly_digest(user_id, monday, &summaries, now);
        self.store.insert_digest(digest.clone()).await?;

        info!(
            user.id = %user_id,
            digest.id = %digest.id(),
            digest.week_start = %monday,
            digest.days_logged = digest.content().days_logged,
            "weekly digest generated"
        );
        Ok(digest)
    }

    /// Generate the digest and email it
    ///
    /// A mail failure is reported in [`DigestDelivery::outcome`]; the digest
    /// stays persisted either way.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank address, `ResourceNotFound` when the
    /// user has no profile, or a storage error
    pub async fn send(
        &self,
        user_id: Uuid,
        email: &str,
        week_start: NaiveDate,
        now: DateTime<Utc>,
    ) -> AppResult<DigestDelivery> {
        if email.trim().is_empty() {
            return Err(AppError::invalid_input("Recipient email is required"));
        }
        let profile = self
            .store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User profile").with_user_id(user_id))?;

        let digest = self.generate(user_id, week_start, now).await?;
        let subject = digest_subject(&self.config.digest.subject_prefix, digest.content());
        let text = render_text(&profile.display_name, digest.content());
        let html = render_html(&profile.display_name, digest.content());

        let outcome = self
            .mailer
            .send_digest(email, &profile.display_name, &subject, &text, &html)
            .await;

        if outcome.success {
            info!(user.id = %user_id, digest.id = %digest.id(), "weekly digest sent");
        } else {
            warn!(
                user.id = %user_id,
                digest.id = %digest.id(),
                error = outcome.error.as_deref().unwrap_or("unknown"),
                "weekly digest delivery failed"
            );
        }

        Ok(DigestDelivery {
            digest,
            subject,
            outcome,
        })
    }
}
