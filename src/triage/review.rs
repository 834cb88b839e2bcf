//! Interactive review loop over unread notifications.
//!
//! Each notification is presented once, in the order given. Dependency-bot
//! noise is acknowledged without a prompt; everything else waits for a `y`
//! or `yes` answer before being marked as read. Anything else skips, so
//! nothing is acknowledged without explicit confirmation.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::github::error::TriageError;
use crate::github::gateway::NotificationGateway;
use crate::github::models::Notification;

use super::elapsed::format_elapsed;
use super::links::{browser_url, repository_home};

const SEPARATOR: &str = "──────────────────────────────";

/// Answer to the "mark as read" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Mark the notification as read.
    Confirm,
    /// Leave the notification unread.
    Skip,
}

impl Decision {
    /// Interprets one line of user input. Only `y` and `yes`, in any case and
    /// with surrounding whitespace, confirm.
    #[must_use]
    pub fn from_response(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => Self::Confirm,
            _ => Self::Skip,
        }
    }
}

/// Terminal state of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Matched the auto-approval rule and was marked read.
    AutoApproved,
    /// Confirmed by the user and marked read.
    Confirmed,
    /// Left unread.
    Skipped,
    /// Marking as read was attempted and failed.
    Failed,
}

/// Tally of outcomes across a review run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Notifications resolved by the auto-approval rule.
    pub auto_approved: usize,
    /// Notifications marked read after confirmation.
    pub confirmed: usize,
    /// Notifications left unread.
    pub skipped: usize,
    /// Notifications whose mark-as-read call failed.
    pub failed: usize,
}

impl ReviewSummary {
    /// Records one outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::AutoApproved => self.auto_approved += 1,
            Outcome::Confirmed => self.confirmed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Number of notifications processed.
    #[must_use]
    pub const fn processed(&self) -> usize {
        self.auto_approved + self.confirmed + self.skipped + self.failed
    }
}

/// Presents notifications and acts on the reviewer's answers.
pub struct Reviewer<'client, Gateway, Input, Output>
where
    Gateway: NotificationGateway,
    Input: BufRead,
    Output: Write,
{
    client: &'client Gateway,
    input: Input,
    output: Output,
    now: DateTime<Utc>,
}

impl<'client, Gateway, Input, Output> Reviewer<'client, Gateway, Input, Output>
where
    Gateway: NotificationGateway,
    Input: BufRead,
    Output: Write,
{
    /// Creates a reviewer; `now` anchors every "updated ... ago" line.
    pub const fn new(
        client: &'client Gateway,
        input: Input,
        output: Output,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            client,
            input,
            output,
            now,
        }
    }

    /// Reviews each notification in order.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Io`] when writing to the terminal fails.
    /// Mark-as-read failures are reported inline and never returned.
    pub async fn review_all(
        &mut self,
        notifications: &[Notification],
    ) -> Result<ReviewSummary, TriageError> {
        let mut summary = ReviewSummary::default();
        for notification in notifications {
            let outcome = self.review(notification).await?;
            summary.record(outcome);
        }
        Ok(summary)
    }

    /// Reviews a single notification.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Io`] when writing to the terminal fails.
    pub async fn review(&mut self, notification: &Notification) -> Result<Outcome, TriageError> {
        writeln!(self.output, "{SEPARATOR}")?;

        if notification.is_auto_approved() {
            writeln!(self.output, "⚡ Auto Approving: {}", notification.title)?;
            return self.mark_read(notification, Outcome::AutoApproved).await;
        }

        self.present(notification)?;
        match self.read_decision()? {
            Decision::Confirm => self.mark_read(notification, Outcome::Confirmed).await,
            Decision::Skip => {
                writeln!(self.output, "⏭️  Skipped.")?;
                Ok(Outcome::Skipped)
            }
        }
    }

    /// Consumes the reviewer, returning the output sink.
    pub fn into_output(self) -> Output {
        self.output
    }

    fn present(&mut self, notification: &Notification) -> Result<(), TriageError> {
        let url = notification.subject_url.as_deref().map_or_else(
            || repository_home(&notification.repository),
            browser_url,
        );
        let elapsed = format_elapsed(self.now - notification.updated_at);

        writeln!(
            self.output,
            "🔔  {} ({})",
            notification.title, notification.id
        )?;
        writeln!(self.output, "Repo: {}", notification.repository)?;
        writeln!(self.output, "Type: {}", notification.subject_type)?;
        writeln!(self.output, "URL:  {url}")?;
        writeln!(self.output, "Updated: {elapsed} ago")?;
        write!(self.output, "Mark as read? [y/N]: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_decision(&mut self) -> Result<Decision, TriageError> {
        let mut line = String::new();
        if let Err(error) = self.input.read_line(&mut line) {
            warn!("failed to read response, skipping: {error}");
            line.clear();
        }
        Ok(Decision::from_response(&line))
    }

    async fn mark_read(
        &mut self,
        notification: &Notification,
        success: Outcome,
    ) -> Result<Outcome, TriageError> {
        match self.client.mark_thread_read(&notification.id).await {
            Ok(()) => {
                writeln!(self.output, "✅ Marked as read.")?;
                Ok(success)
            }
            Err(error) => {
                warn!(thread = %notification.id, "failed to mark notification as read: {error}");
                writeln!(self.output, "⚠️  Failed to mark as read: {error}")?;
                Ok(Outcome::Failed)
            }
        }
    }
}
