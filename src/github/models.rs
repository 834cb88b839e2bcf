//! Data models representing GitHub notifications.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into the public domain types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::error::TriageError;
use super::locator::ThreadId;
use super::pagination::PageInfo;
use crate::triage::rules::is_dependency_update;

/// An unread notification thread as presented to the reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Thread identifier used to mark the notification as read.
    pub id: ThreadId,
    /// Subject title (pull request, issue, release name, ...).
    pub title: String,
    /// Subject type as reported by GitHub (e.g. `PullRequest`, `Issue`).
    pub subject_type: String,
    /// API-form URL of the subject, absent for some subject types.
    pub subject_url: Option<String>,
    /// Full name of the repository (`owner/repo`).
    pub repository: String,
    /// Last time the thread was updated.
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Whether the notification is dependency-bot noise that is marked read
    /// without asking.
    #[must_use]
    pub fn is_auto_approved(&self) -> bool {
        is_dependency_update(&self.title)
    }
}

/// One page of notifications with its pagination state.
#[derive(Debug, Clone)]
pub struct NotificationPage {
    /// Notifications on this page, in server order.
    pub items: Vec<Notification>,
    /// Pagination state.
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiNotification {
    pub(crate) id: String,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) subject: ApiSubject,
    pub(crate) repository: ApiRepository,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiSubject {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) full_name: Option<String>,
}

impl TryFrom<ApiNotification> for Notification {
    type Error = TriageError;

    fn try_from(value: ApiNotification) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ThreadId::new(value.id)?,
            title: value.subject.title.unwrap_or_default(),
            subject_type: value.subject.kind.unwrap_or_default(),
            subject_url: value.subject.url.filter(|url| !url.is_empty()),
            repository: value.repository.full_name.unwrap_or_default(),
            updated_at: value.updated_at,
        })
    }
}
