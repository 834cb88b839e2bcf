//! Gateways for reading and acknowledging notifications through Octocrab.
//!
//! The trait keeps the intake and reviewer testable with mocks while the
//! Octocrab implementation performs the real HTTP requests.

mod client;
mod error_mapping;
mod http_utils;
mod notifications;

pub use notifications::OctocrabNotificationGateway;

use async_trait::async_trait;

use crate::github::error::TriageError;
use crate::github::locator::{RepositoryLocator, ThreadId};
use crate::github::models::NotificationPage;
use crate::github::pagination::MAX_PER_PAGE;

/// Query parameters for one notifications page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNotificationsParams {
    /// Include notifications already marked as read.
    pub all: bool,
    /// Restrict to threads the user directly participates in.
    pub participating: bool,
    /// Page number to fetch (1-based).
    pub page: u32,
    /// Items per page (max 100).
    pub per_page: u8,
}

impl ListNotificationsParams {
    /// Returns the same query pointed at another page.
    #[must_use]
    pub const fn for_page(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

impl Default for ListNotificationsParams {
    /// Unread only, every reason, largest pages, starting at page 1.
    fn default() -> Self {
        Self {
            all: false,
            participating: false,
            page: 1,
            per_page: MAX_PER_PAGE,
        }
    }
}

/// Gateway for repository notification threads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch one page of notifications for the repository.
    async fn list_notifications(
        &self,
        locator: &RepositoryLocator,
        params: &ListNotificationsParams,
    ) -> Result<NotificationPage, TriageError>;

    /// Mark a single notification thread as read.
    async fn mark_thread_read(&self, thread_id: &ThreadId) -> Result<(), TriageError>;
}
