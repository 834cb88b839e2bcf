//! GitHub notification access and token handling.
//!
//! This module wraps Octocrab to list a repository's unread notification
//! threads and mark them as read. Errors are mapped into [`TriageError`]
//! variants so callers can report precise failures without exposing Octocrab
//! internals.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod pagination;

pub use error::TriageError;
pub use gateway::{ListNotificationsParams, NotificationGateway, OctocrabNotificationGateway};
pub use intake::{NotificationIntake, sort_oldest_first};
pub use locator::{PersonalAccessToken, RepositoryLocator, ThreadId};
pub use models::{Notification, NotificationPage};
pub use pagination::PageInfo;

#[cfg(test)]
pub use gateway::MockNotificationGateway;
