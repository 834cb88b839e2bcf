//! Mailroom library crate for triaging unread GitHub notifications.
//!
//! The library loads every unread notification for one repository through
//! Octocrab, orders them oldest first, auto-acknowledges dependency-bot
//! noise, and drives an interactive review over any line reader and writer.

pub mod config;
pub mod github;
pub mod triage;

pub use config::MailroomConfig;
pub use github::{
    ListNotificationsParams, Notification, NotificationGateway, NotificationIntake,
    NotificationPage, OctocrabNotificationGateway, PersonalAccessToken, RepositoryLocator,
    ThreadId, TriageError,
};
pub use triage::{ReviewSummary, SessionOutcome, run_session};
