//! Support modules for the notification triage BDD tests.

pub(crate) mod fixtures;
pub(crate) mod state;

pub(crate) use fixtures::{mount, notification_json, notifications_path};
pub(crate) use state::{TriageState, ensure_runtime_and_server, run_triage_session};
