//! Triage of unread notifications.
//!
//! The pieces here are independent of the transport: an auto-approval rule,
//! URL translation for display, elapsed-time formatting, the interactive
//! reviewer, and the session that ties them to a gateway.

pub mod elapsed;
pub mod links;
pub mod review;
pub mod rules;
pub mod session;

pub use review::{Decision, Outcome, ReviewSummary, Reviewer};
pub use session::{SessionOutcome, run_session};
