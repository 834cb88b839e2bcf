//! CLI operation handlers.
//!
//! [`triage`] loads configuration, builds the GitHub client, and runs one
//! interactive session against the terminal.

pub mod triage;
