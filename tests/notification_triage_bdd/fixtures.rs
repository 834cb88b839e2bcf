//! Canned GitHub payloads for the notification triage BDD tests.

use serde_json::json;
use wiremock::{Mock, MockServer};

use super::state::TriageState;

/// Path GitHub serves repository notifications from behind the mock API base.
pub(crate) const fn notifications_path() -> &'static str {
    "/api/v3/repos/owner/repo/notifications"
}

pub(crate) fn notification_json(id: &str, title: &str, updated_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "unread": true,
        "reason": "subscribed",
        "updated_at": updated_at,
        "subject": {
            "title": title,
            "url": format!("https://api.github.com/repos/owner/repo/pulls/{id}"),
            "type": "PullRequest"
        },
        "repository": { "full_name": "owner/repo" }
    })
}

/// Mounts `mock` on the scenario server, creating it on first use.
pub(crate) fn mount(triage_state: &TriageState, mock: Mock) {
    let runtime = super::ensure_runtime_and_server(triage_state);
    triage_state
        .server
        .with_ref(|server: &MockServer| {
            runtime.block_on(mock.mount(server));
        })
        .unwrap_or_else(|| panic!("mock server not initialised"));
}
