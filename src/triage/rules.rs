//! Auto-approval rule for automated dependency-update notifications.

/// Title prefixes used by dependency bots such as Renovate.
const DEPENDENCY_UPDATE_PREFIXES: [&str; 2] = ["chore(deps)", "fix(deps)"];

/// Returns true when the title marks an automated dependency update.
///
/// Only the title is consulted; the comparison is case-sensitive.
///
/// ```
/// use mailroom::triage::rules::is_dependency_update;
///
/// assert!(is_dependency_update("chore(deps): bump serde to 1.0.219"));
/// assert!(!is_dependency_update("feat: add widget"));
/// ```
#[must_use]
pub fn is_dependency_update(title: &str) -> bool {
    DEPENDENCY_UPDATE_PREFIXES
        .iter()
        .any(|prefix| title.starts_with(prefix))
}
