//! Interactive notification triage against the terminal.

use std::io::{self, BufRead, Write};

use chrono::Utc;
use mailroom::{
    MailroomConfig, NotificationGateway, OctocrabNotificationGateway, PersonalAccessToken,
    RepositoryLocator, SessionOutcome, TriageError, run_session,
};

/// Runs one triage session on stdin/stdout.
///
/// # Errors
///
/// Returns configuration errors before any network call, and fetch errors
/// when the notification listing fails.
pub async fn run(config: &MailroomConfig) -> Result<SessionOutcome, TriageError> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabNotificationGateway::for_token, stdin, stdout).await
}

/// Runs a session using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, R, W>(
    config: &MailroomConfig,
    build_gateway: F,
    input: R,
    output: W,
) -> Result<SessionOutcome, TriageError>
where
    G: NotificationGateway,
    F: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<G, TriageError>,
    R: BufRead,
    W: Write,
{
    let token = config.resolve_token()?;
    let locator = config.require_repository()?;

    let gateway = build_gateway(&token, &locator)?;
    run_session(&gateway, &locator, input, output, Utc::now()).await
}
