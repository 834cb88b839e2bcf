//! One complete triage run: load, review, summarise.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};

use crate::github::error::TriageError;
use crate::github::gateway::NotificationGateway;
use crate::github::intake::NotificationIntake;
use crate::github::locator::RepositoryLocator;

use super::review::{ReviewSummary, Reviewer};

/// Result of a triage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// There was nothing unread; no notification was touched.
    NothingToDo,
    /// Every fetched notification went through review.
    Reviewed(ReviewSummary),
}

/// Loads every unread notification for `locator` and reviews it.
///
/// # Errors
///
/// Returns the fetch error when any page fails to load; nothing is reviewed
/// in that case. Terminal write failures surface as [`TriageError::Io`].
pub async fn run_session<Gateway, Input, Output>(
    gateway: &Gateway,
    locator: &RepositoryLocator,
    input: Input,
    mut output: Output,
    now: DateTime<Utc>,
) -> Result<SessionOutcome, TriageError>
where
    Gateway: NotificationGateway,
    Input: BufRead,
    Output: Write,
{
    let notifications = NotificationIntake::new(gateway)
        .load_unread(locator)
        .await?;

    if notifications.is_empty() {
        writeln!(output, "No unread notifications.")?;
        return Ok(SessionOutcome::NothingToDo);
    }

    writeln!(
        output,
        "{} unread notifications for {}, oldest first.",
        notifications.len(),
        locator.full_name()
    )?;

    let mut reviewer = Reviewer::new(gateway, input, output, now);
    let summary = reviewer.review_all(&notifications).await?;

    let mut sink = reviewer.into_output();
    writeln!(
        sink,
        "Processed {} notifications: {} auto-approved, {} marked read, {} skipped, {} failed.",
        summary.processed(),
        summary.auto_approved,
        summary.confirmed,
        summary.skipped,
        summary.failed
    )?;
    writeln!(sink, "✅ Done processing notifications.")?;

    Ok(SessionOutcome::Reviewed(summary))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rstest::rstest;

    use super::{SessionOutcome, run_session};
    use crate::github::gateway::MockNotificationGateway;
    use crate::github::error::TriageError;
    use crate::github::locator::RepositoryLocator;
    use crate::github::models::NotificationPage;
    use crate::github::models::test_support::{at, notification};
    use crate::github::pagination::PageInfo;

    fn locator() -> RepositoryLocator {
        RepositoryLocator::from_owner_repo("acme", "widgets").expect("locator should build")
    }

    #[rstest]
    #[tokio::test]
    async fn empty_inbox_prints_nothing_to_do_and_marks_nothing() {
        let mut gateway = MockNotificationGateway::new();
        gateway.expect_list_notifications().return_once(|_, _| {
            Ok(NotificationPage {
                items: vec![],
                page_info: PageInfo::default(),
            })
        });
        gateway.expect_mark_thread_read().never();

        let mut output = Vec::new();
        let outcome = run_session(&gateway, &locator(), Cursor::new(""), &mut output, at(1, 0))
            .await
            .expect("session should succeed");

        assert_eq!(outcome, SessionOutcome::NothingToDo);
        let text = String::from_utf8(output).expect("output should be valid UTF-8");
        assert_eq!(text, "No unread notifications.\n");
    }

    #[rstest]
    #[tokio::test]
    async fn auto_and_confirmed_notifications_are_both_marked() {
        let mut gateway = MockNotificationGateway::new();
        gateway.expect_list_notifications().return_once(|_, _| {
            Ok(NotificationPage {
                items: vec![
                    notification("2", "Add new feature", at(2, 0)),
                    notification("1", "chore(deps): bump lodash", at(1, 0)),
                ],
                page_info: PageInfo::default(),
            })
        });
        gateway
            .expect_mark_thread_read()
            .times(2)
            .returning(|_| Ok(()));

        let mut output = Vec::new();
        let outcome = run_session(&gateway, &locator(), Cursor::new("y\n"), &mut output, at(3, 0))
            .await
            .expect("session should succeed");

        let SessionOutcome::Reviewed(summary) = outcome else {
            panic!("expected a reviewed session, got {outcome:?}");
        };
        assert_eq!(summary.processed(), 2);
        assert_eq!(summary.auto_approved, 1);
        assert_eq!(summary.confirmed, 1);
        assert_eq!(summary.skipped, 0);

        let text = String::from_utf8(output).expect("output should be valid UTF-8");
        assert_eq!(
            text.matches("Mark as read?").count(),
            1,
            "only the manual item should prompt: {text}"
        );
        let auto = text.find("Auto Approving").expect("auto line should exist");
        let prompt = text.find("Mark as read?").expect("prompt should exist");
        assert!(auto < prompt, "oldest notification should come first: {text}");
        assert!(text.ends_with("✅ Done processing notifications.\n"));
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_failure_aborts_before_review() {
        let mut gateway = MockNotificationGateway::new();
        gateway.expect_list_notifications().return_once(|_, _| {
            Err(TriageError::Authentication {
                message: "Bad credentials".to_owned(),
            })
        });
        gateway.expect_mark_thread_read().never();

        let mut output = Vec::new();
        let result =
            run_session(&gateway, &locator(), Cursor::new("y\n"), &mut output, at(1, 0)).await;

        assert!(
            matches!(result, Err(TriageError::Authentication { .. })),
            "expected Authentication error, got {result:?}"
        );
        assert!(output.is_empty(), "nothing should be printed on fetch failure");
    }
}
