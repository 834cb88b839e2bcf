//! High-level intake facade that gathers every unread notification.

use tracing::{debug, info};

use super::error::TriageError;
use super::gateway::{ListNotificationsParams, NotificationGateway};
use super::locator::RepositoryLocator;
use super::models::Notification;

/// Loads the complete unread notification set for a repository.
///
/// # Example
///
/// ```ignore
/// use mailroom::{
///     NotificationIntake, OctocrabNotificationGateway, PersonalAccessToken, RepositoryLocator,
/// };
///
/// let token = PersonalAccessToken::new("ghp_example")?;
/// let locator = RepositoryLocator::from_owner_repo("runatlantis", "atlantis")?;
/// let gateway = OctocrabNotificationGateway::for_token(&token, &locator)?;
/// let unread = NotificationIntake::new(&gateway).load_unread(&locator).await?;
/// ```
pub struct NotificationIntake<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> NotificationIntake<'client, Gateway>
where
    Gateway: NotificationGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Fetch every page of unread notifications, oldest update first.
    ///
    /// Pages are requested one at a time until GitHub stops advertising a
    /// next page.
    ///
    /// # Errors
    ///
    /// Any failing page aborts the whole load; no partial list is returned.
    pub async fn load_unread(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<Vec<Notification>, TriageError> {
        let mut params = ListNotificationsParams::default();
        let mut notifications = Vec::new();

        loop {
            let page = self.client.list_notifications(locator, &params).await?;
            debug!(
                page = page.page_info.current_page(),
                count = page.items.len(),
                has_next = page.page_info.has_next(),
                "fetched notifications page"
            );
            notifications.extend(page.items);

            match page.page_info.next_page() {
                Some(next) => params = params.for_page(next),
                None => break,
            }
        }

        info!(
            repository = %locator.full_name(),
            count = notifications.len(),
            "loaded unread notifications"
        );
        sort_oldest_first(&mut notifications);
        Ok(notifications)
    }
}

/// Stable ascending sort on the last update time.
pub fn sort_oldest_first(notifications: &mut [Notification]) {
    notifications.sort_by_key(|notification| notification.updated_at);
}
