//! Octocrab-backed gateway for repository notifications.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};

use crate::github::error::TriageError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator, ThreadId, thread_path};
use crate::github::models::{ApiNotification, Notification, NotificationPage};
use crate::github::pagination::{MAX_PER_PAGE, PageInfo};

use super::client::build_octocrab_client;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::extract_github_message;
use super::{ListNotificationsParams, NotificationGateway};

/// Octocrab-backed notifications gateway.
pub struct OctocrabNotificationGateway {
    client: Octocrab,
}

impl OctocrabNotificationGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an authenticated client against the locator's API base.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::InvalidUrl` when the base URI cannot be parsed or
    /// `TriageError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, TriageError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl NotificationGateway for OctocrabNotificationGateway {
    async fn list_notifications(
        &self,
        locator: &RepositoryLocator,
        params: &ListNotificationsParams,
    ) -> Result<NotificationPage, TriageError> {
        validate_pagination_params(params.page, params.per_page)?;

        let all = params.all.to_string();
        let participating = params.participating.to_string();
        let page = params.page.to_string();
        let per_page = params.per_page.to_string();

        let query_params = [
            ("all", all.as_str()),
            ("participating", participating.as_str()),
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
        ];

        let page_result: Page<ApiNotification> = self
            .client
            .get(locator.notifications_path(), Some(&query_params))
            .await
            .map_err(|error| map_octocrab_error("list notifications", &error))?;

        let has_next = page_result.next.is_some();

        let items = page_result
            .items
            .into_iter()
            .map(Notification::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let page_info = PageInfo::new(params.page).with_has_next(has_next);

        Ok(NotificationPage { items, page_info })
    }

    async fn mark_thread_read(&self, thread_id: &ThreadId) -> Result<(), TriageError> {
        let uri: Uri = thread_path(thread_id)
            .parse::<Uri>()
            .map_err(|error| TriageError::InvalidUrl(error.to_string()))?;

        let response = self
            .client
            ._patch(uri, None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("mark thread read", &error))?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NOT_MODIFIED {
            return Ok(());
        }

        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_else(|_| String::new());

        Err(map_http_error(
            "mark thread read",
            status,
            extract_github_message(&body),
        ))
    }
}

fn validate_pagination_params(page: u32, per_page: u8) -> Result<(), TriageError> {
    if page == 0 {
        return Err(TriageError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if per_page == 0 {
        return Err(TriageError::InvalidPagination {
            message: "per_page must be at least 1".to_owned(),
        });
    }

    if per_page > MAX_PER_PAGE {
        return Err(TriageError::InvalidPagination {
            message: format!("per_page must not exceed {MAX_PER_PAGE}"),
        });
    }

    Ok(())
}
