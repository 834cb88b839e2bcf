//! Identity wrappers for the triaged repository and its credentials.

use url::Url;

use super::error::TriageError;

const PUBLIC_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, TriageError> {
        if value.is_empty() {
            return Err(TriageError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    pub(crate) const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, TriageError> {
        if value.is_empty() {
            return Err(TriageError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    pub(crate) const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, TriageError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TriageError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Opaque notification thread identifier.
///
/// GitHub serialises thread ids as strings; they are only ever echoed back
/// when marking the thread as read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThreadId(String);

impl ThreadId {
    /// Wraps a raw thread identifier.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Api` when the identifier is blank, since such a
    /// thread could never be addressed.
    pub fn new(value: impl Into<String>) -> Result<Self, TriageError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TriageError::Api {
                message: "notification thread id is empty".to_owned(),
            });
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// The single repository whose notifications are triaged, with its API base.
///
/// # Example
///
/// ```
/// use mailroom::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_owner_repo("runatlantis", "atlantis")
///     .expect("should create locator");
/// assert_eq!(locator.full_name(), "runatlantis/atlantis");
/// assert_eq!(locator.api_base().as_str(), "https://api.github.com/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a locator for a repository hosted on `github.com`.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, TriageError> {
        let api_base = Url::parse(PUBLIC_API_BASE)
            .map_err(|error| TriageError::InvalidUrl(error.to_string()))?;
        Self::with_api_base(api_base, owner, repo)
    }

    /// Creates a locator against an explicit API base, such as a GitHub
    /// Enterprise host or a local mock server.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::MissingPathSegments` when owner or repo is empty.
    pub fn with_api_base(api_base: Url, owner: &str, repo: &str) -> Result<Self, TriageError> {
        Ok(Self {
            api_base,
            owner: RepositoryOwner::new(owner)?,
            repository: RepositoryName::new(repo)?,
        })
    }

    /// API base URL used to build the client.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// `owner/repo` form used in output.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    pub(crate) fn notifications_path(&self) -> String {
        format!(
            "/repos/{}/{}/notifications",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}

pub(crate) fn thread_path(thread_id: &ThreadId) -> String {
    format!("/notifications/threads/{}", thread_id.as_str())
}
