//! Translation of API-form resource URLs into browsable GitHub pages.
//!
//! Notifications reference their subject through REST URLs such as
//! `https://api.github.com/repos/acme/widgets/pulls/42`. Reviewers want the
//! page they can open instead, so [`browser_url`] rewrites the address and
//! falls back to something displayable whenever the shape is unfamiliar.

const API_REPOS_PREFIX: &str = "https://api.github.com/repos/";
const WEB_ROOT: &str = "https://github.com";

/// Classification of an API-form URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserLink<'a> {
    /// A resource with a dedicated web page.
    Resource {
        /// Repository owner segment.
        owner: &'a str,
        /// Repository name segment.
        repo: &'a str,
        /// Web path segment for the resource kind (`pull`, `issues`, ...).
        web_kind: &'static str,
        /// Resource identifier (number or commit SHA).
        id: &'a str,
    },
    /// The resource has no page of its own; link to the repository.
    RepositoryHome {
        /// Repository owner segment.
        owner: &'a str,
        /// Repository name segment.
        repo: &'a str,
    },
    /// Not an API repository URL; shown as given.
    Unrecognised(&'a str),
}

impl<'a> BrowserLink<'a> {
    /// Classifies an API-form URL. Never fails.
    #[must_use]
    pub fn classify(api_url: &'a str) -> Self {
        let Some(path) = api_url.strip_prefix(API_REPOS_PREFIX) else {
            return Self::Unrecognised(api_url);
        };

        let segments: Vec<&str> = path.split('/').collect();
        let &[owner, repo, kind, ref rest @ ..] = segments.as_slice() else {
            return Self::Unrecognised(api_url);
        };

        match (web_kind(kind), rest.first()) {
            (Some(page_kind), Some(&id)) if !id.is_empty() => Self::Resource {
                owner,
                repo,
                web_kind: page_kind,
                id,
            },
            _ => Self::RepositoryHome { owner, repo },
        }
    }

    /// Renders the classification as a displayable URL.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Resource {
                owner,
                repo,
                web_kind,
                id,
            } => format!("{WEB_ROOT}/{owner}/{repo}/{web_kind}/{id}"),
            Self::RepositoryHome { owner, repo } => format!("{WEB_ROOT}/{owner}/{repo}"),
            Self::Unrecognised(raw) => (*raw).to_owned(),
        }
    }
}

fn web_kind(api_kind: &str) -> Option<&'static str> {
    match api_kind {
        "pulls" => Some("pull"),
        "issues" => Some("issues"),
        "commits" => Some("commit"),
        "releases" => Some("releases"),
        _ => None,
    }
}

/// Maps an API-form URL to the page a human would open.
///
/// Unfamiliar input is returned unchanged and recognised kinds without an id
/// degrade to the repository homepage.
///
/// ```
/// use mailroom::triage::links::browser_url;
///
/// assert_eq!(
///     browser_url("https://api.github.com/repos/acme/widgets/pulls/42"),
///     "https://github.com/acme/widgets/pull/42"
/// );
/// ```
#[must_use]
pub fn browser_url(api_url: &str) -> String {
    BrowserLink::classify(api_url).render()
}

/// Homepage for a repository given its `owner/repo` full name.
#[must_use]
pub fn repository_home(full_name: &str) -> String {
    format!("{WEB_ROOT}/{full_name}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{BrowserLink, browser_url, repository_home};

    #[rstest]
    #[case::pull(
        "https://api.github.com/repos/acme/widgets/pulls/42",
        "https://github.com/acme/widgets/pull/42"
    )]
    #[case::issue(
        "https://api.github.com/repos/acme/widgets/issues/7",
        "https://github.com/acme/widgets/issues/7"
    )]
    #[case::commit(
        "https://api.github.com/repos/acme/widgets/commits/abc123",
        "https://github.com/acme/widgets/commit/abc123"
    )]
    #[case::release(
        "https://api.github.com/repos/acme/widgets/releases/9",
        "https://github.com/acme/widgets/releases/9"
    )]
    #[case::unknown_kind(
        "https://api.github.com/repos/acme/widgets/discussions/1",
        "https://github.com/acme/widgets"
    )]
    #[case::not_github("not-a-github-url", "not-a-github-url")]
    #[case::missing_id(
        "https://api.github.com/repos/acme/widgets/pulls",
        "https://github.com/acme/widgets"
    )]
    #[case::too_few_segments(
        "https://api.github.com/repos/acme/widgets",
        "https://api.github.com/repos/acme/widgets"
    )]
    #[case::trailing_slash(
        "https://api.github.com/repos/acme/widgets/issues/",
        "https://github.com/acme/widgets"
    )]
    #[case::empty("", "")]
    fn translates_api_urls(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(browser_url(input), expected);
    }

    #[rstest]
    fn classify_exposes_resource_parts() {
        let link = BrowserLink::classify("https://api.github.com/repos/acme/widgets/commits/abc123");
        assert_eq!(
            link,
            BrowserLink::Resource {
                owner: "acme",
                repo: "widgets",
                web_kind: "commit",
                id: "abc123",
            }
        );
    }

    #[rstest]
    fn repository_home_uses_full_name() {
        assert_eq!(
            repository_home("runatlantis/atlantis"),
            "https://github.com/runatlantis/atlantis"
        );
    }
}
