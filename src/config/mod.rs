//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – the `runatlantis/atlantis` repository, no token
//! 2. **Configuration file** – `.mailroom.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `MAILROOM_TOKEN`, `MAILROOM_OWNER`,
//!    `MAILROOM_REPO`
//! 4. **Command-line arguments** – `--token`/`-t`, `--owner`/`-o`,
//!    `--repo`/`-r`
//!
//! When no layer supplies a token, `GITHUB_TOKEN` is read from the
//! environment.
//!
//! # Configuration File
//!
//! ```toml
//! owner = "runatlantis"
//! repo = "atlantis"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::TriageError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};

/// Environment variable consulted when no other layer provides a token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_OWNER: &str = "runatlantis";
const DEFAULT_REPO: &str = "atlantis";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use mailroom::MailroomConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = MailroomConfig::load().expect("failed to load configuration");
/// let token = config.resolve_token().expect("token required");
/// let locator = config.require_repository().expect("repository required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "MAILROOM",
    discovery(
        dotfile_name = ".mailroom.toml",
        config_file_name = "mailroom.toml",
        app_name = "mailroom"
    )
)]
pub struct MailroomConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `MAILROOM_TOKEN`, falling back to `GITHUB_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Owner of the repository whose notifications are triaged.
    ///
    /// Can be provided via:
    /// - CLI: `--owner <OWNER>` or `-o <OWNER>`
    /// - Environment: `MAILROOM_OWNER`
    /// - Config file: `owner = "..."`
    #[ortho_config(cli_short = 'o')]
    pub owner: String,

    /// Name of the repository whose notifications are triaged.
    ///
    /// Can be provided via:
    /// - CLI: `--repo <REPO>` or `-r <REPO>`
    /// - Environment: `MAILROOM_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: String,
}

impl Default for MailroomConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: DEFAULT_OWNER.to_owned(),
            repo: DEFAULT_REPO.to_owned(),
        }
    }
}

impl MailroomConfig {
    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<PersonalAccessToken, TriageError> {
        let raw = self
            .token
            .clone()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| env::var(GITHUB_TOKEN_VAR).ok())
            .ok_or(TriageError::MissingToken)?;
        PersonalAccessToken::new(raw)
    }

    /// Returns the locator for the configured repository on `github.com`.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] when owner or repo is blank.
    pub fn require_repository(&self) -> Result<RepositoryLocator, TriageError> {
        RepositoryLocator::from_owner_repo(self.owner.trim(), self.repo.trim()).map_err(|error| {
            match error {
                TriageError::MissingPathSegments => TriageError::Configuration {
                    message: "repository owner and name are required (use --owner and --repo)"
                        .to_owned(),
                },
                other => other,
            }
        })
    }
}

#[cfg(test)]
mod tests;
