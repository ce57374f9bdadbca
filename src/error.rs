// src/error.rs
// =============================================================================
// The user-visible failure modes of the repository browser.
//
// There are only a few ways an action can fail:
// - The username is empty (we never even make a request)
// - GitHub answered with a non-success status (we treat it as "not found")
// - The request itself failed (DNS, TLS, bad JSON, ...)
//
// None of these are fatal. Each one aborts the current action and leaves
// whatever was shown before untouched.
//
// Rust concepts:
// - thiserror: derive std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert reqwest errors automatically
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while loading repositories for a user.
#[derive(Debug, Error)]
pub enum BrowseError {
    /// Username was empty or whitespace only
    #[error("Please enter a GitHub username.")]
    EmptyUsername,

    /// The API answered with a non-success status
    #[error("GitHub user not found. Please check the username and try again.")]
    UserNotFound { username: String, status: StatusCode },

    /// Network-level or decoding failure
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API base URL could not be combined with the username
    #[error("invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl BrowseError {
    /// True for the failures a user can fix by changing their input.
    ///
    /// main.rs maps these to exit code 1 and everything else to 2.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, BrowseError::EmptyUsername | BrowseError::UserNotFound { .. })
    }
}
