// src/github/fetch.rs
// =============================================================================
// This module fetches a user's repository list from the GitHub REST API.
//
// Strategy:
// - Trim and validate the username before touching the network
// - Build GET {api_base}/users/{username}/repos?per_page=100
// - Treat any non-success status as "user not found"
// - Decode the JSON array straight into Vec<Repository>
//
// Only the first page (100 repositories) is requested. No token is sent, so
// requests are subject to GitHub's anonymous rate limit.
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a custom error enum: Callers can match on what went wrong
// - url::Url: Safe path building (usernames get percent-encoded)
// =============================================================================

use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use super::repository::Repository;
use crate::error::BrowseError;

/// Public GitHub API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub's maximum page size; we never ask for a second page
const PAGE_SIZE: u32 = 100;

// GitHub rejects API requests that carry no User-Agent
const AGENT: &str = concat!("repo-browser/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a reqwest client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
}

impl GithubClient {
    /// Creates a client for the given API base (e.g. "https://api.github.com").
    pub fn new(api_base: &str) -> Result<Self, BrowseError> {
        let api_base = Url::parse(api_base)?;
        let client = Client::builder().user_agent(AGENT).build()?;
        Ok(Self { client, api_base })
    }

    /// Fetches up to PAGE_SIZE repositories owned by `username`.
    ///
    /// Empty or whitespace-only usernames are rejected before any request
    /// is made.
    pub async fn fetch_user_repos(&self, username: &str) -> Result<Vec<Repository>, BrowseError> {
        let username = validate_username(username)?;
        let url = repos_url(&self.api_base, username)?;

        info!(%username, %url, "fetching repositories");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(%username, %status, "repository listing failed");
            return Err(BrowseError::UserNotFound {
                username: username.to_string(),
                status,
            });
        }

        let repos: Vec<Repository> = response.json().await?;
        debug!(count = repos.len(), "decoded repositories");
        Ok(repos)
    }
}

// Trims the input and rejects it if nothing is left
//
// Example:
//   "  octocat \n" -> Ok("octocat")
//   "   "          -> Err(EmptyUsername)
pub fn validate_username(input: &str) -> Result<&str, BrowseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BrowseError::EmptyUsername);
    }
    Ok(trimmed)
}

// Builds the listing URL on top of the configured base
//
// path_segments_mut keeps any path the base already has (useful for
// GitHub Enterprise, which serves the API under /api/v3) and percent-encodes
// the username so a stray '/' or '?' can't change the request.
fn repos_url(api_base: &Url, username: &str) -> Result<Url, BrowseError> {
    let mut url = api_base.clone();
    url.path_segments_mut()
        .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(["users", username, "repos"]);
    url.query_pairs_mut()
        .append_pair("per_page", &PAGE_SIZE.to_string());
    Ok(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a struct instead of a free function?
//    - reqwest::Client keeps a connection pool; building one per request
//      throws that away
//    - Holding the base URL lets tests point the client at a mock server
//
// 2. What does #[from] on the error enum buy us?
//    - `.send().await?` returns reqwest::Error
//    - The ? operator calls From::from, turning it into BrowseError::Network
//
// 3. Why return &str from validate_username?
//    - The trimmed string is a slice of the input, no allocation needed
//    - The lifetime ties the result to the input, so the compiler checks it
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const PAYLOAD: &str = r#"[
        {
            "name": "alpha",
            "description": "first",
            "language": "Rust",
            "stargazers_count": 12,
            "fork": false,
            "homepage": "alpha.dev",
            "updated_at": "2024-03-01T10:00:00Z",
            "html_url": "https://github.com/octocat/alpha"
        },
        {
            "name": "beta",
            "description": null,
            "language": null,
            "stargazers_count": 0,
            "fork": true,
            "homepage": null,
            "updated_at": "2023-12-24T08:30:00Z",
            "html_url": "https://github.com/octocat/beta"
        }
    ]"#;

    #[test]
    fn test_validate_username_trims() {
        assert_eq!(validate_username("  octocat\n").unwrap(), "octocat");
    }

    #[test]
    fn test_validate_username_rejects_blank() {
        assert!(matches!(validate_username(""), Err(BrowseError::EmptyUsername)));
        assert!(matches!(validate_username(" \t "), Err(BrowseError::EmptyUsername)));
    }

    #[test]
    fn test_repos_url() {
        let base = Url::parse("https://api.github.com").unwrap();
        let url = repos_url(&base, "octocat").unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/repos?per_page=100");
    }

    #[test]
    fn test_repos_url_keeps_base_path_and_encodes() {
        let base = Url::parse("https://ghe.example.com/api/v3/").unwrap();
        let url = repos_url(&base, "a/b").unwrap();
        assert_eq!(
            url.as_str(),
            "https://ghe.example.com/api/v3/users/a%2Fb/repos?per_page=100"
        );
    }

    #[tokio::test]
    async fn test_fetch_user_repos() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/users/octocat/repos")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .match_header("user-agent", Matcher::Regex("^repo-browser/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(PAYLOAD)
            .create_async()
            .await;

        let client = GithubClient::new(&server.url()).unwrap();
        let repos = client.fetch_user_repos(" octocat ").await.unwrap();

        mock.assert_async().await;
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "alpha");
        assert_eq!(repos[0].language.as_deref(), Some("Rust"));
        assert!(repos[1].fork);
    }

    #[tokio::test]
    async fn test_fetch_unknown_user_is_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/users/nobody/repos")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let client = GithubClient::new(&server.url()).unwrap();
        let err = client.fetch_user_repos("nobody").await.unwrap_err();

        match err {
            BrowseError::UserNotFound { username, status } => {
                assert_eq!(username, "nobody");
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("expected UserNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_username_makes_no_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = GithubClient::new(&server.url()).unwrap();
        let err = client.fetch_user_repos("   ").await.unwrap_err();

        assert!(matches!(err, BrowseError::EmptyUsername));
        mock.assert_async().await;
    }
}
