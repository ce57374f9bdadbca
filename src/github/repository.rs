// src/github/repository.rs
// =============================================================================
// The one data type this tool works with: a repository as returned by
// GET /users/{user}/repos.
//
// GitHub sends a lot more fields than we need. serde ignores unknown keys by
// default, so the struct only lists what we actually display or filter on.
//
// Records are snapshots. Nothing in the crate mutates one after decoding;
// a new fetch replaces the whole list instead.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Shown when a repository has no description
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Shown when GitHub could not detect a primary language
pub const NO_LANGUAGE: &str = "Not specified";

/// A single repository belonging to the last-fetched user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Primary language as detected by GitHub
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(default)]
    pub fork: bool,
    /// Free-form homepage as typed by the owner; may lack a scheme or be blank
    #[serde(default)]
    pub homepage: Option<String>,
    pub updated_at: DateTime<Utc>,
    /// Canonical https://github.com/... URL
    pub html_url: String,
}

impl Repository {
    /// The description, or None if it is missing or blank
    pub fn description_text(&self) -> Option<&str> {
        non_blank(self.description.as_deref())
    }

    /// The primary language, or None if it is missing or blank
    pub fn language_name(&self) -> Option<&str> {
        non_blank(self.language.as_deref())
    }

    pub fn description_or_default(&self) -> &str {
        self.description_text().unwrap_or(NO_DESCRIPTION)
    }

    pub fn language_or_default(&self) -> &str {
        self.language_name().unwrap_or(NO_LANGUAGE)
    }

    /// The homepage with surrounding whitespace removed, or None if it is
    /// missing or blank. GitHub returns "" for repos whose homepage was cleared.
    pub fn homepage_trimmed(&self) -> Option<&str> {
        self.homepage
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }
}

// "" and whitespace-only count as absent, same as null
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
