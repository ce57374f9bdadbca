// src/render/json.rs
// =============================================================================
// Machine-readable output for scripts and pipelines.
//
// Each card carries the same information the HTML card shows, with the
// display fallbacks left out (null stays null) and the homepage already
// normalized. An empty view becomes {"message": "..."} so a consumer can
// tell "nothing matched" apart from a malformed response.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{normalize_homepage, EMPTY_PLACEHOLDER};
use crate::github::Repository;

#[derive(Debug, Serialize)]
struct Card<'a> {
    name: &'a str,
    description: Option<&'a str>,
    language: Option<&'a str>,
    stars: u64,
    fork: bool,
    updated_at: DateTime<Utc>,
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<String>,
}

impl<'a> From<&'a Repository> for Card<'a> {
    fn from(repo: &'a Repository) -> Self {
        Card {
            name: &repo.name,
            description: repo.description_text(),
            language: repo.language_name(),
            stars: repo.stars,
            fork: repo.fork,
            updated_at: repo.updated_at,
            url: &repo.html_url,
            homepage: repo.homepage.as_deref().and_then(normalize_homepage),
        }
    }
}

#[derive(Debug, Serialize)]
struct Placeholder {
    message: &'static str,
}

pub fn render_json(view: &[&Repository]) -> serde_json::Result<String> {
    if view.is_empty() {
        return serde_json::to_string_pretty(&Placeholder {
            message: EMPTY_PLACEHOLDER,
        });
    }

    let cards: Vec<Card> = view.iter().map(|repo| Card::from(*repo)).collect();
    serde_json::to_string_pretty(&cards)
}
