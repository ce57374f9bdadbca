// src/view/filter.rs
// =============================================================================
// Turns the fetched repository list into the view that actually gets shown.
//
// derive_view() is a pure function:
// - It borrows the records and returns references into them
// - It never reorders or drops anything from the source list
// - Calling it twice with the same inputs gives the same output
//
// Sorting uses slice::sort_by, which is stable. Repositories with equal sort
// keys therefore keep the order GitHub returned them in.
// =============================================================================

use std::cmp::Ordering;
use std::collections::BTreeSet;

use clap::ValueEnum;

use crate::github::Repository;

/// Which field the view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Repository name, case-insensitive
    Name,
    /// Star count
    #[default]
    Stars,
    /// Last-updated timestamp
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Every control that shapes the derived view.
///
/// `Default` gives the state the controls are reset to after each fetch:
/// any language, no star threshold, no query, forks included, homepage not
/// required, most-starred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// None means "any language"
    pub language: Option<String>,
    pub min_stars: u64,
    pub query: String,
    pub include_forks: bool,
    pub require_homepage: bool,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            language: None,
            min_stars: 0,
            query: String::new(),
            include_forks: true,
            require_homepage: false,
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
        }
    }
}

impl FilterConfig {
    // `needle` is the query already trimmed and lowercased, so we only do
    // that once per derive_view call instead of once per record
    fn matches(&self, repo: &Repository, needle: &str) -> bool {
        if let Some(language) = &self.language {
            if repo.language_name() != Some(language.as_str()) {
                return false;
            }
        }
        if repo.stars < self.min_stars {
            return false;
        }
        if !self.include_forks && repo.fork {
            return false;
        }
        if self.require_homepage && repo.homepage_trimmed().is_none() {
            return false;
        }
        if !needle.is_empty() {
            let haystack = format!(
                "{} {}",
                repo.name,
                repo.description_text().unwrap_or("")
            )
            .to_lowercase();
            if !haystack.contains(needle) {
                return false;
            }
        }
        true
    }
}

/// Filters and sorts `records` according to `config`.
pub fn derive_view<'a>(records: &'a [Repository], config: &FilterConfig) -> Vec<&'a Repository> {
    let needle = config.query.trim().to_lowercase();

    let mut view: Vec<&Repository> = records
        .iter()
        .filter(|repo| config.matches(repo, &needle))
        .collect();

    view.sort_by(|a, b| {
        let ordering = compare(a, b, config.sort_key);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    view
}

/// Distinct languages present in `records`, alphabetically.
/// Repositories without a detected language (null or blank) don't
/// contribute an entry.
pub fn available_languages(records: &[Repository]) -> Vec<String> {
    records
        .iter()
        .filter_map(|repo| repo.language_name().map(str::to_string))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn compare(a: &Repository, b: &Repository, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .name
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.name.chars().flat_map(char::to_lowercase)),
        SortKey::Stars => a.stars.cmp(&b.stars),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
    }
}
