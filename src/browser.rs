// src/browser.rs
// =============================================================================
// The repository browser: holds the last-fetched list and the current filter
// controls, and hands out derived views of them.
//
// Lifecycle of one user action:
//   load(username) -> fetch -> replace list -> reset filters -> (caller renders)
//   filter change  -> view() -> render()
//
// A failed load returns the error and changes nothing, so whatever was on
// screen before stays valid.
// =============================================================================

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::error::BrowseError;
use crate::github::{GithubClient, Repository};
use crate::render::{render, OutputFormat};
use crate::view::{available_languages, derive_view, FilterConfig};

/// Where rendered output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    /// The file is overwritten on every render
    File(PathBuf),
}

#[derive(Debug)]
pub struct RepoBrowser {
    client: GithubClient,
    username: Option<String>,
    records: Vec<Repository>,
    languages: Vec<String>,
    filters: FilterConfig,
}

impl RepoBrowser {
    pub fn new(client: GithubClient) -> Self {
        Self {
            client,
            username: None,
            records: Vec::new(),
            languages: Vec::new(),
            filters: FilterConfig::default(),
        }
    }

    /// Fetches `username`'s repositories and makes them the current list.
    ///
    /// Returns the number of repositories fetched. Filters are reset to
    /// their defaults on success and left alone on failure.
    pub async fn load(&mut self, username: &str) -> Result<usize, BrowseError> {
        let repos = self.client.fetch_user_repos(username).await?;
        let count = repos.len();

        self.username = Some(username.trim().to_string());
        self.records = repos;
        self.languages = available_languages(&self.records);
        self.filters = FilterConfig::default();

        info!(count, languages = self.languages.len(), "repository list replaced");
        Ok(count)
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Languages present in the current list, for the language control
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterConfig {
        &mut self.filters
    }

    pub fn view(&self) -> Vec<&Repository> {
        derive_view(&self.records, &self.filters)
    }

    /// Derives the view, renders it and sends it to `target`.
    ///
    /// Stdout output goes through `out` so interactive sessions and tests
    /// can capture it. Returns how many repositories were rendered.
    pub fn render_to(
        &self,
        format: OutputFormat,
        target: &Target,
        out: &mut impl Write,
    ) -> Result<usize> {
        let view = self.view();
        debug!(shown = view.len(), total = self.records.len(), ?format, "rendering view");

        let rendered = render(&view, format).context("Failed to encode JSON output")?;

        match target {
            Target::Stdout => {
                out.write_all(rendered.as_bytes())?;
                if !rendered.ends_with('\n') {
                    writeln!(out)?;
                }
            }
            Target::File(path) => {
                std::fs::write(path, &rendered)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                writeln!(
                    out,
                    "📝 Wrote {} repositor{} to {}",
                    view.len(),
                    if view.len() == 1 { "y" } else { "ies" },
                    path.display()
                )?;
            }
        }

        Ok(view.len())
    }
}
