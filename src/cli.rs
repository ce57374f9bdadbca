// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Each filter control of the browser has a flag here, so a one-shot
// `browse` invocation can express any view the interactive mode can.
//
// Configuration lives entirely on the command line. Two settings can also
// come from the environment:
// - REPO_BROWSER_API_URL: API base (useful for GitHub Enterprise or tests)
// - REPO_BROWSER_FORMAT:  default output format
// =============================================================================

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::browser::Target;
use crate::github::DEFAULT_API_URL;
use crate::render::OutputFormat;
use crate::view::{FilterConfig, SortDirection, SortKey};

#[derive(Parser, Debug)]
#[command(
    name = "repo-browser",
    version,
    about = "Browse a GitHub user's repositories from the terminal",
    long_about = "repo-browser fetches up to 100 public repositories for a GitHub user, \
                  then filters, sorts and renders them as terminal cards, an HTML card \
                  fragment, or JSON."
)]
pub struct Cli {
    /// Show debug logs on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, env = "REPO_BROWSER_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a user's repositories and render one filtered view
    ///
    /// Example: repo-browser browse octocat --language Rust --min-stars 10
    Browse {
        /// GitHub username
        username: String,

        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Keep the list in memory and change filters from a prompt
    ///
    /// Example: repo-browser interactive octocat
    Interactive {
        /// Username to fetch on start (use the `user` command otherwise)
        username: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Flags mirroring the browser's filter controls
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Only repositories whose primary language is exactly this
    #[arg(short, long)]
    pub language: Option<String>,

    /// Only repositories with at least this many stars
    #[arg(short = 's', long, default_value_t = 0)]
    pub min_stars: u64,

    /// Case-insensitive search in name and description
    #[arg(short, long)]
    pub query: Option<String>,

    /// Leave out forked repositories
    #[arg(long)]
    pub no_forks: bool,

    /// Only repositories that have a homepage set
    #[arg(long)]
    pub has_homepage: bool,

    /// Field to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Stars)]
    pub sort: SortKey,

    /// Sort direction
    #[arg(short, long, value_enum, default_value_t = SortDirection::Desc)]
    pub direction: SortDirection,
}

impl FilterArgs {
    pub fn to_config(&self) -> FilterConfig {
        FilterConfig {
            language: self.language.clone(),
            min_stars: self.min_stars,
            query: self.query.clone().unwrap_or_default(),
            include_forks: !self.no_forks,
            require_homepage: self.has_homepage,
            sort_key: self.sort,
            direction: self.direction,
        }
    }
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, env = "REPO_BROWSER_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the rendered view to this file instead of stdout
    /// (the file is replaced on every render)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn target(&self) -> Target {
        match &self.output {
            Some(path) => Target::File(path.clone()),
            None => Target::Stdout,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[command(flatten)] do?
//    - It splices the fields of another Args struct into this subcommand
//    - FilterArgs and OutputArgs are written once and reused
//
// 2. Why `value_enum`?
//    - SortKey, SortDirection and OutputFormat derive clap::ValueEnum
//    - clap then accepts "stars", "desc", "html" etc. and rejects anything else
//
// 3. What does `env = "..."` mean?
//    - If the flag is not given, clap reads the environment variable
//    - If neither is set, default_value is used
// -----------------------------------------------------------------------------
