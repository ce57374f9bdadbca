// src/github/mod.rs
// =============================================================================
// This module talks to GitHub.
//
// Currently implements:
// - The Repository record decoded from the REST API
// - Fetching one page (up to 100) of a user's public repositories
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod repository;

pub use fetch::{validate_username, GithubClient, DEFAULT_API_URL};
pub use repository::Repository;

#[cfg(test)]
pub(crate) use repository::fixtures;
