// src/render/mod.rs
// =============================================================================
// This module turns a derived view into something a person (or a script)
// can look at.
//
// Submodules:
// - html: Card fragment for embedding in a web page
// - text: Card listing for the terminal
// - json: Structured output for scripts
// - homepage: Scheme normalization shared by all three
//
// Every renderer produces the complete container contents. The caller
// replaces whatever was shown before; nothing is appended.
// =============================================================================

mod homepage;
mod html;
mod json;
mod text;

use clap::ValueEnum;

use homepage::normalize_homepage;
use html::render_html;
use json::render_json;
use text::render_text;

use crate::github::Repository;

/// The only thing shown when no repository survives the filters
pub const EMPTY_PLACEHOLDER: &str = "No repositories found for this user.";

/// Where the rendered view is meant to end up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// HTML card fragment
    Html,
    /// Terminal cards
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Renders `view` in the requested format.
///
/// Only JSON encoding can fail; the other formats always succeed.
pub fn render(view: &[&Repository], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Html => Ok(render_html(view)),
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => render_json(view),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why &[&Repository] and not &[Repository]?
//    - The derived view is a list of references into the fetched records
//    - Renderers only read, so they never need to own or clone a record
//
// 2. What is ValueEnum?
//    - A clap derive that maps "--format html" onto OutputFormat::Html
//    - It also lists the allowed values in --help for free
// -----------------------------------------------------------------------------
