// src/render/text.rs
// Terminal cards: a header line with the name and stars, then indented
// details. Cards are separated by a blank line.

use std::fmt::Write;

use super::{normalize_homepage, EMPTY_PLACEHOLDER};
use crate::github::Repository;

pub fn render_text(view: &[&Repository]) -> String {
    if view.is_empty() {
        return format!("{}\n", EMPTY_PLACEHOLDER);
    }

    let mut out = String::new();
    for (i, repo) in view.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let fork_marker = if repo.fork { " (fork)" } else { "" };
        let _ = writeln!(out, "📦 {}{}  ⭐ {}", repo.name, fork_marker, repo.stars);
        let _ = writeln!(out, "   {}", repo.description_or_default());
        let _ = writeln!(out, "   Language: {}", repo.language_or_default());
        let _ = writeln!(out, "   Updated:  {}", repo.updated_at.format("%Y-%m-%d"));
        let _ = writeln!(out, "   🔗 View Project: {}", repo.html_url);
        if let Some(homepage) = repo.homepage.as_deref().and_then(normalize_homepage) {
            let _ = writeln!(out, "   🏠 Homepage:     {}", homepage);
        }
    }
    out
}
