// src/render/html.rs
// =============================================================================
// Renders the derived view as an HTML fragment: one card per repository,
// using Tailwind utility classes so the fragment drops straight into a page
// that already loads Tailwind.
//
// Card layout:
//   div.p-4.md:w-1/3            (grid cell)
//     div.h-full.bg-white...    (card)
//       div.p-6                 (content)
//         h5                    name
//         p                     description
//         p                     "Language: ..."
//         p                     "Stars: ..."
//         div                   links ("View Project", optional "Homepage")
//
// All repository text is escaped. Descriptions are user-written and may
// contain '<' or '&'.
// =============================================================================

use std::fmt::Write;

use super::{normalize_homepage, EMPTY_PLACEHOLDER};
use crate::github::Repository;

const CELL_CLASS: &str = "p-4 md:w-1/3";
const CARD_CLASS: &str = "h-full bg-white rounded-lg shadow-md hover:shadow-lg overflow-hidden";
const NAME_CLASS: &str = "text-xl font-semibold mb-2 text-gray-900";
const DESCRIPTION_CLASS: &str = "text-base text-gray-700 mb-4";
const META_CLASS: &str = "text-gray-600 text-sm mb-2";
const PROJECT_LINK_CLASS: &str =
    "inline-block bg-indigo-500 text-white text-sm font-semibold rounded-md px-4 py-2 hover:bg-indigo-600";
const HOMEPAGE_LINK_CLASS: &str = "inline-block bg-gray-100 text-indigo-600 text-sm font-semibold rounded-md px-4 py-2 hover:bg-gray-200 border border-indigo-200";

/// Renders every repository in `view` as a card, or the placeholder
/// paragraph when the view is empty.
pub fn render_html(view: &[&Repository]) -> String {
    if view.is_empty() {
        return format!(
            "<p class=\"text-gray-700 text-center\">{}</p>\n",
            EMPTY_PLACEHOLDER
        );
    }

    let mut out = String::new();
    for repo in view {
        write_card(&mut out, repo);
    }
    out
}

fn write_card(out: &mut String, repo: &Repository) {
    // Writing into a String never fails, so the fmt::Result is ignored
    let _ = writeln!(out, "<div class=\"{}\">", CELL_CLASS);
    let _ = writeln!(out, "  <div class=\"{}\">", CARD_CLASS);
    let _ = writeln!(out, "    <div class=\"p-6\">");
    let _ = writeln!(
        out,
        "      <h5 class=\"{}\">{}</h5>",
        NAME_CLASS,
        escape(&repo.name)
    );
    let _ = writeln!(
        out,
        "      <p class=\"{}\">{}</p>",
        DESCRIPTION_CLASS,
        escape(repo.description_or_default())
    );
    let _ = writeln!(
        out,
        "      <p class=\"{}\">Language: {}</p>",
        META_CLASS,
        escape(repo.language_or_default())
    );
    let _ = writeln!(out, "      <p class=\"{}\">Stars: {}</p>", META_CLASS, repo.stars);
    let _ = writeln!(out, "      <div class=\"flex flex-wrap gap-2\">");
    write_link(out, PROJECT_LINK_CLASS, &repo.html_url, "View Project");
    if let Some(homepage) = repo.homepage.as_deref().and_then(normalize_homepage) {
        write_link(out, HOMEPAGE_LINK_CLASS, &homepage, "Homepage");
    }
    let _ = writeln!(out, "      </div>");
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(out, "</div>");
}

fn write_link(out: &mut String, class: &str, href: &str, label: &str) {
    let _ = writeln!(
        out,
        "        <a class=\"{}\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        class,
        escape(href),
        label
    );
}

// Escapes the five characters that matter in text and double-quoted
// attribute values
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fixtures::repo;
    use scraper::{Html, Selector};

    fn select_text(doc: &Html, css: &str) -> Vec<String> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector)
            .map(|el| el.text().collect::<String>())
            .collect()
    }

    fn select_attr(doc: &Html, css: &str, attr: &str) -> Vec<String> {
        let selector = Selector::parse(css).unwrap();
        doc.select(&selector)
            .filter_map(|el| el.value().attr(attr).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_empty_view_is_placeholder_only() {
        let html = render_html(&[]);
        let doc = Html::parse_fragment(&html);

        assert_eq!(select_text(&doc, "p"), vec![EMPTY_PLACEHOLDER]);
        assert!(select_text(&doc, "h5").is_empty());
        assert!(select_text(&doc, "a").is_empty());
    }

    #[test]
    fn test_card_fields_and_fallbacks() {
        let mut described = repo("described", 42);
        described.description = Some("Does things".to_string());
        described.language = Some("Rust".to_string());
        let bare = repo("bare", 0);

        let html = render_html(&[&described, &bare]);
        let doc = Html::parse_fragment(&html);

        assert_eq!(select_text(&doc, "h5"), vec!["described", "bare"]);
        let paragraphs = select_text(&doc, "p");
        assert_eq!(
            paragraphs,
            vec![
                "Does things",
                "Language: Rust",
                "Stars: 42",
                "No description provided.",
                "Language: Not specified",
                "Stars: 0",
            ]
        );
    }

    #[test]
    fn test_blank_description_and_language_use_fallbacks() {
        let mut blank = repo("blank", 2);
        blank.description = Some(String::new());
        blank.language = Some(" ".to_string());

        let html = render_html(&[&blank]);
        let doc = Html::parse_fragment(&html);

        assert_eq!(
            select_text(&doc, "p"),
            vec!["No description provided.", "Language: Not specified", "Stars: 2"]
        );
    }

    #[test]
    fn test_homepage_link_only_when_present() {
        let mut with_site = repo("with-site", 1);
        with_site.homepage = Some("example.com".to_string());
        let mut blank_site = repo("blank-site", 1);
        blank_site.homepage = Some(" ".to_string());

        let html = render_html(&[&with_site, &blank_site]);
        let doc = Html::parse_fragment(&html);

        assert_eq!(
            select_text(&doc, "a"),
            vec!["View Project", "Homepage", "View Project"]
        );
        assert_eq!(
            select_attr(&doc, "a", "href"),
            vec![
                "https://github.com/octocat/with-site",
                "https://example.com",
                "https://github.com/octocat/blank-site",
            ]
        );
        assert!(select_attr(&doc, "a", "target").iter().all(|t| t == "_blank"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut sneaky = repo("sneaky", 1);
        sneaky.description = Some("<script>alert(\"x\")</script> & co".to_string());

        let html = render_html(&[&sneaky]);
        assert!(!html.contains("<script>"));

        let doc = Html::parse_fragment(&html);
        assert!(select_text(&doc, "script").is_empty());
        assert_eq!(
            select_text(&doc, "p")[0],
            "<script>alert(\"x\")</script> & co"
        );
    }
}
