// src/render/homepage.rs
// =============================================================================
// Homepage links are typed by hand in the repository settings, so they come
// in all shapes: "example.com", "www.example.com/docs", "http://x.com",
// "  HTTPS://Example.com ". A link needs a scheme, so we add one when missing.
// =============================================================================

/// Normalizes a homepage value for use as a link target.
///
/// Returns None for missing or blank values. Values that already start with
/// http:// or https:// (any case) are kept as-is; anything else gets
/// "https://" prepended.
///
/// Example:
///   "example.com"  -> Some("https://example.com")
///   "http://x.com" -> Some("http://x.com")
///   "   "          -> None
pub fn normalize_homepage(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if has_http_scheme(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed))
    }
}

fn has_http_scheme(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
