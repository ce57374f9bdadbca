// src/view/mod.rs
// =============================================================================
// The derived view: which repositories are shown, and in what order.
//
// Everything here is synchronous and side-effect free. The browser calls
// derive_view() again after every filter change; the list is small (100 at
// most) so there is nothing to cache.
// =============================================================================

mod filter;

pub use filter::{available_languages, derive_view, FilterConfig, SortDirection, SortKey};
