//! HTTP handlers, one module per resource.

pub mod hero_powers;
pub mod heroes;
pub mod powers;

/// Path ids arrive as raw segments; anything that is not an integer gets the
/// same 404 as an id with no row behind it.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
