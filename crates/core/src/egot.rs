//! EGOT progress thresholds and result-count limits.

/// Distinct winning award types needed to appear in the close-to-EGOT list.
pub const CLOSE_TO_EGOT_WINS: i64 = 3;

/// Distinct winning award types that make a full EGOT.
pub const EGOT_WINS: i64 = 4;

/// Default number of rows for autocomplete searches.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Default number of rows for the aggregate listings.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Hard cap on any caller-supplied limit.
pub const MAX_LIMIT: i64 = 500;

/// Resolve a caller-supplied limit.
///
/// Missing or non-positive values fall back to `default`; anything above
/// [`MAX_LIMIT`] is capped.
pub fn clamp_limit(limit: Option<i64>, default: i64) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(MAX_LIMIT),
        _ => default,
    }
}
