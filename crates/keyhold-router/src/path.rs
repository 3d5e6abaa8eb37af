//! Hash-path segment helpers
//!
//! Pure functions over the `#/name/key/value/...` wire shape. Parsing is
//! strict segment-by-segment: a parameter key only matches a whole
//! `/`-delimited segment, never a substring of one, so a key that happens
//! to be a substring of the route name (or of another value) cannot
//! misfire.

/// Splits a hash path into its `/` segments, without the `#/` prefix.
///
/// Returns `None` when the path does not carry the `#/` prefix at all, in
/// which case it cannot match any route.
pub(crate) fn hash_segments(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix("#/")?;
    Some(rest.split('/').collect())
}

/// Finds the raw value for a named parameter among key/value segments.
///
/// Scans for a segment equal to `key` (ASCII case-insensitive) and
/// returns the segment after it. Lookup is by name, not position. A key
/// in the final position, with nothing after it, counts as absent.
pub(crate) fn find_param<'a>(segments: &[&'a str], key: &str) -> Option<&'a str> {
    segments
        .windows(2)
        .find(|pair| pair[0].eq_ignore_ascii_case(key))
        .map(|pair| pair[1])
}
