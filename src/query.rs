//! Query-String Maintenance
//!
//! Incremental editing of the search URL's query parameters. Every
//! parameter this module writes is terminated with `&`, so removal can
//! rely on `&` as the segment boundary.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a query parameter value. Anything that
/// could read as query structure must not appear raw.
const QUERY_VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Byte offset of `param=` within the query string, matching only at a
/// segment start (directly after `?` or `&`), never inside another key
/// or value.
fn find_parameter(url: &str, param: &str) -> Option<usize> {
    let needle = format!("{}=", param);
    let query_start = url.find('?')?;
    let mut from = query_start;
    while let Some(rel) = url[from..].find(&needle) {
        let start = from + rel;
        if url[..start].ends_with('?') || url[..start].ends_with('&') {
            return Some(start);
        }
        from = start + needle.len();
    }
    None
}

/// Returns `url` with the `param=value` segment removed, other
/// parameters untouched and in their original order.
///
/// The segment runs through its terminating `&`; a parameter at the very
/// end of the string with no `&` is consumed to the end. A `?` left with
/// nothing after it is dropped, restoring the bare base URL.
pub fn remove_parameter(url: &str, param: &str) -> String {
    let Some(start) = find_parameter(url, param) else {
        return url.to_string();
    };
    let end = url[start..]
        .find('&')
        .map_or(url.len(), |amp| start + amp + 1);
    let mut out = String::with_capacity(url.len());
    out.push_str(&url[..start]);
    out.push_str(&url[end..]);
    if out.ends_with('?') {
        out.pop();
    }
    out
}

/// Returns `url` with `param` set to `value`.
///
/// An existing `param=` segment is always removed first so filters
/// replace rather than stack. Empty or missing text stops there,
/// restoring the URL to its pre-filter state. Otherwise the encoded
/// value is appended as `param=value&`, with `?` as the separator when
/// the URL has no query string yet.
pub fn apply_filter(url: &str, param: &str, value: Option<&str>) -> String {
    let stripped = remove_parameter(url, param);
    let text = match value {
        Some(text) if !text.is_empty() => text,
        _ => return stripped,
    };
    let encoded = utf8_percent_encode(text, QUERY_VALUE_SET);
    let separator = if stripped.contains('?') { "" } else { "?" };
    format!("{}{}{}={}&", stripped, separator, param, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:4567/api/todos";

    #[test]
    fn first_filter_starts_the_query_string() {
        let url = apply_filter(BASE, "body", Some("m"));
        assert_eq!(url, format!("{BASE}?body=m&"));
    }

    #[test]
    fn filter_appends_after_existing_parameters() {
        let url = format!("{BASE}?something=k&");
        let url = apply_filter(&url, "body", Some("m"));
        assert_eq!(url, format!("{BASE}?something=k&body=m&"));
    }

    #[test]
    fn repeated_filter_replaces_instead_of_stacking() {
        let url = apply_filter(BASE, "body", Some("f"));
        let url = apply_filter(&url, "body", Some("m"));
        assert_eq!(url, format!("{BASE}?body=m&"));
    }

    #[test]
    fn same_filter_twice_is_idempotent() {
        let once = apply_filter(BASE, "body", Some("m"));
        let twice = apply_filter(&once, "body", Some("m"));
        assert_eq!(once, twice);
    }

    #[test]
    fn clearing_the_only_parameter_restores_the_base_url() {
        let url = apply_filter(BASE, "body", Some("m"));
        let url = apply_filter(&url, "body", Some(""));
        assert_eq!(url, BASE);
    }

    #[test]
    fn clearing_with_none_restores_the_base_url() {
        let url = apply_filter(BASE, "body", Some("m"));
        let url = apply_filter(&url, "body", None);
        assert_eq!(url, BASE);
    }

    #[test]
    fn clearing_leaves_a_preceding_parameter_intact() {
        let url = format!("{BASE}?something=k&");
        let filtered = apply_filter(&url, "body", Some("m"));
        assert_eq!(filtered, format!("{BASE}?something=k&body=m&"));
        let cleared = apply_filter(&filtered, "body", None);
        assert_eq!(cleared, url);
    }

    #[test]
    fn removing_a_leading_parameter_keeps_the_question_mark() {
        let url = format!("{BASE}?body=f&something=k&");
        let cleared = remove_parameter(&url, "body");
        assert_eq!(cleared, format!("{BASE}?something=k&"));
    }

    #[test]
    fn removing_an_absent_parameter_changes_nothing() {
        let url = format!("{BASE}?something=k&");
        assert_eq!(remove_parameter(&url, "body"), url);
        assert_eq!(remove_parameter(BASE, "body"), BASE);
    }

    #[test]
    fn parameter_without_trailing_separator_is_removed_to_the_end() {
        let url = format!("{BASE}?body=m");
        assert_eq!(remove_parameter(&url, "body"), BASE);
        let url = format!("{BASE}?something=k&body=m");
        assert_eq!(remove_parameter(&url, "body"), format!("{BASE}?something=k&"));
    }

    #[test]
    fn lookup_only_matches_at_segment_starts() {
        let url = format!("{BASE}?nobody=1&");
        assert_eq!(remove_parameter(&url, "body"), url);
        let url = format!("{BASE}?note=body=x&");
        assert_eq!(remove_parameter(&url, "body"), url);
    }

    #[test]
    fn values_are_percent_encoded() {
        let url = apply_filter(BASE, "body", Some("a b&c"));
        assert_eq!(url, format!("{BASE}?body=a%20b%26c&"));
        // An encoded value never breaks the segment boundary on removal.
        assert_eq!(apply_filter(&url, "body", None), BASE);
    }
}
