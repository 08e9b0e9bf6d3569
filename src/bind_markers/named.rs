use std::collections::HashSet;

/// Keep ASCII letters and digits of `input` and prefix a non-empty result with
/// `_`, producing a valid identifier fragment. Returns an empty string when
/// nothing survives.
///
/// ```rust
/// use sql_dialect::bind_markers::filter_ascii_alphanumeric;
///
/// assert_eq!(filter_ascii_alphanumeric("first-name"), "_firstname");
/// assert_eq!(filter_ascii_alphanumeric("$3"), "_3");
/// assert_eq!(filter_ascii_alphanumeric("é?"), "");
/// ```
#[must_use]
pub fn filter_ascii_alphanumeric(input: &str) -> String {
    let kept: String = input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    if kept.is_empty() {
        return kept;
    }

    format!("_{kept}")
}

fn truncate(name: &str, max_length: usize) -> String {
    name.chars().take(max_length).collect()
}

/// Truncate `candidate` to `max_length` and, if the result was already
/// issued, append `_2`, `_3`, ... (shortening the base so the whole name
/// still fits) until it is unique.
pub(super) fn unique_name(candidate: &str, max_length: usize, issued: &HashSet<String>) -> String {
    let name = truncate(candidate, max_length);
    if !issued.contains(&name) {
        return name;
    }

    let mut n = 2usize;
    loop {
        let suffix = format!("_{n}");
        let base = truncate(candidate, max_length.saturating_sub(suffix.len()));
        let name = format!("{base}{suffix}");
        if !issued.contains(&name) {
            return name;
        }
        n += 1;
    }
}
