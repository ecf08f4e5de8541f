use regex::Regex;
use std::sync::LazyLock;

// An unterminated `<...` tail is dropped as well.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

/// Strips markup tags from a path parameter and trims surrounding whitespace.
pub fn sanitize_input(input: &str) -> String {
    TAG.replace_all(input, "").trim().to_string()
}
