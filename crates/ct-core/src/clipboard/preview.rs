//! Short, single-line previews of captured text for diagnostic logging.

/// Number of characters kept by [`preview`] unless configured otherwise.
pub const DEFAULT_PREVIEW_CHARS: usize = 10;

/// Builds a one-line preview of `text`.
///
/// Every whitespace run, newlines included, collapses to a single space and
/// leading/trailing whitespace is dropped. The result is then cut to at most
/// `max_chars` characters (not bytes).
pub fn preview(text: &str, max_chars: usize) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    normalized.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_newlines() {
        assert_eq!(preview("  hello \n\t world  ", 50), "hello world");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(preview("héllo wörld, again", 7), "héllo w");
        assert_eq!(preview("日本語のテキスト", 3), "日本語");
    }

    #[test]
    fn short_and_empty_inputs() {
        assert_eq!(preview("abc", DEFAULT_PREVIEW_CHARS), "abc");
        assert_eq!(preview("\n\n", DEFAULT_PREVIEW_CHARS), "");
        assert_eq!(preview("anything", 0), "");
    }
}
