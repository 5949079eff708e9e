//! Splitting of newline-delimited settings values.

/// Splits a multi-line settings value into its entries.
///
/// Accepts `\r\n`, `\r` and `\n` line breaks and trims each entry. An empty
/// (or whitespace-only) value yields no entries, and trailing blank lines are
/// dropped. Blank lines in the middle are kept: hosts and keys pair by line
/// position, so removing them would silently shift the pairing. Pairing
/// rejects them instead.
pub fn split_config_lines(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = raw
        .replace("\r\n", "\n")
        .split(['\r', '\n'])
        .map(|line| line.trim().to_string())
        .collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_yields_no_entries() {
        assert!(split_config_lines("").is_empty());
        assert!(split_config_lines("  \r\n ").is_empty());
    }

    #[test]
    fn test_single_entry() {
        assert_eq!(split_config_lines("https://s.io"), vec!["https://s.io"]);
    }

    #[test]
    fn test_carriage_return_separator() {
        assert_eq!(split_config_lines("a\rb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_crlf_and_lf_separators() {
        assert_eq!(split_config_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_newline_dropped() {
        assert_eq!(split_config_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_entries_are_trimmed() {
        assert_eq!(split_config_lines("  a \n\tb"), vec!["a", "b"]);
    }

    #[test]
    fn test_interior_blank_line_kept() {
        assert_eq!(split_config_lines("a\n\nc"), vec!["a", "", "c"]);
    }
}
