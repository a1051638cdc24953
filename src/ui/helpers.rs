//! UI helper functions

/// Word-wrap text to a maximum width, counting characters rather than
/// bytes so multi-byte text keeps its shape.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current = word.to_string();
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(current);
            current = word.to_string();
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Truncate to a character budget, appending "..." when cut.
pub fn truncate_end(text: &str, max_width: usize) -> String {
    let count = text.chars().count();
    if count <= max_width {
        return text.to_string();
    }
    let take = max_width.saturating_sub(3);
    let truncated: String = text.chars().take(take).collect();
    format!("{}...", truncated)
}

/// Render a tag list as pill-style chips: "[a] [b] [c]", wrapped to the
/// given width. Returns one string per row.
pub fn chip_rows(tags: &[String], max_width: usize) -> Vec<String> {
    if tags.is_empty() {
        return Vec::new();
    }
    let chips: Vec<String> = tags.iter().map(|t| format!("[{}]", t)).collect();
    wrap_text(&chips.join(" "), max_width.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_text_zero_width() {
        assert_eq!(wrap_text("hello world", 0), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_fits_on_one_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_text_multiple_lines() {
        assert_eq!(wrap_text("hello world foo bar", 10), vec!["hello", "world foo", "bar"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        // Four two-byte chars fit in a width of five.
        assert_eq!(wrap_text("éééé x", 5), vec!["éééé", "x"]);
    }

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("short", 10), "short");
        assert_eq!(truncate_end("a longer sentence", 9), "a long...");
    }

    #[test]
    fn test_chip_rows() {
        let tags = vec!["ARIMA".to_string(), "Excel".to_string()];
        assert_eq!(chip_rows(&tags, 40), vec!["[ARIMA] [Excel]"]);
        assert!(chip_rows(&[], 40).is_empty());
    }

    #[test]
    fn test_chip_rows_wrap() {
        let tags = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
        let rows = chip_rows(&tags, 16);
        assert_eq!(rows, vec!["[alpha] [beta]", "[gamma]"]);
    }
}
