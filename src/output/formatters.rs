//! Formatting utilities for terminal output

/// Lay out words in left-aligned columns fitting `width` characters
///
/// Words fill rows left to right. At least one column is always used.
#[must_use]
pub fn format_columns(words: &[String], width: usize) -> Vec<String> {
    let Some(longest) = words.iter().map(String::len).max() else {
        return Vec::new();
    };

    let column_width = longest + 2;
    let columns = (width / column_width).max(1);

    words
        .chunks(columns)
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<column_width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 word", "2 words"
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn columns_fill_rows() {
        let words = strings(&["act", "tac", "cat", "dog", "god"]);
        let lines = format_columns(&words, 15);

        // Column width 5, three columns per row
        assert_eq!(lines, ["act  tac  cat", "dog  god"]);
    }

    #[test]
    fn columns_narrow_width_uses_one_column() {
        let words = strings(&["listen", "silent"]);
        let lines = format_columns(&words, 3);
        assert_eq!(lines, ["listen", "silent"]);
    }

    #[test]
    fn columns_empty() {
        assert!(format_columns(&[], 80).is_empty());
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "word", "words"), "1 word");
        assert_eq!(pluralize(0, "word", "words"), "0 words");
        assert_eq!(pluralize(3, "match", "matches"), "3 matches");
    }
}
