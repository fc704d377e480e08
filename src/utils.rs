//! Common utility functions shared across the codebase.

/// Truncate a string for use in test descriptions.
///
/// Appends `...` when the text exceeds `max_len` characters, so generated
/// file diffs and terminal test-runner output stay readable.
///
/// # Examples
///
/// ```
/// use testport::utils::truncate_desc;
///
/// assert_eq!(truncate_desc("SELECT 1", 80), "SELECT 1");
/// assert_eq!(truncate_desc("abcdefghij", 8), "abcde...");
/// ```
pub fn truncate_desc(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        kept + "..."
    }
}

/// Turn a dialect name into a label for `describe` headings.
///
/// Underscore-separated words are title-cased and joined without spaces:
/// `"mysql"` becomes `"Mysql"`, `"big_query"` becomes `"BigQuery"`.
pub fn dialect_label(dialect: &str) -> String {
    dialect
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_truncate_desc() {
        assert_eq!(truncate_desc("short", 80), "short");
        assert_eq!(truncate_desc("exactly8", 8), "exactly8");
        assert_eq!(truncate_desc("longer than eight", 8), "longe...");
        // Truncation counts characters, not bytes.
        assert_eq!(truncate_desc("你好世界你好世界", 7), "你好世界...");
    }

    #[test]
    fn test_dialect_label() {
        assert_eq!(dialect_label("mysql"), "Mysql");
        assert_eq!(dialect_label("duckdb"), "Duckdb");
        assert_eq!(dialect_label("single_store"), "SingleStore");
        assert_eq!(dialect_label("TSQL"), "Tsql");
    }
}
