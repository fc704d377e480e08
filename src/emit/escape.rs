//! TypeScript string-literal escaping.

/// Escape a string for TypeScript, returning the literal WITH surrounding
/// quotes.
///
/// The quote variant is chosen so the emitted file itself parses, not
/// merely escaped and hoped: double quotes by default; single quotes when
/// the text contains `"` but not `'`; a backtick template literal (with
/// `` ` `` and `${` escaped) when it contains both. Control characters
/// (newline, carriage return, tab, NUL) are always backslash-escaped,
/// after backslashes themselves.
pub fn ts_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
        .replace('\0', "\\0");

    let has_double = escaped.contains('"');
    let has_single = escaped.contains('\'');

    if has_double && !has_single {
        format!("'{}'", escaped)
    } else if has_double && has_single {
        let escaped = escaped.replace('`', "\\`").replace("${", "\\${");
        format!("`{}`", escaped)
    } else {
        format!("\"{}\"", escaped.replace('"', "\\\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_uses_double_quotes() {
        assert_eq!(ts_string("SELECT 1"), "\"SELECT 1\"");
    }

    #[test]
    fn single_quotes_in_text_stay_in_double_quotes() {
        assert_eq!(ts_string("SELECT 'a'"), "\"SELECT 'a'\"");
    }

    #[test]
    fn double_quotes_in_text_switch_to_single_quotes() {
        assert_eq!(ts_string("SELECT \"col\""), "'SELECT \"col\"'");
    }

    #[test]
    fn both_quote_kinds_switch_to_a_template_literal() {
        assert_eq!(ts_string("It's a \"test\""), "`It's a \"test\"`");
    }

    #[test]
    fn template_literals_escape_backticks_and_interpolation() {
        assert_eq!(ts_string("'`' and \"${x}\""), "`'\\`' and \"\\${x}\"`");
    }

    #[test]
    fn control_characters_are_backslash_escaped() {
        assert_eq!(ts_string("a\nb\tc\rd\0e"), "\"a\\nb\\tc\\rd\\0e\"");
    }

    #[test]
    fn backslashes_are_escaped_first() {
        assert_eq!(ts_string("a\\nb"), "\"a\\\\nb\"");
    }
}
