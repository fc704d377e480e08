use anyhow::{Result, anyhow};
use rustpython_parser::{Parse, ast};

/// Parse Python source code into a statement list.
///
/// This is the core parsing function; callers that want dialect and call
/// extraction should use `extract_from_source` instead.
pub fn parse_python_source(source: &str, file_path: &str) -> Result<ast::Suite> {
    ast::Suite::parse(source, file_path)
        .map_err(|e| anyhow!("Failed to parse {}: {}", file_path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_class_with_a_method() {
        let suite = parse_python_source(
            "class TestThing:\n    def test_a(self):\n        pass\n",
            "<test>",
        )
        .unwrap();
        assert_eq!(suite.len(), 1);
    }

    #[test]
    fn syntax_error_is_reported_with_the_file_path() {
        let err = parse_python_source("def broken(:\n", "tests/test_mysql.py").unwrap_err();
        assert!(err.to_string().contains("tests/test_mysql.py"));
    }
}
