//! Portability decision procedure (Phase 2: Classification).
//!
//! Decides, per extracted record and per expanded dialect-pair entry,
//! whether an active destination test can be emitted or a disabled
//! placeholder with a reason. Evaluation is top-to-bottom, first match
//! wins; the rule order is load-bearing. The procedure is deliberately
//! conservative: a false needs-manual-port only costs a placeholder,
//! while a false portable would fail at destination test run time.

use crate::core::extract::{CallKind, ExtractedCall};
use crate::rules::catalog::{
    CROSS_DIALECT_REASON, is_ddl_dml, is_unsupported_cross_dialect, unsupported_sql_reason,
};

pub const CHAINED_ASSERTION_REASON: &str = "chained assertion not supported";
pub const PRETTY_REASON: &str = "pretty option not supported";
pub const IDENTIFY_REASON: &str = "identify option not supported";
pub const COMMAND_WARNING_REASON: &str = "command warning option not supported";
pub const UNSUPPORTED_ERROR_REASON: &str = "expected unsupported-construct error";
pub const EMPTY_SQL_REASON: &str = "empty SQL";
pub const MAPPING_DDL_REASON: &str = "DDL/DML in read/write";

/// Decide whether a whole record needs manual porting.
///
/// Returns the reason, or `None` for a portable record.
pub fn classify_record(call: &ExtractedCall) -> Option<String> {
    if call.kind == CallKind::Unresolved {
        return Some(
            call.unresolved_reason
                .clone()
                .unwrap_or_else(|| "unsupported call".to_string()),
        );
    }

    if call.chained_assertion {
        return Some(CHAINED_ASSERTION_REASON.to_string());
    }
    if call.pretty {
        return Some(PRETTY_REASON.to_string());
    }
    if call.identify {
        return Some(IDENTIFY_REASON.to_string());
    }
    if call.command_warning {
        return Some(COMMAND_WARNING_REASON.to_string());
    }
    if call.expects_unsupported_error {
        return Some(UNSUPPORTED_ERROR_REASON.to_string());
    }

    if call.primary_sql.is_empty() {
        return Some(EMPTY_SQL_REASON.to_string());
    }

    if let Some(reason) = unsupported_sql_reason(&call.primary_sql) {
        return Some(reason.to_string());
    }

    // Cross records: a DDL/DML entry anywhere in the mappings vetoes the
    // whole record, whatever the base SQL looks like.
    if call.kind == CallKind::Cross {
        let entries = call.read.iter().chain(&call.write);
        for (_, entry) in entries {
            if let Some(sql) = entry.as_sql()
                && is_ddl_dml(sql)
            {
                return Some(MAPPING_DDL_REASON.to_string());
            }
        }
    }

    None
}

/// Decide whether one `read` entry of a portable cross record needs a
/// placeholder: the entry's own SQL is checked against the catalogue
/// tables, plus the cross-dialect table when the dialects differ.
pub fn classify_read_entry(
    entry_sql: &str,
    entry_dialect: &str,
    record_dialect: &str,
) -> Option<&'static str> {
    if let Some(reason) = unsupported_sql_reason(entry_sql) {
        return Some(reason);
    }
    if entry_dialect != record_dialect && is_unsupported_cross_dialect(entry_sql) {
        return Some(CROSS_DIALECT_REASON);
    }
    None
}

/// Decide whether one `write` entry of a portable cross record needs a
/// placeholder. The cross-dialect table is checked against both sides of
/// the rewrite: the construct may appear in the base SQL being read or in
/// the expected output.
pub fn classify_write_entry(
    base_sql: &str,
    entry_sql: &str,
    entry_dialect: &str,
    record_dialect: &str,
) -> Option<&'static str> {
    if let Some(reason) = unsupported_sql_reason(entry_sql) {
        return Some(reason);
    }
    if entry_dialect != record_dialect
        && (is_unsupported_cross_dialect(base_sql) || is_unsupported_cross_dialect(entry_sql))
    {
        return Some(CROSS_DIALECT_REASON);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extract::{CallKind, ExtractedCall, SqlEntry};
    use crate::rules::catalog::{DDL_DML_REASON, SYNTAX_REASON};

    fn identity(sql: &str) -> ExtractedCall {
        let mut call = ExtractedCall::new(CallKind::Identity, "test_x");
        call.primary_sql = sql.to_string();
        call
    }

    #[test]
    fn unresolved_records_report_their_stored_reason() {
        let call = ExtractedCall::unresolved("test_x", "assertEqual call");
        assert_eq!(classify_record(&call).as_deref(), Some("assertEqual call"));
    }

    #[test]
    fn flags_outrank_sql_content() {
        let mut call = identity("SELECT 1");
        call.pretty = true;
        assert_eq!(classify_record(&call).as_deref(), Some(PRETTY_REASON));

        // Even DDL is reported as the flag reason: flag rules come first.
        let mut call = identity("CREATE TABLE t (a INT)");
        call.chained_assertion = true;
        assert_eq!(
            classify_record(&call).as_deref(),
            Some(CHAINED_ASSERTION_REASON)
        );
    }

    #[test]
    fn empty_sql_is_not_portable() {
        assert_eq!(classify_record(&identity("")).as_deref(), Some(EMPTY_SQL_REASON));
    }

    #[test]
    fn ddl_precedes_the_syntax_catalogue() {
        // Matches both the DDL table (CREATE) and the syntax table (::).
        let call = identity("CREATE TABLE t AS SELECT a::INT");
        assert_eq!(classify_record(&call).as_deref(), Some(DDL_DML_REASON));
    }

    #[test]
    fn syntax_catalogue_applies_to_the_base_sql() {
        let call = identity("SELECT a -> 'key' FROM t");
        assert_eq!(classify_record(&call).as_deref(), Some(SYNTAX_REASON));
    }

    #[test]
    fn plain_identity_is_portable() {
        assert_eq!(classify_record(&identity("SELECT 1")), None);
    }

    #[test]
    fn ddl_in_a_mapping_vetoes_the_cross_record() {
        let mut call = ExtractedCall::new(CallKind::Cross, "test_x");
        call.primary_sql = "SELECT 1".to_string();
        call.write = vec![(
            "presto".to_string(),
            SqlEntry::Sql("CREATE TABLE t AS SELECT 1".to_string()),
        )];
        assert_eq!(classify_record(&call).as_deref(), Some(MAPPING_DDL_REASON));
    }

    #[test]
    fn error_sentinel_entries_do_not_trip_the_mapping_ddl_rule() {
        let mut call = ExtractedCall::new(CallKind::Cross, "test_x");
        call.primary_sql = "SELECT 1".to_string();
        call.read = vec![("hive".to_string(), SqlEntry::UnsupportedError)];
        assert_eq!(classify_record(&call), None);
    }

    #[test]
    fn cross_dialect_table_only_fires_across_dialects() {
        assert_eq!(
            classify_read_entry("SELECT CONCAT(a, b)", "mysql", "mysql"),
            None
        );
        assert_eq!(
            classify_read_entry("SELECT CONCAT(a, b)", "presto", "mysql"),
            Some(CROSS_DIALECT_REASON)
        );
    }

    #[test]
    fn write_entries_check_both_sides_of_the_rewrite() {
        // The construct appears only in the base SQL being read.
        assert_eq!(
            classify_write_entry("SELECT DATEDIFF(a, b)", "SELECT 1", "presto", "mysql"),
            Some(CROSS_DIALECT_REASON)
        );
        // And only in the expected output.
        assert_eq!(
            classify_write_entry("SELECT 1", "SELECT DATEDIFF(a, b)", "presto", "mysql"),
            Some(CROSS_DIALECT_REASON)
        );
        assert_eq!(
            classify_write_entry("SELECT 1", "SELECT 1", "presto", "mysql"),
            None
        );
    }

    #[test]
    fn entry_syntax_problems_outrank_the_cross_dialect_table() {
        assert_eq!(
            classify_read_entry("SELECT CONCAT(a, b)::TEXT", "presto", "mysql"),
            Some(SYNTAX_REASON)
        );
    }
}
