//! Extracted test-call records produced during Phase 1: Extraction.
//!
//! This module defines the intermediate representation for origin test
//! assertions collected during the Python AST walk. Records are read-only
//! after extraction: `crate::rules` attaches a portability label without
//! mutating them, and `crate::emit` renders them without mutating them.

/// Which origin assertion a record was extracted from.
///
/// Exactly one kind per record; it selects the emitter path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// `validate_identity(sql, ...)`: parse-then-render in one dialect
    /// must reproduce the input (or an explicitly expected rewrite).
    Identity,

    /// `validate_all(sql, read={...}, write={...})`: the SQL must
    /// round-trip across dialect pairs, one assertion per mapping entry.
    Cross,

    /// The statement was recognized but its literal values could not be
    /// statically determined; `unresolved_reason` says why.
    Unresolved,
}

/// One value of a `read`/`write` dialect mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlEntry {
    /// A literal SQL string for the paired dialect.
    Sql(String),

    /// The `UnsupportedError` marker: the origin test expects the
    /// transpile to fail with an unsupported-construct error instead of
    /// producing text.
    UnsupportedError,
}

impl SqlEntry {
    /// The literal SQL, or `None` for the error sentinel.
    pub fn as_sql(&self) -> Option<&str> {
        match self {
            SqlEntry::Sql(sql) => Some(sql),
            SqlEntry::UnsupportedError => None,
        }
    }
}

/// A single extracted test assertion from Python source.
///
/// # Lifecycle
///
/// 1. **Extraction**: created by the statement walk in
///    `crate::core::extract::visitor`, once per assertion statement (or
///    once per substituted value when the statement sits inside a loop
///    over a literal iterable).
/// 2. **Classification**: `crate::rules::classify_record` computes a
///    needs-manual-port reason or portable, without mutation.
/// 3. **Emission**: `crate::emit` renders an active test or a disabled
///    placeholder, without mutation.
///
/// Each record belongs to exactly one origin method's list; records are
/// never shared across methods or files.
#[derive(Debug, Clone)]
pub struct ExtractedCall {
    pub kind: CallKind,

    /// Name of the enclosing Python test method (e.g. `test_mysql`).
    /// Groups records into one `describe` block per method.
    pub origin_method: String,

    /// The literal SQL under test. Empty for `Unresolved` records.
    pub primary_sql: String,

    /// Expected normalized output when it differs from `primary_sql`
    /// (identity round-trip with rewrite). `None` means the expected
    /// output equals the input.
    pub expected_sql: Option<String>,

    /// Ordered dialect-name -> SQL mapping from the `read=` keyword.
    /// Only populated for `Cross` records.
    pub read: Vec<(String, SqlEntry)>,

    /// Ordered dialect-name -> SQL mapping from the `write=` keyword.
    /// Only populated for `Cross` records.
    pub write: Vec<(String, SqlEntry)>,

    /// `pretty=True` was passed: pretty-printed output is not supported
    /// by the destination framework.
    pub pretty: bool,

    /// `identify=True` was passed: forced identifier quoting is not
    /// supported by the destination framework.
    pub identify: bool,

    /// `check_command_warning=True` was passed.
    pub command_warning: bool,

    /// The call had a chained `.assert_is(...)` structural assertion.
    pub chained_assertion: bool,

    /// The `write` mapping contains the `UnsupportedError` sentinel.
    pub expects_unsupported_error: bool,

    /// Why the record's literal values could not be statically
    /// determined. Populated only when `kind` is `Unresolved`.
    pub unresolved_reason: Option<String>,
}

impl ExtractedCall {
    /// A record of the given kind with all options off.
    pub fn new(kind: CallKind, origin_method: &str) -> Self {
        Self {
            kind,
            origin_method: origin_method.to_string(),
            primary_sql: String::new(),
            expected_sql: None,
            read: Vec::new(),
            write: Vec::new(),
            pretty: false,
            identify: false,
            command_warning: false,
            chained_assertion: false,
            expects_unsupported_error: false,
            unresolved_reason: None,
        }
    }

    /// A record for a statement whose literal values could not be
    /// statically determined.
    pub fn unresolved(origin_method: &str, reason: impl Into<String>) -> Self {
        let mut call = Self::new(CallKind::Unresolved, origin_method);
        call.unresolved_reason = Some(reason.into());
        call
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_records_carry_their_reason() {
        let call = ExtractedCall::unresolved("test_x", "assert statement");
        assert_eq!(call.kind, CallKind::Unresolved);
        assert_eq!(call.unresolved_reason.as_deref(), Some("assert statement"));
        assert!(call.primary_sql.is_empty());
    }

    #[test]
    fn sql_entry_sentinel_has_no_sql() {
        assert_eq!(SqlEntry::Sql("SELECT 1".into()).as_sql(), Some("SELECT 1"));
        assert_eq!(SqlEntry::UnsupportedError.as_sql(), None);
    }
}
