//! Test-case building and file rendering (Phase 3: Emission).
//!
//! Two steps: `build_groups` expands classified records into `TestCase`
//! values (one per record, or one per dialect-pair entry for cross
//! records), then `emit_file` renders them to text. Keeping the builder
//! separate keeps classification out of the rendering loop and lets the
//! driver count cases without rendering.
//!
//! Rendering is a pure function of its inputs: identical
//! `(dialect, records, options)` always yields byte-identical output.
//! The driver's protected-file guarantee and clean regeneration diffs
//! both rely on this.

use std::collections::HashMap;

use crate::core::extract::{CallKind, ExtractedCall, SqlEntry, TEST_METHOD_PREFIX};
use crate::emit::escape::ts_string;
use crate::rules::{
    UNSUPPORTED_ERROR_REASON, classify_read_entry, classify_record, classify_write_entry,
};
use crate::utils::{dialect_label, truncate_desc};

/// Maximum length of the SQL text inside a placeholder description.
const PLACEHOLDER_SQL_LEN: usize = 70;
/// Maximum length of a composed test description.
const CASE_DESC_LEN: usize = 90;

/// Rendering options resolved from configuration.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Module specifier for the `transpile` import in generated files.
    pub transpile_import: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            transpile_import: "../../src/index.js".to_string(),
        }
    }
}

/// How an active test case exercises the destination engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseBody {
    /// `validateIdentity(sql[, expected])`: same-dialect round-trip.
    Identity {
        sql: String,
        expected: Option<String>,
    },
    /// `transpile(input, { readDialect, writeDialect })[0]` must equal
    /// `expected`.
    Transpile {
        input: String,
        read: String,
        write: String,
        expected: String,
    },
}

/// One emitted test case.
///
/// `body: None` renders a disabled `it.todo(...)` placeholder; the
/// description then already carries the reason in parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub desc: String,
    pub body: Option<CaseBody>,
}

/// One `describe` group: an origin method and its cases in extraction
/// order.
#[derive(Debug)]
pub struct TestGroup {
    pub origin_method: String,
    pub cases: Vec<TestCase>,
}

/// Count `(active, placeholder)` cases across groups.
pub fn case_counts(groups: &[TestGroup]) -> (usize, usize) {
    let mut active = 0;
    let mut todo = 0;
    for group in groups {
        for case in &group.cases {
            if case.body.is_some() {
                active += 1;
            } else {
                todo += 1;
            }
        }
    }
    (active, todo)
}

/// Expand classified records into test cases, grouped by origin method in
/// first-seen order.
pub fn build_groups(dialect: &str, calls: &[ExtractedCall]) -> Vec<TestGroup> {
    let mut order: Vec<&str> = Vec::new();
    let mut by_method: HashMap<&str, Vec<&ExtractedCall>> = HashMap::new();
    for call in calls {
        let method = call.origin_method.as_str();
        if !by_method.contains_key(method) {
            order.push(method);
        }
        by_method.entry(method).or_default().push(call);
    }

    order
        .into_iter()
        .map(|method| {
            let mut builder = GroupBuilder::new(dialect);
            for call in &by_method[method] {
                builder.push_call(call);
            }
            TestGroup {
                origin_method: method.to_string(),
                cases: builder.cases,
            }
        })
        .collect()
}

/// Accumulates the cases of one `describe` group, deduplicating
/// descriptions as it goes.
struct GroupBuilder<'a> {
    dialect: &'a str,
    cases: Vec<TestCase>,
    name_counts: HashMap<String, usize>,
}

impl<'a> GroupBuilder<'a> {
    fn new(dialect: &'a str) -> Self {
        Self {
            dialect,
            cases: Vec::new(),
            name_counts: HashMap::new(),
        }
    }

    /// Identical descriptions get a ` (2)`, ` (3)`, ... suffix from the
    /// second occurrence on, so the destination test runner never sees
    /// two same-named tests in one group.
    fn dedup(&mut self, name: String) -> String {
        let count = self.name_counts.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count > 1 {
            format!("{} ({})", name, count)
        } else {
            name
        }
    }

    fn push_call(&mut self, call: &ExtractedCall) {
        if let Some(reason) = classify_record(call) {
            let desc = if call.primary_sql.is_empty() {
                format!("{}: {}", call.origin_method, reason)
            } else {
                format!(
                    "{} ({})",
                    truncate_desc(&call.primary_sql, PLACEHOLDER_SQL_LEN),
                    reason
                )
            };
            let desc = self.dedup(desc);
            self.cases.push(TestCase { desc, body: None });
            return;
        }

        match call.kind {
            CallKind::Identity => self.push_identity(call),
            CallKind::Cross => self.push_cross(call),
            // classify_record always labels unresolved records.
            CallKind::Unresolved => unreachable!("unresolved records classify as placeholders"),
        }
    }

    fn push_identity(&mut self, call: &ExtractedCall) {
        let desc = match &call.expected_sql {
            Some(expected) => truncate_desc(
                &format!("{} -> {}", call.primary_sql, expected),
                CASE_DESC_LEN,
            ),
            None => truncate_desc(&call.primary_sql, CASE_DESC_LEN),
        };
        let desc = self.dedup(desc);
        self.cases.push(TestCase {
            desc,
            body: Some(CaseBody::Identity {
                sql: call.primary_sql.clone(),
                expected: call.expected_sql.clone(),
            }),
        });
    }

    /// Fan a cross record out into one case per mapping entry, each
    /// independently classified. The dialect-pair prefix is composed
    /// before truncation so it is never dropped.
    fn push_cross(&mut self, call: &ExtractedCall) {
        let mut expanded = false;

        for (read_dialect, entry) in &call.read {
            expanded = true;
            match entry {
                SqlEntry::Sql(read_sql) => {
                    let desc = truncate_desc(
                        &format!("{} -> {}: {}", read_dialect, self.dialect, read_sql),
                        CASE_DESC_LEN,
                    );
                    let desc = self.dedup(desc);
                    match classify_read_entry(read_sql, read_dialect, self.dialect) {
                        Some(reason) => self.cases.push(TestCase {
                            desc: format!("{} ({})", desc, reason),
                            body: None,
                        }),
                        None => self.cases.push(TestCase {
                            desc,
                            body: Some(CaseBody::Transpile {
                                input: read_sql.clone(),
                                read: read_dialect.clone(),
                                write: self.dialect.to_string(),
                                expected: call.primary_sql.clone(),
                            }),
                        }),
                    }
                }
                SqlEntry::UnsupportedError => {
                    let desc = truncate_desc(
                        &format!("{} -> {}: {}", read_dialect, self.dialect, call.primary_sql),
                        CASE_DESC_LEN,
                    );
                    let desc = self.dedup(desc);
                    self.cases.push(TestCase {
                        desc: format!("{} ({})", desc, UNSUPPORTED_ERROR_REASON),
                        body: None,
                    });
                }
            }
        }

        for (write_dialect, entry) in &call.write {
            expanded = true;
            let desc = truncate_desc(
                &format!("{} -> {}: {}", self.dialect, write_dialect, call.primary_sql),
                CASE_DESC_LEN,
            );
            let desc = self.dedup(desc);
            match entry {
                SqlEntry::Sql(write_sql) => {
                    match classify_write_entry(
                        &call.primary_sql,
                        write_sql,
                        write_dialect,
                        self.dialect,
                    ) {
                        Some(reason) => self.cases.push(TestCase {
                            desc: format!("{} ({})", desc, reason),
                            body: None,
                        }),
                        None => self.cases.push(TestCase {
                            desc,
                            body: Some(CaseBody::Transpile {
                                input: call.primary_sql.clone(),
                                read: self.dialect.to_string(),
                                write: write_dialect.clone(),
                                expected: write_sql.clone(),
                            }),
                        }),
                    }
                }
                SqlEntry::UnsupportedError => self.cases.push(TestCase {
                    desc: format!("{} ({})", desc, UNSUPPORTED_ERROR_REASON),
                    body: None,
                }),
            }
        }

        // No mapping entries at all: the record still asserts identity on
        // its own dialect.
        if !expanded {
            let desc = truncate_desc(&call.primary_sql, CASE_DESC_LEN);
            let desc = self.dedup(desc);
            self.cases.push(TestCase {
                desc,
                body: Some(CaseBody::Identity {
                    sql: call.primary_sql.clone(),
                    expected: None,
                }),
            });
        }
    }
}

/// Render the full destination test file for one dialect.
pub fn emit_file(dialect: &str, calls: &[ExtractedCall], options: &EmitOptions) -> String {
    let groups = build_groups(dialect, calls);
    render_groups(dialect, &groups, options)
}

/// Render already-built groups; `emit_file` is the usual entry point.
pub fn render_groups(dialect: &str, groups: &[TestGroup], options: &EmitOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("// @generated by testport -- DO NOT EDIT".to_string());
    lines.push("import { describe, it, expect } from \"vitest\";".to_string());
    lines.push(format!(
        "import {{ transpile }} from {};",
        ts_string(&options.transpile_import)
    ));
    lines.push(String::new());
    lines.push(format!("const DIALECT = {};", ts_string(dialect)));
    lines.push(String::new());
    lines.push("function validateIdentity(sql: string, writeSql?: string): void {".to_string());
    lines.push(
        "  const result = transpile(sql, { readDialect: DIALECT, writeDialect: DIALECT })[0];"
            .to_string(),
    );
    lines.push("  expect(result).toBe(writeSql ?? sql);".to_string());
    lines.push("}".to_string());
    lines.push(String::new());

    let label_prefix = dialect_label(dialect);
    for group in groups {
        let method = group
            .origin_method
            .strip_prefix(TEST_METHOD_PREFIX)
            .unwrap_or(&group.origin_method);
        let heading = format!("{}: {}", label_prefix, method);
        lines.push(format!("describe({}, () => {{", ts_string(&heading)));

        for case in &group.cases {
            match &case.body {
                None => lines.push(format!("  it.todo({});", ts_string(&case.desc))),
                Some(CaseBody::Identity { sql, expected }) => {
                    lines.push(format!("  it({}, () => {{", ts_string(&case.desc)));
                    match expected {
                        Some(expected) => lines.push(format!(
                            "    validateIdentity({}, {});",
                            ts_string(sql),
                            ts_string(expected)
                        )),
                        None => lines.push(format!("    validateIdentity({});", ts_string(sql))),
                    }
                    lines.push("  });".to_string());
                }
                Some(CaseBody::Transpile {
                    input,
                    read,
                    write,
                    expected,
                }) => {
                    lines.push(format!("  it({}, () => {{", ts_string(&case.desc)));
                    lines.push(format!(
                        "    const result = transpile({}, {{ readDialect: {}, writeDialect: {} }})[0];",
                        ts_string(input),
                        dialect_expr(read, dialect),
                        dialect_expr(write, dialect),
                    ));
                    lines.push(format!("    expect(result).toBe({});", ts_string(expected)));
                    lines.push("  });".to_string());
                }
            }
        }

        lines.push("});".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// The file-level `DIALECT` binding for the file's own dialect, a string
/// literal for any other.
fn dialect_expr(name: &str, file_dialect: &str) -> String {
    if name == file_dialect {
        "DIALECT".to_string()
    } else {
        ts_string(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::extract::{CallKind, ExtractedCall, SqlEntry};

    fn identity(sql: &str) -> ExtractedCall {
        let mut call = ExtractedCall::new(CallKind::Identity, "test_basic");
        call.primary_sql = sql.to_string();
        call
    }

    fn cross(sql: &str) -> ExtractedCall {
        let mut call = ExtractedCall::new(CallKind::Cross, "test_basic");
        call.primary_sql = sql.to_string();
        call
    }

    #[test]
    fn emission_is_idempotent() {
        let calls = vec![identity("SELECT 1"), identity("SELECT 'a'")];
        let options = EmitOptions::default();
        let first = emit_file("mysql", &calls, &options);
        let second = emit_file("mysql", &calls, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn portable_identity_renders_an_active_round_trip() {
        let out = emit_file("mysql", &[identity("SELECT 1")], &EmitOptions::default());
        assert!(out.contains("describe(\"Mysql: basic\", () => {"));
        assert!(out.contains("  it(\"SELECT 1\", () => {"));
        assert!(out.contains("    validateIdentity(\"SELECT 1\");"));
    }

    #[test]
    fn identity_with_expected_sql_passes_both_arguments() {
        let mut call = identity("SELECT  1");
        call.expected_sql = Some("SELECT 1".to_string());
        let out = emit_file("mysql", &[call], &EmitOptions::default());
        assert!(out.contains("  it(\"SELECT  1 -> SELECT 1\", () => {"));
        assert!(out.contains("    validateIdentity(\"SELECT  1\", \"SELECT 1\");"));
    }

    #[test]
    fn the_helper_asserts_the_same_dialect_round_trip() {
        let out = emit_file("mysql", &[], &EmitOptions::default());
        assert!(out.contains(
            "  const result = transpile(sql, { readDialect: DIALECT, writeDialect: DIALECT })[0];"
        ));
        assert!(out.contains("  expect(result).toBe(writeSql ?? sql);"));
    }

    #[test]
    fn cross_write_entry_renders_a_transpile_assertion() {
        let mut call = cross("SELECT 1");
        call.write = vec![("other".to_string(), SqlEntry::Sql("SELECT 1".to_string()))];
        let out = emit_file("this", &[call], &EmitOptions::default());
        assert!(out.contains("  it(\"this -> other: SELECT 1\", () => {"));
        assert!(out.contains(
            "    const result = transpile(\"SELECT 1\", { readDialect: DIALECT, writeDialect: \"other\" })[0];"
        ));
        assert!(out.contains("    expect(result).toBe(\"SELECT 1\");"));
    }

    #[test]
    fn cross_read_entry_expects_the_base_sql() {
        let mut call = cross("SELECT 2");
        call.read = vec![("duckdb".to_string(), SqlEntry::Sql("SELECT 02".to_string()))];
        let out = emit_file("mysql", &[call], &EmitOptions::default());
        assert!(out.contains("  it(\"duckdb -> mysql: SELECT 02\", () => {"));
        assert!(out.contains(
            "    const result = transpile(\"SELECT 02\", { readDialect: \"duckdb\", writeDialect: DIALECT })[0];"
        ));
        assert!(out.contains("    expect(result).toBe(\"SELECT 2\");"));
    }

    #[test]
    fn cross_record_without_mappings_falls_back_to_identity() {
        let out = emit_file("mysql", &[cross("SELECT 3")], &EmitOptions::default());
        assert!(out.contains("    validateIdentity(\"SELECT 3\");"));
    }

    #[test]
    fn pretty_records_render_exactly_one_placeholder() {
        let mut call = cross("SELECT 1");
        call.write = vec![
            ("presto".to_string(), SqlEntry::Sql("SELECT 1".to_string())),
            ("hive".to_string(), SqlEntry::Sql("SELECT 1".to_string())),
        ];
        call.pretty = true;
        let groups = build_groups("mysql", &[call]);
        let (active, todo) = case_counts(&groups);
        assert_eq!((active, todo), (0, 1));
        assert_eq!(
            groups[0].cases[0].desc,
            "SELECT 1 (pretty option not supported)"
        );
    }

    #[test]
    fn write_error_sentinel_renders_a_reasoned_placeholder() {
        // Only sentinel entries: the record-level flag already labels it.
        let mut call = cross("SELECT LPAD(x)");
        call.write = vec![("presto".to_string(), SqlEntry::UnsupportedError)];
        call.expects_unsupported_error = true;
        let out = emit_file("mysql", &[call], &EmitOptions::default());
        assert!(out.contains(
            "  it.todo(\"SELECT LPAD(x) (expected unsupported-construct error)\");"
        ));
    }

    #[test]
    fn read_error_sentinel_is_not_silently_dropped() {
        let mut call = cross("SELECT 1");
        call.read = vec![("hive".to_string(), SqlEntry::UnsupportedError)];
        let out = emit_file("mysql", &[call], &EmitOptions::default());
        assert!(out.contains(
            "  it.todo(\"hive -> mysql: SELECT 1 (expected unsupported-construct error)\");"
        ));
    }

    #[test]
    fn cross_dialect_entries_become_placeholders() {
        let mut call = cross("SELECT CONCAT(a, b)");
        call.write = vec![(
            "presto".to_string(),
            SqlEntry::Sql("SELECT a || b".to_string()),
        )];
        let groups = build_groups("mysql", &[call]);
        // `a || b` hits the syntax table before the cross-dialect table.
        assert_eq!(
            groups[0].cases[0].desc,
            "mysql -> presto: SELECT CONCAT(a, b) (unsupported syntax)"
        );
        assert!(groups[0].cases[0].body.is_none());
    }

    #[test]
    fn duplicate_descriptions_get_numeric_suffixes() {
        let calls = vec![identity("SELECT 1"), identity("SELECT 1")];
        let groups = build_groups("mysql", &calls);
        assert_eq!(groups[0].cases[0].desc, "SELECT 1");
        assert_eq!(groups[0].cases[1].desc, "SELECT 1 (2)");
    }

    #[test]
    fn long_descriptions_keep_the_dialect_pair_prefix() {
        let sql = "SELECT ".to_string() + &"x, ".repeat(60) + "y";
        let mut call = cross(&sql);
        call.write = vec![("presto".to_string(), SqlEntry::Sql(sql.clone()))];
        let groups = build_groups("mysql", &[call]);
        let desc = &groups[0].cases[0].desc;
        assert!(desc.starts_with("mysql -> presto: SELECT "));
        assert!(desc.ends_with("..."));
        assert_eq!(desc.chars().count(), 90);
    }

    #[test]
    fn placeholder_descriptions_truncate_the_sql_text() {
        let mut call = identity(&"SELECT aaaaaaaaaa".repeat(10));
        call.pretty = true;
        let groups = build_groups("mysql", &[call]);
        let desc = &groups[0].cases[0].desc;
        assert!(desc.ends_with("... (pretty option not supported)"));
    }

    #[test]
    fn quoted_sql_is_emitted_in_a_parseable_literal() {
        let out = emit_file(
            "mysql",
            &[identity("SELECT 'It''s' AS \"q\"")],
            &EmitOptions::default(),
        );
        // Both quote kinds present: the emitted literal must be a
        // template literal, which cannot terminate early.
        assert!(out.contains("validateIdentity(`SELECT 'It''s' AS \"q\"`);"));
    }

    #[test]
    fn groups_preserve_first_seen_method_order() {
        let mut a = identity("SELECT 1");
        a.origin_method = "test_b".to_string();
        let mut b = identity("SELECT 2");
        b.origin_method = "test_a".to_string();
        let mut c = identity("SELECT 3");
        c.origin_method = "test_b".to_string();
        let groups = build_groups("mysql", &[a, b, c]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].origin_method, "test_b");
        assert_eq!(groups[0].cases.len(), 2);
        assert_eq!(groups[1].origin_method, "test_a");
    }

    #[test]
    fn unresolved_records_render_method_prefixed_placeholders() {
        let call = ExtractedCall::unresolved("test_basic", "assertEqual call");
        let out = emit_file("mysql", &[call], &EmitOptions::default());
        assert!(out.contains("  it.todo(\"test_basic: assertEqual call\");"));
    }

    #[test]
    fn transpile_import_path_is_configurable() {
        let options = EmitOptions {
            transpile_import: "../src/transpile.js".to_string(),
        };
        let out = emit_file("mysql", &[], &options);
        assert!(out.contains("import { transpile } from \"../src/transpile.js\";"));
    }
}
