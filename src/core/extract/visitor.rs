//! Statement walk over origin test classes (Phase 1: Extraction).
//!
//! Visits every `test_*` method of every top-level class in a parsed
//! Python test file and turns each recognized assertion statement into an
//! [`ExtractedCall`], in source order. Loops over literal iterables are
//! unrolled by re-visiting the body once per substituted value; `with`
//! blocks are flattened; assignments are inert. Anything recognized but
//! not portable becomes an `Unresolved` record so it is never silently
//! dropped.

use anyhow::Result;
use rustpython_parser::ast::{Constant, Expr, ExprCall, Stmt};

use super::call::{CallKind, ExtractedCall, SqlEntry};
use super::resolver::{LoopEnv, is_truthy, resolve_iterable, resolve_mapping, resolve_string};
use crate::core::parser::parse_python_source;

/// Method-name prefix that marks an origin test method.
pub const TEST_METHOD_PREFIX: &str = "test_";

/// Origin helpers we recognize but cannot port; each becomes an
/// `Unresolved` record naming the helper.
const UNSUPPORTED_HELPERS: &[&str] = &[
    "assertEqual",
    "assertIn",
    "assertNotIn",
    "assertIsInstance",
    "assertRaises",
    "assertLogs",
    "assertTrue",
    "assertFalse",
    "assertIsNone",
    "assertIsNotNone",
    "parse_one",
    "assert_duckdb_sql",
];

/// Result of extracting one origin test file.
#[derive(Debug)]
pub struct Extraction {
    /// Dialect name from the class `dialect = "..."` attribute, or the
    /// caller-provided fallback (derived from the filename).
    pub dialect: String,
    /// All extracted calls, in source order across all test methods.
    pub calls: Vec<ExtractedCall>,
}

/// Parse one origin test file and extract all test calls.
///
/// A parse failure is a hard error for this file; the driver isolates it
/// and keeps processing other files.
pub fn extract_from_source(
    source: &str,
    file_path: &str,
    fallback_dialect: &str,
) -> Result<Extraction> {
    let suite = parse_python_source(source, file_path)?;

    let mut dialect: Option<String> = None;
    let mut calls: Vec<ExtractedCall> = Vec::new();

    for stmt in &suite {
        let Stmt::ClassDef(class) = stmt else {
            continue;
        };

        for item in &class.body {
            if let Some(value) = dialect_attribute(item) {
                dialect = Some(value);
            }
        }

        for item in &class.body {
            if let Stmt::FunctionDef(func) = item
                && func.name.as_str().starts_with(TEST_METHOD_PREFIX)
            {
                let env = LoopEnv::new();
                for body_stmt in &func.body {
                    extract_stmt(body_stmt, func.name.as_str(), &env, &mut calls);
                }
            }
        }
    }

    Ok(Extraction {
        dialect: dialect.unwrap_or_else(|| fallback_dialect.to_string()),
        calls,
    })
}

/// A `dialect = "name"` class attribute, plain or annotated.
fn dialect_attribute(stmt: &Stmt) -> Option<String> {
    match stmt {
        Stmt::Assign(assign) => assign
            .targets
            .iter()
            .any(|t| is_name(t, "dialect"))
            .then(|| const_str(&assign.value))
            .flatten(),
        Stmt::AnnAssign(assign) => {
            if is_name(&assign.target, "dialect") {
                const_str(assign.value.as_deref()?)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn is_name(expr: &Expr, name: &str) -> bool {
    matches!(expr, Expr::Name(n) if n.id.as_str() == name)
}

fn const_str(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Constant(constant) => match &constant.value {
            Constant::Str(s) => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Extract calls from a single statement, in priority order.
fn extract_stmt(stmt: &Stmt, method: &str, env: &LoopEnv, out: &mut Vec<ExtractedCall>) {
    match stmt {
        Stmt::Expr(expr_stmt) => match &*expr_stmt.value {
            Expr::Call(call) => extract_call(call, method, env, out),
            // A bare `...).assert_is` attribute chain without invocation.
            Expr::Attribute(attr) => {
                if attr.attr.as_str() == "assert_is"
                    && let Expr::Call(inner) = &*attr.value
                {
                    extract_chained(inner, method, env, out);
                }
            }
            _ => {}
        },
        Stmt::For(for_stmt) => {
            // Only single-name targets can substitute; `for a, b in ...`
            // stays inert.
            if let Expr::Name(target) = &*for_stmt.target {
                match resolve_iterable(&for_stmt.iter) {
                    Some(values) => {
                        for value in values {
                            let mut scoped = env.clone();
                            scoped.insert(target.id.as_str().to_string(), value);
                            for body_stmt in &for_stmt.body {
                                extract_stmt(body_stmt, method, &scoped, out);
                            }
                        }
                    }
                    None => out.push(ExtractedCall::unresolved(
                        method,
                        "unresolvable for-loop iterable",
                    )),
                }
            }
        }
        // subTest/assertLogs/assertRaises grouping: visit the body as if
        // unnested, keeping any active loop substitutions.
        Stmt::With(with_stmt) => {
            for body_stmt in &with_stmt.body {
                extract_stmt(body_stmt, method, env, out);
            }
        }
        // Local bindings already captured via loop substitution.
        Stmt::Assign(_) | Stmt::AugAssign(_) | Stmt::AnnAssign(_) => {}
        Stmt::Assert(_) => out.push(ExtractedCall::unresolved(method, "assert statement")),
        _ => {}
    }
}

/// Extract from a direct call expression.
fn extract_call(call: &ExprCall, method: &str, env: &LoopEnv, out: &mut Vec<ExtractedCall>) {
    // Chained `validate_*(...).assert_is(...)`.
    if let Expr::Attribute(attr) = &*call.func
        && attr.attr.as_str() == "assert_is"
        && let Expr::Call(inner) = &*attr.value
    {
        extract_chained(inner, method, env, out);
        return;
    }

    match helper_name(call) {
        Some("validate_identity") => extract_validate_identity(call, method, env, out),
        Some("validate_all") => extract_validate_all(call, method, env, out),
        Some(name) if UNSUPPORTED_HELPERS.contains(&name) => {
            out.push(ExtractedCall::unresolved(method, format!("{} call", name)));
        }
        _ => {}
    }
}

/// Extract the inner call of an `.assert_is(...)` chain and flag every
/// produced record as carrying a structural assertion.
fn extract_chained(inner: &ExprCall, method: &str, env: &LoopEnv, out: &mut Vec<ExtractedCall>) {
    let start = out.len();
    extract_call(inner, method, env, out);
    for call in &mut out[start..] {
        call.chained_assertion = true;
    }
}

/// The helper name from `self.helper(...)` or a bare `helper(...)`.
fn helper_name(call: &ExprCall) -> Option<&str> {
    match &*call.func {
        Expr::Attribute(attr) => Some(attr.attr.as_str()),
        Expr::Name(name) => Some(name.id.as_str()),
        _ => None,
    }
}

/// `validate_identity(sql, [expected], *, write_sql=, pretty=, identify=,
/// check_command_warning=)`.
fn extract_validate_identity(
    call: &ExprCall,
    method: &str,
    env: &LoopEnv,
    out: &mut Vec<ExtractedCall>,
) {
    if call.args.is_empty() {
        return;
    }
    let Some(sql) = resolve_string(&call.args[0], env) else {
        out.push(ExtractedCall::unresolved(method, "unresolvable SQL string"));
        return;
    };

    let mut expected = None;
    if call.args.len() > 1 {
        match resolve_string(&call.args[1], env) {
            Some(s) => expected = Some(s),
            None => {
                out.push(ExtractedCall::unresolved(method, "unresolvable expected SQL"));
                return;
            }
        }
    }

    let mut record = ExtractedCall::new(CallKind::Identity, method);
    for kw in &call.keywords {
        match kw.arg.as_ref().map(|a| a.as_str()) {
            Some("write_sql") => match resolve_string(&kw.value, env) {
                Some(s) => expected = Some(s),
                None => {
                    out.push(ExtractedCall::unresolved(method, "unresolvable expected SQL"));
                    return;
                }
            },
            Some("pretty") => record.pretty = is_truthy(&kw.value),
            Some("identify") => record.identify = is_truthy(&kw.value),
            Some("check_command_warning") => record.command_warning = is_truthy(&kw.value),
            _ => {}
        }
    }

    record.primary_sql = sql;
    record.expected_sql = expected;
    out.push(record);
}

/// `validate_all(sql, *, read={...}, write={...}, pretty=, identify=)`.
fn extract_validate_all(
    call: &ExprCall,
    method: &str,
    env: &LoopEnv,
    out: &mut Vec<ExtractedCall>,
) {
    if call.args.is_empty() {
        return;
    }
    let Some(sql) = resolve_string(&call.args[0], env) else {
        out.push(ExtractedCall::unresolved(method, "unresolvable SQL string"));
        return;
    };

    let mut record = ExtractedCall::new(CallKind::Cross, method);
    for kw in &call.keywords {
        match kw.arg.as_ref().map(|a| a.as_str()) {
            Some("read") => match resolve_mapping(&kw.value, env) {
                Some(entries) => record.read = entries,
                None => {
                    out.push(ExtractedCall::unresolved(
                        method,
                        "unresolvable read mapping",
                    ));
                    return;
                }
            },
            Some("write") => match resolve_mapping(&kw.value, env) {
                Some(entries) => record.write = entries,
                None => {
                    out.push(ExtractedCall::unresolved(
                        method,
                        "unresolvable write mapping",
                    ));
                    return;
                }
            },
            Some("pretty") => record.pretty = is_truthy(&kw.value),
            Some("identify") => record.identify = is_truthy(&kw.value),
            _ => {}
        }
    }

    record.expects_unsupported_error = record
        .write
        .iter()
        .any(|(_, entry)| matches!(entry, SqlEntry::UnsupportedError));
    record.primary_sql = sql;
    out.push(record);
}
