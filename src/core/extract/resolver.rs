//! Static resolution of literal Python expressions (Phase 1: Extraction).
//!
//! The extractor only ports assertions whose SQL can be determined without
//! running the origin test. This module is the partial evaluator behind
//! that: it resolves a closed set of expression shapes (string literals,
//! f-strings, `+` concatenation, loop-bound names, literal dicts, literal
//! sequences and `range()` calls) and refuses everything else. Refusal is
//! a normal outcome, not an error: the caller records an `Unresolved` call
//! and moves on.

use std::collections::HashMap;

use rustpython_parser::ast::{Constant, Expr, Operator};

use super::call::SqlEntry;

/// Loop-variable substitutions in scope at the current statement.
///
/// Extended on entry to a resolvable `for` body (one clone per iteration
/// value) and never mutated in place, so nested loops compose.
pub type LoopEnv = HashMap<String, String>;

/// Try to resolve an expression to a string value.
///
/// Handles plain string literals, f-strings whose interpolated parts
/// themselves resolve, `+` concatenation of two resolvable operands, and
/// names bound in `env`. Any sub-expression outside this set (attribute
/// access, arbitrary calls, unbound names) makes the whole expression
/// unresolvable, not just that part.
pub fn resolve_string(expr: &Expr, env: &LoopEnv) -> Option<String> {
    match expr {
        Expr::Constant(constant) => match &constant.value {
            Constant::Str(s) => Some(s.clone()),
            _ => None,
        },
        Expr::JoinedStr(joined) => {
            let mut parts = String::new();
            for value in &joined.values {
                let part = match value {
                    Expr::FormattedValue(formatted) => resolve_string(&formatted.value, env)?,
                    other => resolve_string(other, env)?,
                };
                parts.push_str(&part);
            }
            Some(parts)
        }
        Expr::Name(name) => env.get(name.id.as_str()).cloned(),
        Expr::BinOp(binop) if matches!(binop.op, Operator::Add) => {
            let left = resolve_string(&binop.left, env)?;
            let right = resolve_string(&binop.right, env)?;
            Some(left + &right)
        }
        _ => None,
    }
}

/// Try to resolve a dict literal to an ordered dialect -> SQL mapping.
///
/// Values may be resolvable strings or the `UnsupportedError` marker
/// (bare name or attribute). An unresolvable key or value aborts the
/// whole mapping.
pub fn resolve_mapping(expr: &Expr, env: &LoopEnv) -> Option<Vec<(String, SqlEntry)>> {
    let Expr::Dict(dict) = expr else {
        return None;
    };
    let mut entries = Vec::with_capacity(dict.values.len());
    for (key, value) in dict.keys.iter().zip(&dict.values) {
        // A `None` key is a `**spread`, which we cannot see through.
        let dialect = resolve_string(key.as_ref()?, env)?;
        let entry = match resolve_string(value, env) {
            Some(sql) => SqlEntry::Sql(sql),
            None if is_unsupported_error_marker(value) => SqlEntry::UnsupportedError,
            None => return None,
        };
        entries.push((dialect, entry));
    }
    Some(entries)
}

fn is_unsupported_error_marker(expr: &Expr) -> bool {
    match expr {
        Expr::Name(name) => name.id.as_str() == "UnsupportedError",
        Expr::Attribute(attr) => attr.attr.as_str() == "UnsupportedError",
        _ => false,
    }
}

/// Try to resolve a loop iterable to its string values.
///
/// Handles list/tuple literals of strings (with at most arbitrary many
/// `*splat`s of further literal sequences) and one/two-argument `range()`
/// calls over literal integer bounds, which yield decimal strings.
pub fn resolve_iterable(expr: &Expr) -> Option<Vec<String>> {
    let elts = match expr {
        Expr::List(list) => &list.elts,
        Expr::Tuple(tuple) => &tuple.elts,
        Expr::Call(call) => {
            if let Expr::Name(name) = &*call.func
                && name.id.as_str() == "range"
            {
                return resolve_range(&call.args);
            }
            return None;
        }
        _ => return None,
    };

    let mut values = Vec::with_capacity(elts.len());
    for elt in elts {
        match elt {
            Expr::Constant(constant) => match &constant.value {
                Constant::Str(s) => values.push(s.clone()),
                _ => return None,
            },
            Expr::Starred(starred) => values.extend(resolve_iterable(&starred.value)?),
            _ => return None,
        }
    }
    Some(values)
}

fn resolve_range(args: &[Expr]) -> Option<Vec<String>> {
    let (start, stop) = match args {
        [stop] => (0, const_int(stop)?),
        [start, stop] => (const_int(start)?, const_int(stop)?),
        _ => return None,
    };
    Some((start..stop).map(|i| i.to_string()).collect())
}

fn const_int(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Constant(constant) => match &constant.value {
            // Display round-trip keeps us independent of the parser's
            // bigint backend; test bounds are tiny anyway.
            Constant::Int(i) => i.to_string().parse().ok(),
            _ => None,
        },
        _ => None,
    }
}

/// Python truthiness for option keyword values.
///
/// Constants follow Python rules; anything dynamic is assumed truthy, so
/// a computed `pretty=flag` still forces a needs-manual-port label.
pub fn is_truthy(expr: &Expr) -> bool {
    match expr {
        Expr::Constant(constant) => match &constant.value {
            Constant::Bool(b) => *b,
            Constant::None => false,
            Constant::Str(s) => !s.is_empty(),
            Constant::Int(i) => i.to_string() != "0",
            Constant::Float(f) => *f != 0.0,
            _ => true,
        },
        _ => true,
    }
}
