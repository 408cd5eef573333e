//! HCL block renderer
//!
//! Turns an ordered sequence of `(name, Value)` pairs into Terraform
//! resource block text. Pure string building: no I/O, no shared state, so
//! independent resource instances can be rendered from any number of call
//! sites concurrently. Identical input always produces byte-identical
//! output; the test suite compares against golden strings.

use std::fmt::Write;

use super::value::Value;

/// One level of indentation
const INDENT: &str = "  ";

/// Render a full `resource "type" "name" { ... }` block.
///
/// Attributes render in the given order; absent values are omitted.
pub fn render_resource(resource_type: &str, name: &str, attributes: &[(String, Value)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "resource \"{resource_type}\" \"{name}\" {{");
    for (key, value) in attributes {
        write_attr(&mut out, key, value, INDENT);
    }
    out.push_str("}\n");
    out
}

/// Append one attribute line (or nested block) at the given indent.
///
/// Absent values emit nothing at all: no line, no trailing artifact.
pub fn write_attr(out: &mut String, name: &str, value: &Value, indent: &str) {
    match value {
        Value::Absent => {}
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            let _ = writeln!(out, "{indent}{name} = {}", scalar_literal(value));
        }
        Value::List(items) => write_list(out, name, items, indent),
        Value::Map(entries) => {
            let _ = writeln!(out, "{indent}{name} = {{");
            let inner = format!("{indent}{INDENT}");
            for (key, nested) in entries {
                write_attr(out, key, nested, &inner);
            }
            let _ = writeln!(out, "{indent}}}");
        }
    }
}

fn write_list(out: &mut String, name: &str, items: &[Value], indent: &str) {
    let items: Vec<&Value> = items.iter().filter(|item| !item.is_absent()).collect();

    if items.is_empty() {
        let _ = writeln!(out, "{indent}{name} = []");
        return;
    }

    // Lists of plain scalars stay on one line; anything nested goes
    // multi-line with one element per line.
    if items.iter().all(|item| item.is_scalar()) {
        let rendered: Vec<String> = items.iter().map(|item| scalar_literal(item)).collect();
        let _ = writeln!(out, "{indent}{name} = [{}]", rendered.join(", "));
        return;
    }

    let _ = writeln!(out, "{indent}{name} = [");
    let inner = format!("{indent}{INDENT}");
    for item in items {
        write_element(out, item, &inner);
    }
    let _ = writeln!(out, "{indent}]");
}

/// Append one list element at the given indent, with a trailing comma.
fn write_element(out: &mut String, value: &Value, indent: &str) {
    match value {
        Value::Absent => {}
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            let _ = writeln!(out, "{indent}{},", scalar_literal(value));
        }
        Value::List(items) => {
            // Same layout rule as attribute-level lists: scalar-only stays
            // on one line, anything nested goes multi-line.
            let items: Vec<&Value> = items.iter().filter(|item| !item.is_absent()).collect();
            if items.iter().all(|item| item.is_scalar()) {
                let rendered: Vec<String> =
                    items.iter().map(|item| scalar_literal(item)).collect();
                let _ = writeln!(out, "{indent}[{}],", rendered.join(", "));
            } else {
                let _ = writeln!(out, "{indent}[");
                let inner = format!("{indent}{INDENT}");
                for item in items {
                    write_element(out, item, &inner);
                }
                let _ = writeln!(out, "{indent}],");
            }
        }
        Value::Map(entries) => {
            let _ = writeln!(out, "{indent}{{");
            let inner = format!("{indent}{INDENT}");
            for (key, nested) in entries {
                write_attr(out, key, nested, &inner);
            }
            let _ = writeln!(out, "{indent}}},");
        }
    }
}

fn scalar_literal(value: &Value) -> String {
    match value {
        Value::String(s) => quote_string(s),
        Value::Number(n) => number_literal(*n),
        Value::Bool(b) => b.to_string(),
        // write_attr and write_element only route scalars here
        Value::Absent | Value::List(_) | Value::Map(_) => {
            unreachable!("scalar_literal called with non-scalar value")
        }
    }
}

/// Quote and escape a string so the literal re-parses to the same string.
///
/// Escapes backslash, double quote, and control characters, plus the HCL
/// template introducers `${` and `%{`.
fn quote_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');

    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '$' if chars.peek() == Some(&'{') => {
                quoted.push_str("$${");
                chars.next();
            }
            '%' if chars.peek() == Some(&'{') => {
                quoted.push_str("%%{");
                chars.next();
            }
            _ => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}

/// Format a number, dropping the fractional part when it is zero.
///
/// `1.0` renders as `1`, matching HCL numeric literal convention.
fn number_literal(n: f64) -> String {
    const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0; // 2^53

    if n.is_finite() && n.fract() == 0.0 && n.abs() < MAX_EXACT_INT {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
