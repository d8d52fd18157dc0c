//! Text scanning for the BCML codec: noise stripping, scalar inference,
//! array splitting, and logical-line flattening.
//!
//! The line parser works on *stripped* text: all whitespace, braces, and
//! double quotes are removed globally before any splitting happens. This
//! is a blunt normalization, not a lexer — embedded spaces inside a
//! string value are lost too, which is a documented property of the
//! format (see [`crate::format`]).

use crate::value::Value;

/// Strips every whitespace character, brace, and double quote from the
/// text, wherever it occurs.
pub(crate) fn strip_noise(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '{' && *c != '}' && *c != '"')
        .collect()
}

/// Infers a scalar value from one token.
///
/// The cascade: 32-bit integer, then 64-bit float, then boolean
/// (case-insensitive `true`/`false`), then single character, then
/// string. An empty token yields `None`. An integer too wide for 32 bits
/// still parses as a float, like `3000000000` — the cascade never
/// produces the wider integer kinds.
pub(crate) fn infer_scalar(token: &str) -> Option<Value> {
    let token = strip_noise(token);
    if token.is_empty() {
        return None;
    }
    if let Ok(n) = token.parse::<i32>() {
        return Some(Value::Int(n));
    }
    if let Ok(n) = token.parse::<f64>() {
        return Some(Value::Double(n));
    }
    if token.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if token.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Value::Char(c)),
        _ => Some(Value::Str(token)),
    }
}

/// Splits a bracketed segment into an array value. Every bracket is
/// removed, the remainder splits on commas, and each piece goes through
/// scalar inference. Pieces that tokenize to nothing are dropped.
pub(crate) fn split_array(segment: &str) -> Vec<Value> {
    let inner: String = segment.chars().filter(|c| *c != '[' && *c != ']').collect();
    inner.split(',').filter_map(infer_scalar).collect()
}

/// Collapses nested brace blocks onto single logical lines.
///
/// Tracks brace depth explicitly: newlines and tabs inside a block are
/// dropped so that
///
/// ```text
/// a: {
///     b: 1
/// }
/// ```
///
/// becomes the logical line `a: {b: 1}`. Brackets are not tracked, so an
/// array value spread over several physical lines still splits apart —
/// the documented weak point of the format.
pub(crate) fn flatten_blocks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '{' => {
                depth += 1;
                out.push(c);
            }
            '}' => {
                depth = depth.saturating_sub(1);
                out.push(c);
            }
            '\n' | '\t' if depth > 0 => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_noise() {
        assert_eq!(strip_noise("  \"key\" : { 1 }\t"), "key:1");
        assert_eq!(strip_noise("plain"), "plain");
    }

    #[test]
    fn test_infer_scalar_cascade() {
        assert_eq!(infer_scalar("30"), Some(Value::Int(30)));
        assert_eq!(infer_scalar("-7"), Some(Value::Int(-7)));
        assert_eq!(infer_scalar("3.14"), Some(Value::Double(3.14)));
        assert_eq!(infer_scalar("3000000000"), Some(Value::Double(3_000_000_000.0)));
        assert_eq!(infer_scalar("TRUE"), Some(Value::Bool(true)));
        assert_eq!(infer_scalar("false"), Some(Value::Bool(false)));
        assert_eq!(infer_scalar("x"), Some(Value::Char('x')));
        assert_eq!(infer_scalar("age"), Some(Value::Str("age".to_string())));
        assert_eq!(infer_scalar(""), None);
        assert_eq!(infer_scalar("  "), None);
    }

    #[test]
    fn test_split_array() {
        assert_eq!(
            split_array("[1,2,3]"),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
        assert_eq!(
            split_array("[1,,x]"),
            vec![Value::Int(1), Value::Char('x')]
        );
        assert!(split_array("[]").is_empty());
    }

    #[test]
    fn test_flatten_blocks() {
        assert_eq!(flatten_blocks("a: {\nb: 1\n}\nc: 2"), "a: {b: 1}\nc: 2");
        assert_eq!(
            flatten_blocks("a: {\nb: {\nc: 1\n}\n}"),
            "a: {b: {c: 1}}"
        );
        assert_eq!(flatten_blocks("flat: 1\nalso: 2"), "flat: 1\nalso: 2");
    }
}
