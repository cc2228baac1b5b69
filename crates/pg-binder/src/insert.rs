//! Multi-row INSERT expansion.
//!
//! Locates the `VALUES (...)` template of an INSERT statement, binds it once
//! per input record with strictly sequential placeholder numbering, and
//! reassembles the statement around the expanded rows.

use tracing::debug;

use crate::error::{BindError, Result};
use crate::params::{BindParams, Records};
use crate::query::{bind_query, bind_query_from, BoundQuery};

/// Expands a multi-row INSERT from one substitution mapping per row.
///
/// The substring between the `VALUES` clause's opening parenthesis and its
/// closing parenthesis is taken as a row template and bound once per record;
/// placeholder numbering is globally sequential across rows even when rows
/// share parameter names. The closing parenthesis is the first one followed
/// by `RETURNING`, `ON`, or end of text (case-insensitive). The template
/// must not contain nested parentheses; no balancing is attempted.
///
/// Passing a single [`BindParams`] instead of a row sequence delegates to
/// [`bind_query`] unchanged.
///
/// # Errors
///
/// Returns [`BindError::ValuesClauseNotFound`] if no `VALUES (` sequence
/// exists, or [`BindError::ClosingParenNotFound`] if no qualifying closing
/// parenthesis follows it.
pub fn bind_insert_query(text: &str, records: impl Into<Records>) -> Result<BoundQuery> {
    match records.into() {
        Records::Single(params) => bind_query(text, Some(&params)),
        Records::Rows(rows) => expand_rows(text, &rows),
    }
}

fn expand_rows(text: &str, rows: &[BindParams]) -> Result<BoundQuery> {
    let open = find_values_open(text).ok_or(BindError::ValuesClauseNotFound)?;
    let close = find_template_close(text, open + 1).ok_or(BindError::ClosingParenNotFound)?;
    let template = &text[open + 1..close];

    let mut rendered = Vec::with_capacity(rows.len());
    let mut values = Vec::new();
    let mut index = 1;

    for row in rows {
        let bound = bind_query_from(template, Some(row), index)?;
        index += bound.values.len();
        rendered.push(format!("({})", bound.text));
        values.extend(bound.values);
    }

    let mut out = String::with_capacity(text.len() + rendered.len() * template.len());
    out.push_str(&text[..open]);
    out.push_str(&rendered.join(", "));
    out.push_str(&text[close + 1..]);

    debug!(
        rows = rows.len(),
        params = values.len(),
        "expanded multi-row insert"
    );
    Ok(BoundQuery { text: out, values })
}

/// Finds the byte offset of the opening parenthesis of the `VALUES` clause:
/// the keyword `VALUES` (case-insensitive), optional whitespace, then `(`.
fn find_values_open(text: &str) -> Option<usize> {
    const KEYWORD: &[u8] = b"VALUES";
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos + KEYWORD.len() <= bytes.len() {
        if bytes[pos..pos + KEYWORD.len()].eq_ignore_ascii_case(KEYWORD) {
            let rest = &text[pos + KEYWORD.len()..];
            let trimmed = rest.trim_start();
            if trimmed.as_bytes().first() == Some(&b'(') {
                return Some(pos + KEYWORD.len() + (rest.len() - trimmed.len()));
            }
        }
        pos += 1;
    }
    None
}

/// Finds the closing parenthesis of the row template: the first `)` at or
/// after `from` followed by optional whitespace and `RETURNING`, `ON`, or
/// end of text.
fn find_template_close(text: &str, from: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    for pos in from..bytes.len() {
        if bytes[pos] == b')' {
            let rest = text[pos + 1..].trim_start();
            if rest.is_empty()
                || starts_with_keyword(rest, "RETURNING")
                || starts_with_keyword(rest, "ON")
            {
                return Some(pos);
            }
        }
    }
    None
}

fn starts_with_keyword(rest: &str, keyword: &str) -> bool {
    rest.as_bytes()
        .get(..keyword.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(keyword.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_values_open() {
        assert_eq!(find_values_open("INSERT INTO t VALUES (1)"), Some(21));
        assert_eq!(find_values_open("INSERT INTO t values(1)"), Some(20));
        assert_eq!(find_values_open("INSERT INTO t VALUES\n(1)"), Some(21));
        assert_eq!(find_values_open("SELECT * FROM t"), None);
        assert_eq!(find_values_open("INSERT INTO t VALUES 1"), None);
    }

    #[test]
    fn test_find_template_close() {
        let text = "INSERT INTO t VALUES (:a) RETURNING id";
        assert_eq!(find_template_close(text, 22), Some(24));

        let text = "INSERT INTO t VALUES (:a) ON CONFLICT DO NOTHING";
        assert_eq!(find_template_close(text, 22), Some(24));

        let text = "INSERT INTO t VALUES (:a)";
        assert_eq!(find_template_close(text, 22), Some(24));

        assert_eq!(find_template_close("INSERT INTO t VALUES (:a", 22), None);
    }
}
