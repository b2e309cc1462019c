//! # Response parsing
//!
//! Pulls a `{"row": R, "col": C}` move out of free-form model output.
//!
//! The two styles disagree on which block wins when the model rambles:
//! strict takes the **last** well-formed `row`/`col` object, casual takes the
//! **first** brace-bounded block whatever it contains. Both report `None`
//! instead of failing.

use crate::game::Move;
use crate::prompt::PromptStyle;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct RawMove {
    row: i64,
    col: i64,
}

/// Parse a response according to the style's policy
pub fn parse_response(style: PromptStyle, text: &str) -> Option<Move> {
    match style {
        PromptStyle::Strict => parse_last_row_col(text),
        PromptStyle::Casual => parse_first_object(text),
    }
}

/// Decode the last `{"row": <int>, "col": <int>}` object in `text`.
///
/// Whitespace around tokens is tolerated, integers may carry a leading minus,
/// and matches may span lines. Matches never overlap.
pub fn parse_last_row_col(text: &str) -> Option<Move> {
    let candidate = row_col_objects(text).pop()?;
    decode(candidate)
}

/// Decode the first `{...}` block of `text` that contains no nested braces.
pub fn parse_first_object(text: &str) -> Option<Move> {
    let candidate = first_flat_object(text)?;
    decode(candidate)
}

/// All non-overlapping row/col objects, left to right
pub fn row_col_objects(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut i = 0;

    while let Some(offset) = text[i..].find('{') {
        let start = i + offset;
        match match_row_col(text, start) {
            Some(end) => {
                found.push(&text[start..end]);
                i = end;
            }
            None => i = start + 1,
        }
    }

    found
}

fn first_flat_object(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut start = text.find('{')?;

    loop {
        let offset = bytes[start + 1..].iter().position(|&b| b == b'{' || b == b'}')?;
        let next = start + 1 + offset;
        if bytes[next] == b'}' {
            return Some(&text[start..=next]);
        }
        start = next;
    }
}

fn decode(candidate: &str) -> Option<Move> {
    let raw: RawMove = match serde_json::from_str(candidate) {
        Ok(raw) => raw,
        Err(e) => {
            debug!(error = %e, candidate, "move block is not a usable JSON object");
            return None;
        }
    };

    let row = i32::try_from(raw.row).ok()?;
    let col = i32::try_from(raw.col).ok()?;
    Some(Move::new(row, col))
}

// ============================================================================
// Matcher for {\s*"row"\s*:\s*-?\d+\s*,\s*"col"\s*:\s*-?\d+\s*}
//
// `\d` and `\s` are Unicode-aware: a block written with non-ASCII digits or
// spaces still matches here and is then rejected by the JSON decode.
// ============================================================================

/// Returns the end offset (exclusive) of a row/col object starting at `start`
fn match_row_col(text: &str, start: usize) -> Option<usize> {
    let mut i = literal(text, start, "{")?;
    i = field(text, i, "\"row\"")?;
    i = literal(text, skip_space(text, i), ",")?;
    i = field(text, i, "\"col\"")?;
    literal(text, skip_space(text, i), "}")
}

/// `\s*<name>\s*:\s*-?\d+`
fn field(text: &str, i: usize, name: &str) -> Option<usize> {
    let i = literal(text, skip_space(text, i), name)?;
    let i = literal(text, skip_space(text, i), ":")?;
    integer(text, skip_space(text, i))
}

fn literal(text: &str, i: usize, expected: &str) -> Option<usize> {
    text[i..].starts_with(expected).then_some(i + expected.len())
}

fn integer(text: &str, i: usize) -> Option<usize> {
    let i = if text[i..].starts_with('-') { i + 1 } else { i };
    let end = take_while(text, i, char::is_numeric);
    (end > i).then_some(end)
}

fn skip_space(text: &str, i: usize) -> usize {
    take_while(text, i, |c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn take_while(text: &str, i: usize, pred: impl Fn(char) -> bool) -> usize {
    text[i..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(offset, _)| i + offset)
}
