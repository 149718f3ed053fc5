//! Bidirectional mapping between human-readable board coordinates
//! ("A1".."T20", "AA1" for boards with more than 26 rows) and the
//! compact integer code used as the key for the balanced BST.
//!
//! The codec is pure and stateless: it holds no state of its own and
//! every operation is a total function of its arguments (modulo the
//! `OutOfBounds`/`MalformedCoordinate` error cases).

use crate::error::{Error, Result};

/// `code = row * CODE_BASE + col`. `CODE_BASE` must exceed the largest
/// supported column (board sizes are 5..20, so 100 leaves ample room and
/// keeps the reference scheme's codes human-readable, e.g. `A1` -> 101).
const CODE_BASE: i32 = 100;

/// Smallest and largest board dimension the engine supports (§3/§9).
pub const MIN_BOARD_SIZE: u8 = 5;
pub const MAX_BOARD_SIZE: u8 = 20;

/// 1-based (row, col) pair. Row `1` is `A`, row `26` is `Z`, row `27` is
/// `AA`, and so on (bijective base-26), so boards wider than 26 rows are
/// representable even though no supported board size needs it.
pub type Code = i32;

/// Encodes `(row, col)` into a BST key. Both coordinates are 1-based and
/// must fall within `1..=board_size`.
pub fn encode(row: i32, col: i32, board_size: u8) -> Result<Code> {
    if row < 1 || col < 1 || row > board_size as i32 || col > board_size as i32 {
        return Err(Error::OutOfBounds { row, col, board_size });
    }
    Ok(row * CODE_BASE + col)
}

/// Inverse of [`encode`]. Does not validate the result against any board
/// size — callers that need bounds-checking should re-run it through
/// [`encode`].
pub fn decode(code: Code) -> (i32, i32) {
    (code / CODE_BASE, code % CODE_BASE)
}

/// Parses a wire-form coordinate string such as `"A1"`, `"j10"`, or
/// `"AA3"` into a 1-based `(row, col)` pair. Case-insensitive. The shape
/// must be one or more ASCII letters followed by one or more ASCII
/// digits and nothing else.
pub fn parse(s: &str) -> Result<(i32, i32)> {
    let bytes = s.as_bytes();
    let split = bytes.iter().position(|b| !b.is_ascii_alphabetic());

    let (letters, digits) = match split {
        Some(idx) if idx > 0 => (&s[..idx], &s[idx..]),
        _ => return Err(Error::MalformedCoordinate(s.to_string())),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::MalformedCoordinate(s.to_string()));
    }

    let row = letters_to_row(letters).ok_or_else(|| Error::MalformedCoordinate(s.to_string()))?;
    let col: i32 = digits
        .parse()
        .map_err(|_| Error::MalformedCoordinate(s.to_string()))?;

    if col == 0 {
        return Err(Error::MalformedCoordinate(s.to_string()));
    }

    Ok((row, col))
}

/// Formats `(row, col)` in canonical uppercase wire form.
pub fn format(row: i32, col: i32) -> String {
    format!("{}{}", row_to_letters(row), col)
}

/// Bijective base-26 numeral: 1 -> A, 26 -> Z, 27 -> AA, 28 -> AB, ...
fn row_to_letters(mut row: i32) -> String {
    let mut letters = Vec::new();
    while row > 0 {
        row -= 1;
        letters.push((b'A' + (row % 26) as u8) as char);
        row /= 26;
    }
    letters.iter().rev().collect()
}

fn letters_to_row(letters: &str) -> Option<i32> {
    let mut row: i32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return None;
        }
        let digit = (b.to_ascii_uppercase() - b'A' + 1) as i32;
        row = row.checked_mul(26)?.checked_add(digit)?;
    }
    Some(row)
}
