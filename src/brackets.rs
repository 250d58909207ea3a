//! Depth-counted `[[...]]` span matching.
//!
//! Both resource stripping and link extraction locate balanced spans the same
//! way: the opening `[[` counts as depth 2, every further `[` adds one, every
//! `]` removes one, and the span closes at the first return to zero. Only one
//! delimiter pair is tracked, so an integer counter replaces a stack.

/// Finds the end of the bracket span opened at `open`.
///
/// `open` must be the byte position of a `[[` in `text`. Returns the byte
/// position one past the closing `]`, or `None` if end-of-input is reached
/// before the depth returns to zero.
///
/// Brackets are ASCII, so scanning bytes never splits a UTF-8 sequence and the
/// returned position is always a char boundary.
#[must_use]
pub fn match_span(text: &str, open: usize) -> Option<usize> {
    let mut depth: usize = 2;

    for (offset, byte) in text.as_bytes().get(open + 2..)?.iter().enumerate() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + 2 + offset + 1);
                }
            }
            _ => {}
        }
    }

    None
}

/// Byte length of the character starting at `pos`, or 0 at end-of-input.
///
/// Used by the unmatched-opener path to advance exactly one character.
pub(crate) fn char_len_at(text: &str, pos: usize) -> usize {
    text[pos..].chars().next().map_or(0, char::len_utf8)
}
