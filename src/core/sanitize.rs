//! Keeps raw keystrokes numeric-looking before they reach the engine.

/// Longest value the source field accepts.
pub const MAX_INPUT_LEN: usize = 6;

/// Drop everything except ASCII digits and `.`, then cap at [`MAX_INPUT_LEN`].
///
/// The number of decimal points is not checked: `"1.2.3"` survives here and
/// is rejected later by the numeric parse.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .take(MAX_INPUT_LEN)
        .collect()
}
