//! Left padding
//!
//! Widths count characters, not bytes, and never include a leading sign: `-7` padded to width 3
//! with `0` is `-007`. Padding only ever adds characters; a value already at or past the width
//! comes back unchanged.

use std::iter;

/// Pad `value` to `width`, keeping a leading `+` or `-` in front of the fill.
pub fn left_pad(value: &str, width: usize, fill: char) -> String {
    let (sign, body) = split_sign(value);
    let mut padded = String::with_capacity(value.len() + width);
    padded.push_str(sign);
    padded.push_str(&pad_unsigned(body, width, fill));
    padded
}

/// Pad `value` to `width` without treating any character as a sign.
pub fn pad_unsigned(value: &str, width: usize, fill: char) -> String {
    let missing = width.saturating_sub(value.chars().count());
    let mut padded = String::with_capacity(value.len() + missing * fill.len_utf8());
    padded.extend(iter::repeat(fill).take(missing));
    padded.push_str(value);
    padded
}

fn split_sign(value: &str) -> (&str, &str) {
    match value.as_bytes().first() {
        Some(b'+' | b'-') => value.split_at(1),
        _ => ("", value),
    }
}
