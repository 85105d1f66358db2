//! Sequence generation
//!
//! [`generate`] maps `(index, expression)` to the text for one target. It is a pure function: the
//! same pair always gives the same string, and nothing is remembered between calls. Hosts call it
//! once per target, `index = 0..n`, and once more per entry of the live preview.
//!
//! Steps for a single call:
//!
//! 1. `effective = index / repeat`, so runs of `repeat` targets share one value.
//! 2. Numeric starts: `start ± (offset + effective) * step`, written in the expression's radix
//!    with the digits `0-9a-z`, optionally with a `+` for non-negative values.
//! 3. Alphabetic starts: the start letters are advanced by `±(offset + effective) * step` places
//!    through the alphabet, then take the case of the start's last letter.
//! 4. The result is left-padded to the pad width.
//!
//! Generation never fails. Values that cannot be represented (letter sequences running below the
//! first letter, arithmetic overflow) come out as an empty string.

use crate::seq::alphabet::Alphabet;
use crate::seq::expression::{Expression, Start};
use crate::seq::padding::{left_pad, pad_unsigned};
use tracing::trace;

/// Text for target `index` under `expr`.
pub fn generate(index: u64, expr: &Expression, alphabet: &Alphabet) -> String {
    let value = match &expr.start {
        Start::Numeric(start) => numeric_value(index, *start, expr),
        Start::Alphabetic(start) => alphabetic_value(index, start, expr, alphabet),
    };
    trace!(index, value = %value, "generated sequence value");
    value
}

fn numeric_value(index: u64, start: i64, expr: &Expression) -> String {
    let Some(value) = expr
        .displacement(index)
        .and_then(|d| i128::from(start).checked_add(d))
    else {
        return String::new();
    };
    let Some(digits) = to_radix(value.unsigned_abs(), expr.radix) else {
        return String::new();
    };

    let sign = if value < 0 {
        "-"
    } else if expr.show_positive_sign {
        "+"
    } else {
        ""
    };
    left_pad(&format!("{sign}{digits}"), expr.pad_width, expr.pad_char)
}

fn alphabetic_value(index: u64, start: &str, expr: &Expression, alphabet: &Alphabet) -> String {
    let Some(count) = expr.displacement(index) else {
        return String::new();
    };
    let letters = alphabet.advance(start, count);
    if letters.is_empty() {
        return letters;
    }

    let cased = match start.chars().last() {
        Some(last) if last.is_uppercase() => letters.to_uppercase(),
        Some(last) if last.is_lowercase() => letters.to_lowercase(),
        _ => letters,
    };
    pad_unsigned(&cased, expr.pad_width, expr.pad_char)
}

/// Digits of `value` in `radix`, lowercase. `None` when the radix is outside `2..=36`.
pub fn to_radix(mut value: u128, radix: u32) -> Option<String> {
    if !(2..=36).contains(&radix) {
        return None;
    }
    if value == 0 {
        return Some("0".to_string());
    }

    let base = u128::from(radix);
    let mut digits = Vec::new();
    while value > 0 {
        // The remainder is below `radix`, so it always fits a digit.
        let digit = (value % base) as u32;
        digits.push(char::from_digit(digit, radix)?);
        value /= base;
    }
    Some(digits.iter().rev().collect())
}
