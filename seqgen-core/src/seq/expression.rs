//! Parsed sequence expressions
//!
//! An [`Expression`] is the structured form of one submission such as `01+2` or `aa+2:_>4/2!`.
//! It is produced by [`crate::seq::parsing`] and consumed, read-only, by
//! [`crate::seq::generation`]. It has no identity beyond a single generation pass: hosts build a
//! fresh one on every edit and throw it away once the values are out.

use crate::seq::alphabet::Alphabet;
use crate::seq::generation;
use serde::Serialize;
use std::num::NonZeroU64;

/// Pad character used for numeric sequences when none is given.
pub const NUMERIC_PAD: char = '0';
/// Pad character used for alphabetic sequences when none is given.
pub const ALPHABETIC_PAD: char = ' ';
/// Radix used for numeric sequences when none is given.
pub const DEFAULT_RADIX: u32 = 10;

/// Initial value, which also decides the generator family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Start {
    /// Integer start: values are rendered as numbers in the expression's radix
    Numeric(i64),
    /// Letter start: values count through the alphabet
    Alphabetic(String),
}

/// Which generator family an expression belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Numeric,
    Alphabetic,
}

/// Direction of progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[default]
    Add,
    Subtract,
}

impl Operator {
    pub(crate) fn signum(self) -> i128 {
        match self {
            Operator::Add => 1,
            Operator::Subtract => -1,
        }
    }
}

/// A validated sequence expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    pub start: Start,
    pub operator: Operator,
    /// Magnitude added (or subtracted) per effective index.
    pub step: u64,
    /// Extra effective indices skipped before the first value (`++`/`--` forms only).
    pub offset: u64,
    /// Rendering base for numeric values, `2..=36`. Ignored for alphabetic values.
    pub radix: u32,
    pub pad_char: char,
    /// Minimum width of the rendered value, not counting a sign. `0` disables padding.
    pub pad_width: usize,
    /// Number of consecutive indices that share one value.
    pub repeat: NonZeroU64,
    /// Host targets should be sorted top-to-bottom, left-to-right before values are assigned.
    pub reorder: bool,
    /// Non-negative numeric values get an explicit `+`.
    pub show_positive_sign: bool,
}

impl Expression {
    /// A numeric expression with every other setting at its default (`start+1`).
    pub fn numeric(start: i64) -> Self {
        Self::with_start(Start::Numeric(start), NUMERIC_PAD)
    }

    /// An alphabetic expression with every other setting at its default (`start+1`).
    pub fn alphabetic(start: impl Into<String>) -> Self {
        Self::with_start(Start::Alphabetic(start.into()), ALPHABETIC_PAD)
    }

    fn with_start(start: Start, pad_char: char) -> Self {
        Self {
            start,
            operator: Operator::Add,
            step: 1,
            offset: 0,
            radix: DEFAULT_RADIX,
            pad_char,
            pad_width: 0,
            repeat: NonZeroU64::MIN,
            reorder: false,
            show_positive_sign: false,
        }
    }

    pub fn kind(&self) -> Kind {
        match self.start {
            Start::Numeric(_) => Kind::Numeric,
            Start::Alphabetic(_) => Kind::Alphabetic,
        }
    }

    /// Collapse a raw target index onto the logical step number.
    pub fn effective_index(&self, index: u64) -> u64 {
        index / self.repeat.get()
    }

    /// Signed distance from `start` for a raw target index, or `None` on overflow.
    pub(crate) fn displacement(&self, index: u64) -> Option<i128> {
        let steps = i128::from(self.effective_index(index)).checked_add(i128::from(self.offset))?;
        steps
            .checked_mul(i128::from(self.step))?
            .checked_mul(self.operator.signum())
    }

    /// Value at `index` using the default `a..z` alphabet.
    pub fn value_at(&self, index: u64) -> String {
        generation::generate(index, self, Alphabet::latin())
    }

    /// The values for indices `0, 1, 2, ...`, lazily.
    pub fn values<'a>(&'a self, alphabet: &'a Alphabet) -> impl Iterator<Item = String> + 'a {
        (0..).map(move |index| generation::generate(index, self, alphabet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let expr = Expression::numeric(7);
        assert_eq!(expr.kind(), Kind::Numeric);
        assert_eq!(expr.step, 1);
        assert_eq!(expr.radix, 10);
        assert_eq!(expr.pad_char, '0');
        assert_eq!(expr.repeat.get(), 1);

        let expr = Expression::alphabetic("q");
        assert_eq!(expr.kind(), Kind::Alphabetic);
        assert_eq!(expr.pad_char, ' ');
    }

    #[test]
    fn test_effective_index_groups_by_repeat() {
        let mut expr = Expression::numeric(0);
        expr.repeat = NonZeroU64::new(3).unwrap();
        let grouped: Vec<u64> = (0..7).map(|i| expr.effective_index(i)).collect();
        assert_eq!(grouped, vec![0, 0, 0, 1, 1, 1, 2]);
    }

    #[test]
    fn test_displacement_overflow_is_none() {
        let mut expr = Expression::numeric(0);
        expr.step = u64::MAX;
        assert_eq!(expr.displacement(u64::MAX), None);

        expr.operator = Operator::Subtract;
        assert_eq!(expr.displacement(2), Some(-2 * i128::from(u64::MAX)));
    }

    #[test]
    fn test_values_iterates_from_zero() {
        let expr = Expression::alphabetic("x");
        let values: Vec<String> = expr.values(Alphabet::latin()).take(4).collect();
        assert_eq!(values, vec!["x", "y", "z", "aa"]);
    }

    #[test]
    fn test_serializes_start_with_kind_tag() {
        let json = serde_json::to_value(Expression::alphabetic("aa")).unwrap();
        assert_eq!(json["start"]["kind"], "alphabetic");
        assert_eq!(json["start"]["value"], "aa");
        assert_eq!(json["operator"], "add");
    }
}
