//! Expression parsing
//!
//! Turns the text typed by the user into an [`Expression`], or reports [`NoMatch`].
//!
//! # Grammar
//!
//! ```text
//! expr   := START [OP] [STEP] [MODE] [":" PAD] [("/" | "^") REPEAT] [FLAGS]
//! START  := [+-]? digits          numeric start (decimal)
//!         | letters               alphabetic start
//! OP     := "+" | "-"             direction, default "+"
//!         | "++" | "--"           step fixed at 1, a following number is an index offset
//! STEP   := digits                default 1
//! MODE   := "#" digits            numeric radix, 2..=36, default 10
//!         | "a" | "A"             alphabetic marker (letter starts only)
//! PAD    := [char] ">" digits     fill character and width
//!         | digits                width only
//! REPEAT := digits                values are held for this many targets, at least 1
//! FLAGS  := ("!" | "@")+          "!" reorder targets, "@" show "+" on non-negative numbers
//! ```
//!
//! Whitespace is allowed between the parts, except inside a pad spec where a space is a valid
//! fill character. Examples:
//!
//! ```text
//! 01+2      1, 3, 5 ... padded to width 2 by the leading zero
//! aa+2      aa, ac, ae ...
//! 1+2:0>2   01, 03, 05 ...
//! 10-1#16   a, 9, 8 ...
//! 1/3       1, 1, 1, 2, 2, 2 ...
//! 0+5@      +0, +5, +10 ...
//! 2!        2, 3, 4 ... assigned to targets in reading order
//! ```
//!
//! Pad widths above [`MAX_PAD_WIDTH`] are rejected with [`NoMatch::WidthTooLarge`] even though
//! the grammar would otherwise accept them, so `1:5000` is not an expression.
//!
//! Parsing is total. Every input is either an expression or a [`NoMatch`]; the variants of
//! `NoMatch` only exist to explain the rejection and hosts should treat them all alike.

use crate::seq::alphabet::Alphabet;
use crate::seq::expression::{Expression, Operator, Start};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::num::NonZeroU64;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Largest pad width accepted. Wider specs are rejected instead of allocating huge strings.
pub const MAX_PAD_WIDTH: usize = 4096;

static EXPRESSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*",
        r"(?:(?P<number>[+-]?[0-9]+)|(?P<letters>\p{Alphabetic}+))",
        r"\s*(?P<operator>\+\+|--|\+|-)?",
        r"\s*(?P<step>[0-9]+)?",
        r"\s*(?:#(?P<radix>[0-9]+)|(?P<marker>[aA]))?",
        r"(?::(?:(?P<fill>[^>])?>)?(?P<width>[0-9]+))?",
        r"\s*(?:[/^]\s*(?P<repeat>[0-9]+))?",
        r"\s*(?P<flags>[!@]+)?",
        r"\s*$",
    ))
    .unwrap()
});

/// Why an input was not accepted as an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoMatch {
    #[error("input does not match the sequence grammar")]
    Grammar,
    #[error("repeat count must be at least 1")]
    ZeroRepeat,
    #[error("radix {0} is outside 2..=36")]
    RadixOutOfRange(u32),
    #[error("a numeric radix cannot be used with a letter start")]
    RadixOnLetters,
    #[error("the alphabetic marker cannot be used with a numeric start")]
    MarkerOnNumber,
    #[error("'{0}' is not a letter of the alphabet")]
    LetterOutsideAlphabet(char),
    #[error("{field} '{text}' is too large")]
    OutOfRange { field: &'static str, text: String },
    #[error("pad width {0} exceeds the maximum of {max}", max = MAX_PAD_WIDTH)]
    WidthTooLarge(usize),
}

/// Parses expressions against a particular alphabet.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Parser<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    /// Parse `input` into an expression.
    pub fn parse(&self, input: &str) -> Result<Expression, NoMatch> {
        let result = self.parse_inner(input);
        if let Err(reason) = &result {
            debug!(input, %reason, "no sequence expression");
        }
        result
    }

    fn parse_inner(&self, input: &str) -> Result<Expression, NoMatch> {
        let caps = EXPRESSION_REGEX.captures(input).ok_or(NoMatch::Grammar)?;

        let (mut expr, implied_width) = match (caps.name("number"), caps.name("letters")) {
            (Some(number), _) => numeric_start(number.as_str())?,
            (None, Some(letters)) => (self.alphabetic_start(letters.as_str())?, 0),
            (None, None) => return Err(NoMatch::Grammar),
        };

        let step = number_field::<u64>(&caps, "step")?;
        match caps.name("operator").map(|m| m.as_str()) {
            Some("++") | Some("--") => {
                expr.step = 1;
                expr.offset = step.unwrap_or(0);
            }
            _ => expr.step = step.unwrap_or(1),
        }
        if let Some(op) = caps.name("operator") {
            expr.operator = if op.as_str().starts_with('-') {
                Operator::Subtract
            } else {
                Operator::Add
            };
        }

        if let Some(radix) = number_field::<u32>(&caps, "radix")? {
            if matches!(expr.start, Start::Alphabetic(_)) {
                return Err(NoMatch::RadixOnLetters);
            }
            if !(2..=36).contains(&radix) {
                return Err(NoMatch::RadixOutOfRange(radix));
            }
            expr.radix = radix;
        }
        if caps.name("marker").is_some() && matches!(expr.start, Start::Numeric(_)) {
            return Err(NoMatch::MarkerOnNumber);
        }

        expr.pad_width = match number_field::<usize>(&caps, "width")? {
            Some(width) if width > MAX_PAD_WIDTH => return Err(NoMatch::WidthTooLarge(width)),
            Some(width) => width,
            None => implied_width,
        };
        if let Some(fill) = caps.name("fill").and_then(|m| m.as_str().chars().next()) {
            expr.pad_char = fill;
        }

        if let Some(repeat) = number_field::<u64>(&caps, "repeat")? {
            expr.repeat = NonZeroU64::new(repeat).ok_or(NoMatch::ZeroRepeat)?;
        }

        let flags = caps.name("flags").map_or("", |m| m.as_str());
        expr.reorder = flags.contains('!');
        expr.show_positive_sign = flags.contains('@');

        Ok(expr)
    }

    fn alphabetic_start(&self, letters: &str) -> Result<Expression, NoMatch> {
        if let Some(stray) = letters.chars().find(|&c| !self.alphabet.contains(c)) {
            return Err(NoMatch::LetterOutsideAlphabet(stray));
        }
        Ok(Expression::alphabetic(letters))
    }
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(Alphabet::latin())
    }
}

/// Parse `input` with the default `a..z` alphabet.
pub fn parse(input: &str) -> Result<Expression, NoMatch> {
    Parser::default().parse(input)
}

impl FromStr for Expression {
    type Err = NoMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Numeric start plus the width implied by a leading zero (`007` pads to 3).
fn numeric_start(literal: &str) -> Result<(Expression, usize), NoMatch> {
    let start = literal.parse::<i64>().map_err(|_| NoMatch::OutOfRange {
        field: "start",
        text: literal.to_string(),
    })?;
    let digits = literal.trim_start_matches(['+', '-']);
    let implied_width = if digits.starts_with('0') {
        digits.len()
    } else {
        0
    };

    Ok((Expression::numeric(start), implied_width))
}

fn number_field<T: FromStr>(caps: &Captures<'_>, name: &'static str) -> Result<Option<T>, NoMatch> {
    caps.name(name)
        .map(|m| {
            m.as_str().parse::<T>().map_err(|_| NoMatch::OutOfRange {
                field: name,
                text: m.as_str().to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::expression::Kind;

    #[test]
    fn test_leading_zero_implies_width() {
        let expr = parse("007").unwrap();
        assert_eq!(expr.start, Start::Numeric(7));
        assert_eq!(expr.pad_width, 3);

        let expr = parse("-05").unwrap();
        assert_eq!(expr.start, Start::Numeric(-5));
        assert_eq!(expr.pad_width, 2);

        assert_eq!(parse("7").unwrap().pad_width, 0);
    }

    #[test]
    fn test_explicit_width_overrides_leading_zero() {
        assert_eq!(parse("007:5").unwrap().pad_width, 5);
        assert_eq!(parse("007:0").unwrap().pad_width, 0);
    }

    #[test]
    fn test_double_operator_fixes_step_and_sets_offset() {
        let expr = parse("5++3").unwrap();
        assert_eq!(expr.operator, Operator::Add);
        assert_eq!(expr.step, 1);
        assert_eq!(expr.offset, 3);

        let expr = parse("5--").unwrap();
        assert_eq!(expr.operator, Operator::Subtract);
        assert_eq!(expr.offset, 0);
    }

    #[test]
    fn test_marker_only_for_letters() {
        assert_eq!(parse("b+1A").unwrap().kind(), Kind::Alphabetic);
        assert_eq!(parse("1+1a"), Err(NoMatch::MarkerOnNumber));
    }

    #[test]
    fn test_radix_rules() {
        assert_eq!(parse("1#16").unwrap().radix, 16);
        assert_eq!(parse("1#1"), Err(NoMatch::RadixOutOfRange(1)));
        assert_eq!(parse("1#37"), Err(NoMatch::RadixOutOfRange(37)));
        assert_eq!(parse("a#16"), Err(NoMatch::RadixOnLetters));
    }

    #[test]
    fn test_letters_checked_against_alphabet() {
        let greek: Alphabet = "αβγ".parse().unwrap();
        let parser = Parser::new(&greek);
        assert!(parser.parse("αβ").is_ok());
        assert_eq!(parser.parse("ab"), Err(NoMatch::LetterOutsideAlphabet('a')));
        assert_eq!(parse("αβ"), Err(NoMatch::LetterOutsideAlphabet('α')));
    }

    #[test]
    fn test_out_of_range_literals() {
        assert_eq!(
            parse("99999999999999999999"),
            Err(NoMatch::OutOfRange {
                field: "start",
                text: "99999999999999999999".to_string()
            })
        );
        assert!(matches!(
            parse("1+99999999999999999999"),
            Err(NoMatch::OutOfRange { field: "step", .. })
        ));
        assert_eq!(parse("1:5000"), Err(NoMatch::WidthTooLarge(5000)));
    }

    #[test]
    fn test_space_is_a_fill_character() {
        let expr = parse("1: >3").unwrap();
        assert_eq!(expr.pad_char, ' ');
        assert_eq!(expr.pad_width, 3);
    }

    #[test]
    fn test_from_str() {
        let expr: Expression = "aa+2".parse().unwrap();
        assert_eq!(expr.start, Start::Alphabetic("aa".to_string()));
        assert!("".parse::<Expression>().is_err());
    }
}
