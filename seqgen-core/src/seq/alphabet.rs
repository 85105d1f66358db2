//! Ordered letter sets
//!
//! Alphabetic sequences count in a positional system whose digits are the letters of an
//! [`Alphabet`]. The numbering is bijective (there is no zero letter), which is what gives the
//! familiar spreadsheet-column behavior:
//!
//! ```text
//! a, b, ..., z, aa, ab, ..., az, ba, ..., zz, aaa
//! ```
//!
//! The alphabet is a plain value handed to the parser and generator. Hosts usually build it once
//! from configuration and share it for the rest of the process.

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Letters used when no alphabet is configured.
pub const DEFAULT_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

static LATIN: Lazy<Alphabet> = Lazy::new(|| Alphabet {
    letters: DEFAULT_LETTERS.chars().collect(),
});

/// Errors raised when building an alphabet from user supplied letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet needs at least two letters, got {0}")]
    TooShort(usize),
    #[error("alphabet contains '{0}' more than once (letters are compared case-insensitively)")]
    Duplicate(char),
    #[error("alphabet letters must be alphabetic characters, got '{0}'")]
    NotALetter(char),
}

/// An ordered set of at least two distinct letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    pub fn new<I>(letters: I) -> Result<Self, AlphabetError>
    where
        I: IntoIterator<Item = char>,
    {
        let letters: Vec<char> = letters.into_iter().collect();
        if letters.len() < 2 {
            return Err(AlphabetError::TooShort(letters.len()));
        }
        for (i, &letter) in letters.iter().enumerate() {
            if !letter.is_alphabetic() {
                return Err(AlphabetError::NotALetter(letter));
            }
            if letters[..i].iter().any(|&seen| fold(seen) == fold(letter)) {
                return Err(AlphabetError::Duplicate(letter));
            }
        }
        Ok(Self { letters })
    }

    /// The shared `a..z` alphabet.
    pub fn latin() -> &'static Alphabet {
        &LATIN
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters, which is also the base of the numeral system.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false: construction rejects alphabets with fewer than two letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Zero-based position of `letter`, ignoring case.
    pub fn position(&self, letter: char) -> Option<usize> {
        let folded = fold(letter);
        self.letters.iter().position(|&l| fold(l) == folded)
    }

    pub fn contains(&self, letter: char) -> bool {
        self.position(letter).is_some()
    }

    /// Move `start` forward (or backward for negative `count`) by `count` places.
    ///
    /// The result is spelled with the alphabet's own letters; callers decide on case.
    /// Running at or below the first value (`a - 1`), using a letter outside the alphabet,
    /// or overflowing the intermediate arithmetic all produce an empty string.
    ///
    /// ```text
    /// advance("z", 1)   == "aa"
    /// advance("az", 1)  == "ba"
    /// advance("aa", -1) == "z"
    /// advance("a", -1)  == ""
    /// ```
    pub fn advance(&self, start: &str, count: i128) -> String {
        let base = self.letters.len() as i128;

        let mut digits = Vec::with_capacity(start.len() + 1);
        for letter in start.chars() {
            match self.position(letter) {
                Some(p) => digits.push(p as i128),
                None => return String::new(),
            }
        }

        // Odometer pass: add into the last position and ripple the carry leftwards.
        let mut carry = count;
        for digit in digits.iter_mut().rev() {
            if carry == 0 {
                break;
            }
            let Some(total) = digit.checked_add(carry) else {
                return String::new();
            };
            *digit = total.rem_euclid(base);
            carry = total.div_euclid(base);
        }

        // A borrow out of the leading position shortens the value: fold leading digits back
        // into the carry until it is no longer negative.
        let mut lead = 0;
        while carry < 0 {
            let Some(&digit) = digits.get(lead) else {
                return String::new();
            };
            carry = match carry.checked_mul(base).and_then(|c| c.checked_add(digit + 1)) {
                Some(c) => c,
                None => return String::new(),
            };
            lead += 1;
        }

        // Whatever carry is left grows new leading positions.
        let mut grown = Vec::new();
        while carry > 0 {
            carry -= 1;
            grown.push(carry % base);
            carry /= base;
        }

        grown
            .iter()
            .rev()
            .chain(&digits[lead..])
            .map(|&d| self.letters[d as usize])
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::clone(&LATIN)
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s.chars())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|l| write!(f, "{l}"))
    }
}

fn fold(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}
