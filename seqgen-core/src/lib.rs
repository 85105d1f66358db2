//! # seqgen
//!
//! Parser and generator for sequence expressions.
//!
//! A sequence expression is a short piece of text such as `01+2`, `aa+2`,
//! `1+2:0>2` or `2!` describing a run of values to be typed into several
//! places at once (one value per cursor in an editor, one per marker in a file).
//!
//! File Layout
//!
//! src/seq
//!   ├── parsing      text -> Expression (or NoMatch)
//!   ├── generation   (index, Expression) -> String
//!   ├── alphabet     ordered letter set and the odometer used for letter sequences
//!   ├── padding      sign-aware left padding
//!   ├── preview      the short live preview line
//!   ├── edits        targets, edit planning and atomic application
//!   └── creator      the host-facing entry point tying the above together
//!
//! The two public entry points most hosts need are re-exported here: [`parse`]
//! and [`generate`].

pub mod seq;

pub use seq::alphabet::Alphabet;
pub use seq::expression::{Expression, Operator, Start};
pub use seq::generation::generate;
pub use seq::parsing::{parse, NoMatch, Parser};
