//! Main module for seqgen library functionality

pub mod alphabet;
pub mod creator;
pub mod edits;
pub mod expression;
pub mod generation;
pub mod padding;
pub mod parsing;
pub mod preview;
