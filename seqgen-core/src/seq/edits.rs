//! Targets and edits
//!
//! A host hands over the places that should receive values (cursors or selections) as
//! [`TargetRange`]s. [`plan_edits`] pairs each target with its value and [`apply_edits`] writes
//! all of them into a buffer in one step.
//!
//! ## Positions
//!
//! - Lines and columns are zero-based.
//! - Columns count characters, not bytes, so targets never land inside a multi-byte character.
//! - A cursor is a range whose start and end are equal; its value is inserted.
//!
//! ## Ordering
//!
//! Targets are assigned values in the order the host lists them. When the expression carries the
//! reorder flag (`!`), targets are first sorted top-to-bottom, left-to-right by their start.
//!
//! ## Atomicity
//!
//! `apply_edits` validates every edit before touching anything: either every target is rewritten
//! or an error comes back and the buffer is left as it was.

use crate::seq::alphabet::Alphabet;
use crate::seq::expression::Expression;
use serde::Serialize;
use std::fmt;
use std::ops::Range as ByteRange;
use thiserror::Error;

/// A line:column position in a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A place that receives one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TargetRange {
    pub start: Position,
    pub end: Position,
}

impl TargetRange {
    /// Range between two positions, in whichever order they are given.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Zero-width range: the value is inserted at `at`.
    pub fn cursor(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_cursor(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for TargetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cursor() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Replace the text in `range` with `text`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edit {
    pub range: TargetRange,
    pub text: String,
}

/// Reasons an edit batch cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("position {0} is outside the buffer")]
    OutOfBounds(Position),
    #[error("range {0} ends before it starts")]
    Reversed(TargetRange),
    #[error("ranges {0} and {1} overlap")]
    Overlap(TargetRange, TargetRange),
}

/// Pair targets with values: target `i` (after optional reordering) gets the value at index `i`.
pub fn plan_edits(expr: &Expression, targets: &[TargetRange], alphabet: &Alphabet) -> Vec<Edit> {
    let mut ordered = targets.to_vec();
    if expr.reorder {
        // A cursor sorts before a selection starting at the same place.
        ordered.sort_by_key(|target| (target.start, target.end));
    }
    ordered
        .into_iter()
        .zip(expr.values(alphabet))
        .map(|(range, text)| Edit { range, text })
        .collect()
}

/// Apply every edit to `buffer` at once.
///
/// Edits may be listed in any order. A cursor at the start of a replaced range inserts before the
/// replacement. Several cursors at the same position insert their values in the order they are
/// listed.
pub fn apply_edits(buffer: &str, edits: &[Edit]) -> Result<String, EditError> {
    let index = LineIndex::new(buffer);

    let mut spans = Vec::with_capacity(edits.len());
    for edit in edits {
        if edit.range.end < edit.range.start {
            return Err(EditError::Reversed(edit.range));
        }
        let start = index.offset(buffer, edit.range.start)?;
        let end = index.offset(buffer, edit.range.end)?;
        spans.push((start..end, edit));
    }
    spans.sort_by_key(|(span, _)| (span.start, span.end));

    for pair in spans.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.0.start < prev.0.end {
            return Err(EditError::Overlap(prev.1.range, next.1.range));
        }
    }

    let inserted: usize = edits.iter().map(|e| e.text.len()).sum();
    let mut output = String::with_capacity(buffer.len() + inserted);
    let mut copied = 0;
    for (span, edit) in &spans {
        output.push_str(&buffer[copied..span.start]);
        output.push_str(&edit.text);
        copied = span.end;
    }
    output.push_str(&buffer[copied..]);
    Ok(output)
}

/// Every occurrence of `marker` in `buffer`, as targets in reading order.
pub fn find_markers(buffer: &str, marker: &str) -> Vec<TargetRange> {
    if marker.is_empty() {
        return Vec::new();
    }
    let index = LineIndex::new(buffer);
    buffer
        .match_indices(marker)
        .map(|(start, found)| {
            TargetRange::new(
                index.position(buffer, start),
                index.position(buffer, start + found.len()),
            )
        })
        .collect()
}

/// Byte offsets where each line starts, for converting between offsets and positions
struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    fn new(buffer: &str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in buffer.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self { line_starts }
    }

    /// Byte span of `line`, without its `\n` or `\r\n` terminator.
    fn line_span(&self, buffer: &str, line: usize) -> Option<ByteRange<usize>> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) if buffer[start..next - 1].ends_with('\r') => next - 2,
            Some(next) => next - 1,
            None => buffer.len(),
        };
        Some(start..end)
    }

    fn offset(&self, buffer: &str, position: Position) -> Result<usize, EditError> {
        let span = self
            .line_span(buffer, position.line)
            .ok_or(EditError::OutOfBounds(position))?;
        let line = &buffer[span.clone()];
        if position.column == line.chars().count() {
            return Ok(span.end);
        }
        line.char_indices()
            .nth(position.column)
            .map(|(byte, _)| span.start + byte)
            .ok_or(EditError::OutOfBounds(position))
    }

    fn position(&self, buffer: &str, offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        let column = buffer[self.line_starts[line]..offset].chars().count();
        Position::new(line, column)
    }
}
