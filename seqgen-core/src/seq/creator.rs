//! Host entry point
//!
//! [`SequenceCreator`] is what an editor integration (or the CLI) holds on to. Its methods map
//! one-to-one onto the host's input callbacks:
//!
//! - every keystroke: [`SequenceCreator::simulate`] for the preview line
//! - confirmation: [`SequenceCreator::exec`] for the edits, or
//!   [`SequenceCreator::fill`] to rewrite a buffer directly
//!
//! Nothing is cached between calls; each call parses the text afresh.

use crate::seq::alphabet::Alphabet;
use crate::seq::edits::{apply_edits, plan_edits, Edit, EditError, TargetRange};
use crate::seq::parsing::{NoMatch, Parser};
use crate::seq::preview::{preview, PreviewOptions};
use thiserror::Error;
use tracing::debug;

/// Failure to turn an expression and a set of targets into an edited buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("not a sequence expression: {0}")]
    NoMatch(#[from] NoMatch),
    #[error("cannot apply edits: {0}")]
    Edit(#[from] EditError),
}

/// Alphabet and preview settings shared by every call from one host
#[derive(Debug, Clone, Default)]
pub struct SequenceCreator {
    alphabet: Alphabet,
    preview: PreviewOptions,
}

impl SequenceCreator {
    pub fn new(alphabet: Alphabet, preview: PreviewOptions) -> Self {
        Self { alphabet, preview }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn preview_options(&self) -> &PreviewOptions {
        &self.preview
    }

    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.alphabet)
    }

    /// Preview line for the text currently typed; empty when it does not parse.
    pub fn simulate(&self, text: &str) -> String {
        preview(text, &self.preview, &self.alphabet)
    }

    /// The first `count` values of the sequence.
    pub fn values(&self, text: &str, count: usize) -> Result<Vec<String>, NoMatch> {
        let expr = self.parser().parse(text)?;
        Ok(expr.values(&self.alphabet).take(count).collect())
    }

    /// One edit per target, ordered as they should be assigned.
    pub fn exec(&self, text: &str, targets: &[TargetRange]) -> Result<Vec<Edit>, NoMatch> {
        let expr = self.parser().parse(text)?;
        let edits = plan_edits(&expr, targets, &self.alphabet);
        debug!(
            targets = targets.len(),
            reorder = expr.reorder,
            "planned sequence edits"
        );
        Ok(edits)
    }

    /// Write the sequence into `buffer` at `targets`, all at once.
    pub fn fill(&self, text: &str, buffer: &str, targets: &[TargetRange]) -> Result<String, ExecError> {
        let edits = self.exec(text, targets)?;
        Ok(apply_edits(buffer, &edits)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::edits::{find_markers, Position};

    #[test]
    fn test_simulate_uses_configured_shape() {
        let creator = SequenceCreator::new(
            "abc".parse().unwrap(),
            PreviewOptions {
                cursor_count: 4,
                ..PreviewOptions::default()
            },
        );
        assert_eq!(creator.simulate("b"), "b, c, aa, ab, ...");
        assert_eq!(creator.simulate("z"), "");
    }

    #[test]
    fn test_values() {
        let creator = SequenceCreator::default();
        assert_eq!(creator.values("9-3", 4).unwrap(), vec!["9", "6", "3", "0"]);
        assert_eq!(creator.values("1/0", 4), Err(NoMatch::ZeroRepeat));
    }

    #[test]
    fn test_fill_rewrites_markers() {
        let creator = SequenceCreator::default();
        let buffer = "item_{} = {}\n";
        let targets = find_markers(buffer, "{}");
        let filled = creator.fill("a/2", buffer, &targets).unwrap();
        assert_eq!(filled, "item_a = a\n");
    }

    #[test]
    fn test_fill_reports_errors_without_editing() {
        let creator = SequenceCreator::default();
        let targets = [TargetRange::cursor(Position::new(3, 0))];
        assert!(matches!(
            creator.fill("1", "x", &targets),
            Err(ExecError::Edit(EditError::OutOfBounds(_)))
        ));
        assert_eq!(
            creator.fill("", "x", &targets),
            Err(ExecError::NoMatch(NoMatch::Grammar))
        );
    }
}
