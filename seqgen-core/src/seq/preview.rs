//! Live preview
//!
//! While the user types, hosts show the first few values of the sequence followed by an ellipsis,
//! e.g. `01, 03, 05, 07, 09, ...`. Text that does not parse previews as an empty string.

use crate::seq::alphabet::Alphabet;
use crate::seq::expression::Expression;
use crate::seq::parsing::Parser;
use serde::Deserialize;

/// Shape of the preview line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreviewOptions {
    /// How many values to show before the ellipsis.
    pub cursor_count: usize,
    pub ellipsis: String,
    pub separator: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            cursor_count: 5,
            ellipsis: "...".to_string(),
            separator: ", ".to_string(),
        }
    }
}

/// Preview line for `text`, or an empty string when it is not an expression.
pub fn preview(text: &str, options: &PreviewOptions, alphabet: &Alphabet) -> String {
    match Parser::new(alphabet).parse(text) {
        Ok(expr) => preview_expression(&expr, options, alphabet),
        Err(_) => String::new(),
    }
}

/// Preview line for an already parsed expression.
pub fn preview_expression(expr: &Expression, options: &PreviewOptions, alphabet: &Alphabet) -> String {
    let mut entries: Vec<String> = expr.values(alphabet).take(options.cursor_count).collect();
    entries.push(options.ellipsis.clone());
    entries.join(&options.separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preview() {
        let line = preview("01+2", &PreviewOptions::default(), Alphabet::latin());
        assert_eq!(line, "01, 03, 05, 07, 09, ...");
    }

    #[test]
    fn test_no_match_previews_nothing() {
        assert_eq!(preview("++", &PreviewOptions::default(), Alphabet::latin()), "");
    }

    #[test]
    fn test_custom_shape() {
        let options = PreviewOptions {
            cursor_count: 3,
            ellipsis: "…".to_string(),
            separator: " ".to_string(),
        };
        assert_eq!(preview("x", &options, Alphabet::latin()), "x y z …");
    }

    #[test]
    fn test_zero_count_shows_only_ellipsis() {
        let options = PreviewOptions {
            cursor_count: 0,
            ..PreviewOptions::default()
        };
        assert_eq!(preview("1", &options, Alphabet::latin()), "...");
    }
}
