//! CLI subcommands
//!
//! Each subcommand turns its arguments into the text printed on stdout. Nothing here prints or
//! exits; `main` decides how to report errors.

use seqgen_core::seq::creator::{ExecError, SequenceCreator};
use seqgen_core::seq::edits::{find_markers, Position, TargetRange};
use seqgen_core::seq::preview::{preview_expression, PreviewOptions};
use seqgen_core::NoMatch;
use std::fs;
use std::io::{self, Read};
use thiserror::Error;
use tracing::info;

/// Output formats for `seqgen parse`
pub const PARSE_FORMATS: &[&str] = &["debug", "json"];

#[derive(Debug, Error)]
pub enum CliError {
    #[error("not a sequence expression: {0}")]
    NoMatch(#[from] NoMatch),
    #[error(transparent)]
    Exec(#[from] ExecError),
    #[error("cannot access {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid target '{0}', expected LINE:COLUMN or LINE:COLUMN..LINE:COLUMN")]
    InvalidTarget(String),
    #[error("unknown format '{0}'")]
    UnknownFormat(String),
}

/// `seqgen parse`: show the structure of an expression.
pub fn parse(creator: &SequenceCreator, text: &str, format: &str) -> Result<String, CliError> {
    let expr = creator.parser().parse(text)?;
    match format {
        "debug" => Ok(format!("{expr:#?}\n")),
        "json" => Ok(format!("{}\n", serde_json::to_string_pretty(&expr)?)),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// `seqgen preview`: the live preview line, optionally with a different length.
pub fn preview(creator: &SequenceCreator, text: &str, count: Option<usize>) -> Result<String, CliError> {
    let expr = creator.parser().parse(text)?;
    let options = PreviewOptions {
        cursor_count: count.unwrap_or(creator.preview_options().cursor_count),
        ..creator.preview_options().clone()
    };
    Ok(format!(
        "{}\n",
        preview_expression(&expr, &options, creator.alphabet())
    ))
}

/// `seqgen generate`: the first `count` values.
pub fn generate(
    creator: &SequenceCreator,
    text: &str,
    count: usize,
    separator: &str,
) -> Result<String, CliError> {
    let values = creator.values(text, count)?;
    let mut output = values.join(separator);
    if !output.is_empty() {
        output.push('\n');
    }
    Ok(output)
}

/// Where `seqgen fill` should put the values
pub enum Targets<'a> {
    /// Every occurrence of a marker string
    Marker(&'a str),
    /// Explicit positions, in the order given
    Explicit(Vec<TargetRange>),
}

/// `seqgen fill`: write the sequence into a file (or stdin when `path` is `-`).
///
/// Returns the new contents, or an empty string when the file was rewritten in place.
pub fn fill(
    creator: &SequenceCreator,
    text: &str,
    path: &str,
    targets: Targets<'_>,
    in_place: bool,
) -> Result<String, CliError> {
    let buffer = read_source(path)?;
    let targets = match targets {
        Targets::Marker(marker) => find_markers(&buffer, marker),
        Targets::Explicit(targets) => targets,
    };
    let filled = creator.fill(text, &buffer, &targets)?;

    if in_place && path != "-" {
        fs::write(path, &filled).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?;
        info!(path, targets = targets.len(), "filled file in place");
        return Ok(String::new());
    }
    Ok(filled)
}

/// Parse `LINE:COLUMN` or `LINE:COLUMN..LINE:COLUMN` (zero-based).
pub fn parse_target(spec: &str) -> Result<TargetRange, CliError> {
    let invalid = || CliError::InvalidTarget(spec.to_string());
    let position = |part: &str| -> Result<Position, CliError> {
        let (line, column) = part.trim().split_once(':').ok_or_else(invalid)?;
        let line = line.trim().parse().map_err(|_| invalid())?;
        let column = column.trim().parse().map_err(|_| invalid())?;
        Ok(Position::new(line, column))
    };

    match spec.split_once("..") {
        Some((start, end)) => Ok(TargetRange::new(position(start)?, position(end)?)),
        None => Ok(TargetRange::cursor(position(spec)?)),
    }
}

fn read_source(path: &str) -> Result<String, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(io_error)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).map_err(io_error)
    }
}
