//! Error types surfaced while parsing and rendering documentation.

use thiserror::Error;

/// Everything that can go wrong turning doc comments into a page.
///
/// Each variant carries enough context (file or record, raw text) for the
/// author to find and fix the offending comment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocError {
    #[error("{file}: malformed directive '@{text}': {reason}")]
    MalformedDirective {
        file: String,
        text: String,
        reason: String,
    },

    #[error("{file}: record has no @method directive (saw '@{text}')")]
    IncompleteRecord { file: String, text: String },

    #[error("record '{record}' has no {field}")]
    MissingField { record: String, field: &'static str },
}
