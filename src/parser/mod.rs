//! Parser module — doc comments of one source file into method records.

pub mod builder;
pub mod directive;
pub mod tokenize;

use crate::error::DocError;
use crate::model::DocumentSet;
use tracing::{debug, info};

/// Parse the text of one file and add its records to `set`.
///
/// `file` is the display name attached to every record. The first
/// malformed or incomplete record aborts the file.
pub fn parse_source(mut set: DocumentSet, file: &str, source: &str) -> Result<DocumentSet, DocError> {
    let tokens = tokenize::tokenize(source);
    debug!(file = %file, tokens = tokens.len(), "tokenized");

    let records = builder::build(tokens, file)?;
    info!(file = %file, records = records.len(), "parsed");

    set.extend(records);
    Ok(set)
}
