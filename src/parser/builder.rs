//! Record builder — groups directive tokens into method records.
//!
//! Two states: no record open, or a record being built. A directive opens
//! (or extends) the current record; a terminator finalizes it.

use super::directive::Directive;
use super::tokenize::Token;
use crate::error::DocError;
use crate::model::{MethodRecord, Parameter, ReturnValue};
use tracing::{debug, warn};

enum State {
    NoActiveRecord,
    BuildingRecord(Draft),
}

/// A record still receiving directives.
#[derive(Default)]
struct Draft {
    /// First directive body, reported when the record never gets a name
    first: String,
    method: Option<(String, String)>,
    parameters: Vec<Parameter>,
    return_value: Option<ReturnValue>,
}

impl Draft {
    fn apply(&mut self, body: &str, file: &str) -> Result<(), DocError> {
        if self.first.is_empty() {
            self.first = body.to_string();
        }
        match Directive::parse(body, file)? {
            Directive::Method { name, summary } => {
                if let Some((old, _)) = &self.method {
                    warn!(
                        file = %file,
                        old = %old,
                        new = %name,
                        "second @method in one record overrides the first"
                    );
                }
                self.method = Some((name, summary));
            }
            Directive::Param(param) => self.parameters.push(param),
            Directive::Return(ret) => {
                if self.return_value.is_some() {
                    warn!(file = %file, "second @return in one record overrides the first");
                }
                self.return_value = Some(ret);
            }
        }
        Ok(())
    }

    fn finish(self, file: &str) -> Result<MethodRecord, DocError> {
        let (name, summary) = self.method.ok_or_else(|| DocError::IncompleteRecord {
            file: file.to_string(),
            text: self.first.clone(),
        })?;
        Ok(MethodRecord {
            name,
            summary,
            parameters: self.parameters,
            return_value: self.return_value,
            source_file: file.to_string(),
        })
    }
}

/// Build the records of one file from its tokens.
///
/// A record only becomes permanent at a terminator. One still open when the
/// tokens run out is validated, then dropped.
pub fn build(tokens: Vec<Token>, file: &str) -> Result<Vec<MethodRecord>, DocError> {
    let mut records = Vec::new();
    let mut state = State::NoActiveRecord;

    for token in tokens {
        state = match (state, token) {
            (State::NoActiveRecord, Token::Terminator) => State::NoActiveRecord,
            (State::NoActiveRecord, Token::Directive(body)) => {
                let mut draft = Draft::default();
                draft.apply(&body, file)?;
                State::BuildingRecord(draft)
            }
            (State::BuildingRecord(mut draft), Token::Directive(body)) => {
                draft.apply(&body, file)?;
                State::BuildingRecord(draft)
            }
            (State::BuildingRecord(draft), Token::Terminator) => {
                let record = draft.finish(file)?;
                debug!(?record, "record finalized");
                records.push(record);
                State::NoActiveRecord
            }
        };
    }

    if let State::BuildingRecord(draft) = state {
        let record = draft.finish(file)?;
        warn!(
            file = %file,
            method = %record.name,
            "record not followed by code before end of file, dropped"
        );
    }

    Ok(records)
}
