//! Directive grammar.
//!
//! ```text
//! @method <name> <free text>
//! @param  <name> <type> <free text>
//! @return <type> <free text>
//! ```
//!
//! Keywords are case-insensitive; every field, including the free text,
//! is required.

use crate::error::DocError;
use crate::model::{Parameter, ReturnValue};
use regex::Regex;
use std::sync::LazyLock;

static RE_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:method)\s+(\S+)\s+(.+)$").unwrap());

static RE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:param)\s+(\S+)\s+(\S+)\s+(.+)$").unwrap());

static RE_RETURN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i:return)\s+(\S+)\s+(.+)$").unwrap());

/// A parsed directive body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Method { name: String, summary: String },
    Param(Parameter),
    Return(ReturnValue),
}

impl Directive {
    /// Parse a directive body (the text after `@`) from `file`.
    pub fn parse(body: &str, file: &str) -> Result<Self, DocError> {
        let keyword = body.split_whitespace().next().unwrap_or_default();
        let kind = keyword.to_ascii_lowercase();
        let (re, usage) = match kind.as_str() {
            "method" => (&*RE_METHOD, "@method <name> <description>"),
            "param" => (&*RE_PARAM, "@param <name> <type> <description>"),
            "return" => (&*RE_RETURN, "@return <type> <description>"),
            _ => {
                return Err(malformed(
                    body,
                    file,
                    format!("unknown directive '{}'", keyword),
                ))
            }
        };

        let caps = re
            .captures(body)
            .ok_or_else(|| malformed(body, file, format!("expected {}", usage)))?;
        let field = |i: usize| caps[i].trim().to_string();

        Ok(match kind.as_str() {
            "method" => Directive::Method {
                name: field(1),
                summary: field(2),
            },
            "param" => Directive::Param(Parameter {
                name: field(1),
                ty: field(2),
                description: field(3),
            }),
            _ => Directive::Return(ReturnValue {
                ty: field(1),
                description: field(2),
            }),
        })
    }
}

fn malformed(body: &str, file: &str, reason: String) -> DocError {
    DocError::MalformedDirective {
        file: file.to_string(),
        text: body.to_string(),
        reason,
    }
}
