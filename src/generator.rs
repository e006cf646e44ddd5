//! Top-level generator: owns the document set for one run.

use crate::error::DocError;
use crate::model::DocumentSet;
use crate::parser;
use crate::render::{self, RenderOptions, Rendered};

/// Collects records from each source in turn, then renders them sorted.
///
/// Sources are parsed in the order they are added; that order only decides
/// how records with identical names are placed relative to each other.
#[derive(Debug, Default)]
pub struct Generator {
    set: DocumentSet,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            set: DocumentSet::new(),
        }
    }

    /// Parse one source; the first error aborts.
    pub fn add_source(&mut self, file: &str, source: &str) -> Result<(), DocError> {
        let set = std::mem::take(&mut self.set);
        self.set = parser::parse_source(set, file, source)?;
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.set.len()
    }

    /// Sort everything collected so far by name and render it.
    pub fn finish(self, options: &RenderOptions) -> Result<Rendered, DocError> {
        let mut set = self.set;
        set.sort_by_name();
        render::render(&set, options)
    }
}
