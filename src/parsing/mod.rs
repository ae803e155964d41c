//! parser for lectionary reading references

use tracing::debug;

use crate::language::Reference;

pub mod parser;
pub mod roman;

/// Parse one line, returning every citation found in it in the order they
/// appear.
pub fn parse(line: &str) -> Vec<Reference<'_>> {
    let mut parser = ReferenceParser::new();
    parser.parse(line);
    parser.into_references()
}

/// Collects the citations found across one or more lines. Each Reference
/// borrows the line it was found in, so lines must outlive the parser.
#[derive(Debug, Default)]
pub struct ReferenceParser<'i> {
    references: Vec<Reference<'i>>,
}

impl<'i> ReferenceParser<'i> {
    pub fn new() -> ReferenceParser<'i> {
        ReferenceParser {
            references: Vec::new(),
        }
    }

    /// Scan a line and append whatever citations it holds. Returns the ones
    /// found in this line.
    pub fn parse(&mut self, line: &'i str) -> &[Reference<'i>] {
        let found = parser::read_citations(line);

        debug!(
            "Found {} reference{}",
            found.len(),
            if found.len() == 1 { "" } else { "s" }
        );

        let before = self
            .references
            .len();
        self.references
            .extend(found);

        &self.references[before..]
    }

    pub fn references(&self) -> &[Reference<'i>] {
        &self.references
    }

    pub fn into_references(self) -> Vec<Reference<'i>> {
        self.references
    }
}
