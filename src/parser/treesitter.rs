//! Tree-sitter parsing of one source buffer.

use anyhow::Context;

use super::{Grammars, LanguageId};
use crate::extract::{self, ExtractionResult};

/// A parsed file: the tree plus the bytes it was parsed from.
///
/// Kept together so node byte ranges always refer to the right buffer.
pub struct ParsedSource {
    pub language: LanguageId,
    pub tree: tree_sitter::Tree,
    pub source: Vec<u8>,
}

impl ParsedSource {
    /// Run declaration extraction over this tree.
    pub fn declarations(&self) -> ExtractionResult {
        let kinds = crate::parser::languages::kinds(self.language);
        extract::extract(self.tree.root_node(), &self.source, kinds)
    }

    /// True when the parser had to insert error or missing nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Parse `source` with the grammar for `language`.
///
/// Syntax errors do not fail the parse; the tree carries `ERROR` nodes
/// instead. Only a parser that produces no tree at all is an error.
pub fn parse_source(
    grammars: &Grammars,
    language: LanguageId,
    source: Vec<u8>,
) -> anyhow::Result<ParsedSource> {
    let mut parser = grammars.parser_for(language)?;
    let tree = parser
        .parse(&source, None)
        .with_context(|| format!("failed to parse {} source", language))?;

    Ok(ParsedSource {
        language,
        tree,
        source,
    })
}
