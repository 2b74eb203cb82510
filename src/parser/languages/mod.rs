//! Per-language grammar configuration.
//!
//! Each language module provides:
//! - `language()`: the tree-sitter grammar
//! - `KINDS`: the node kinds declaration extraction keys on
//!
//! Adding a language means adding a module here, a `LanguageId` variant
//! and its extensions. The extractor itself does not change.

use tree_sitter::Language;

use super::LanguageId;
use crate::extract::GrammarKinds;

pub mod c;
pub mod cpp;
pub mod csharp;
pub mod javascript;
pub mod python;
pub mod rust_lang;

/// The tree-sitter grammar for `id`.
pub fn language(id: LanguageId) -> Language {
    match id {
        LanguageId::C => c::language(),
        LanguageId::Cpp => cpp::language(),
        LanguageId::CSharp => csharp::language(),
        LanguageId::Python => python::language(),
        LanguageId::Rust => rust_lang::language(),
        LanguageId::JavaScript => javascript::language(),
    }
}

/// Extraction node kinds for `id`.
pub fn kinds(id: LanguageId) -> &'static GrammarKinds {
    match id {
        LanguageId::C => &c::KINDS,
        LanguageId::Cpp => &cpp::KINDS,
        LanguageId::CSharp => &csharp::KINDS,
        LanguageId::Python => &python::KINDS,
        LanguageId::Rust => &rust_lang::KINDS,
        LanguageId::JavaScript => &javascript::KINDS,
    }
}

/// Parse and extract in one step, for the language tests.
#[cfg(test)]
pub(crate) fn extract_str(id: LanguageId, source: &str) -> crate::extract::ExtractionResult {
    let parsed = super::parse_source(super::Grammars::global(), id, source.as_bytes().to_vec())
        .expect("source should parse");
    parsed.declarations()
}

/// `name(params)` for each declaration, for compact assertions.
#[cfg(test)]
pub(crate) fn signatures(decls: &[crate::extract::Declaration]) -> Vec<String> {
    decls.iter().map(|d| d.signature()).collect()
}
