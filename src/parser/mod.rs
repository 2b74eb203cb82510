//! Language resolution and tree-sitter grammar access.
//!
//! This module provides:
//! - `LanguageId`: the six supported grammars, resolved from file extensions
//! - `Grammars`: the loaded grammar handle, built once and shared read-only
//! - `parse_source`: bytes in, concrete syntax tree out

use std::fmt;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::OnceCell;
use phf::phf_map;
use thiserror::Error;
use tree_sitter::Language;

use crate::extract::GrammarKinds;

pub mod languages;
pub mod treesitter;

pub use treesitter::{parse_source, ParsedSource};

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageId {
    C,
    Cpp,
    CSharp,
    Python,
    Rust,
    JavaScript,
}

/// Extension to language, exact and case-sensitive.
static EXTENSIONS: phf::Map<&'static str, LanguageId> = phf_map! {
    "cpp" => LanguageId::Cpp,
    "h" => LanguageId::Cpp,
    "cc" => LanguageId::Cpp,
    "hh" => LanguageId::Cpp,
    "hpp" => LanguageId::Cpp,
    "c" => LanguageId::C,
    "py" => LanguageId::Python,
    "cs" => LanguageId::CSharp,
    "rs" => LanguageId::Rust,
    "js" => LanguageId::JavaScript,
};

/// A file whose extension maps to no supported grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language for {path} (extension {extension:?})")]
pub struct UnsupportedLanguage {
    pub path: String,
    pub extension: String,
}

impl LanguageId {
    pub const ALL: [LanguageId; 6] = [
        LanguageId::C,
        LanguageId::Cpp,
        LanguageId::CSharp,
        LanguageId::Python,
        LanguageId::Rust,
        LanguageId::JavaScript,
    ];

    /// Resolve the language of a file from its extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, UnsupportedLanguage> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext).ok_or_else(|| UnsupportedLanguage {
            path: path.to_string_lossy().to_string(),
            extension: ext.to_string(),
        })
    }

    /// Resolve an extension given without the dot (e.g. `"py"`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS.get(ext).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::C => "c",
            LanguageId::Cpp => "cpp",
            LanguageId::CSharp => "csharp",
            LanguageId::Python => "python",
            LanguageId::Rust => "rust",
            LanguageId::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One loaded grammar and the node kinds the extractor keys on.
#[derive(Clone)]
pub struct Grammar {
    pub id: LanguageId,
    pub language: Language,
    pub kinds: &'static GrammarKinds,
}

/// All loaded grammars.
///
/// Build once at startup (or through [`Grammars::global`]) and share by
/// reference; it is read-only after construction.
pub struct Grammars {
    grammars: Vec<Grammar>,
}

static GLOBAL: OnceCell<Grammars> = OnceCell::new();

impl Grammars {
    /// Load every supported grammar.
    pub fn load() -> Self {
        let grammars = LanguageId::ALL
            .iter()
            .map(|&id| Grammar {
                id,
                language: languages::language(id),
                kinds: languages::kinds(id),
            })
            .collect();
        tracing::debug!("loaded {} grammars", LanguageId::ALL.len());
        Self { grammars }
    }

    /// Process-wide handle, loaded on first call.
    ///
    /// Concurrent first calls block until a single load finishes.
    pub fn global() -> &'static Grammars {
        GLOBAL.get_or_init(Grammars::load)
    }

    pub fn get(&self, id: LanguageId) -> &Grammar {
        // `load` fills one entry per `LanguageId::ALL`, in that order
        &self.grammars[id as usize]
    }

    /// A fresh parser configured for `id`.
    ///
    /// tree-sitter parsers are not `Sync`, so each worker makes its own.
    pub fn parser_for(&self, id: LanguageId) -> anyhow::Result<tree_sitter::Parser> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.get(id).language)?;
        Ok(parser)
    }

    /// Check that every grammar is accepted by the linked tree-sitter
    /// runtime.
    pub fn check(&self) -> anyhow::Result<()> {
        for grammar in &self.grammars {
            self.parser_for(grammar.id)
                .with_context(|| format!("{} grammar cannot be loaded", grammar.id))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        let cases = [
            ("src/main.cpp", LanguageId::Cpp),
            ("include/a.h", LanguageId::Cpp),
            ("a.cc", LanguageId::Cpp),
            ("a.hh", LanguageId::Cpp),
            ("a.hpp", LanguageId::Cpp),
            ("a.c", LanguageId::C),
            ("tool.py", LanguageId::Python),
            ("Program.cs", LanguageId::CSharp),
            ("lib.rs", LanguageId::Rust),
            ("app.js", LanguageId::JavaScript),
        ];
        for (path, expected) in cases {
            assert_eq!(LanguageId::from_path(path).unwrap(), expected, "{}", path);
        }
    }

    #[test]
    fn test_unsupported_language() {
        let err = LanguageId::from_path("notes.txt").unwrap_err();
        assert_eq!(err.extension, "txt");
        assert!(err.to_string().contains("notes.txt"));

        // Matching is case-sensitive
        assert!(LanguageId::from_path("MAIN.PY").is_err());
        assert!(LanguageId::from_path("Makefile").is_err());
        assert!(LanguageId::from_path("types.ts").is_err());
    }

    #[test]
    fn test_grammars_indexed_by_id() {
        let grammars = Grammars::load();
        for id in LanguageId::ALL {
            assert_eq!(grammars.get(id).id, id);
            assert!(grammars.parser_for(id).is_ok(), "{} should load", id);
        }
    }

    #[test]
    fn test_all_grammars_compatible() {
        if let Err(e) = Grammars::global().check() {
            panic!("{:#}", e);
        }
    }

    #[test]
    fn test_global_is_shared() {
        let a = Grammars::global() as *const Grammars;
        let b = Grammars::global() as *const Grammars;
        assert_eq!(a, b);
    }
}
