//! srcdoc - source tree documentation.
//!
//! srcdoc walks a source tree and produces highlighted HTML, line
//! statistics, marker-comment listings and declaration outlines.
//!
//! # Architecture
//!
//! - `parser`: language identification and the tree-sitter grammars
//! - `extract`: grammar-agnostic extraction of functions, classes and methods
//! - `walk`: file enumeration
//! - `runner`: parallel per-file pipeline
//! - `report`: HTML, Markdown and JSON output
//! - `config`: YAML configuration
//!
//! # Adding a New Language
//!
//! Add a file under `src/parser/languages/` with the grammar's
//! `GrammarKinds` table, then register it in `LanguageId` and
//! `languages/mod.rs`.

pub mod cli;
pub mod config;
pub mod extract;
pub mod parser;
pub mod report;
pub mod runner;
pub mod walk;

pub use config::Config;
pub use extract::{extract, Declaration, ExtractionResult, GrammarKinds, SyntaxNode, GLOBAL_SCOPE};
pub use parser::{parse_source, Grammars, LanguageId, ParsedSource, UnsupportedLanguage};
pub use runner::{BatchReport, FileReport, Runner};
