//! Canonical output of declaration extraction.

use std::ops::Range;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Reserved key holding top-level (non-class) functions.
pub const GLOBAL_SCOPE: &str = "globalScope";

/// A function or method signature: name and raw parameter-list text.
///
/// `name` is absent when the declaration has no identifier child (anonymous
/// or malformed), `parameters` when no parameter-list child was found.
/// Either may also be absent when its bytes could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// Byte range `name` was decoded from.
    #[serde(skip)]
    pub name_range: Option<Range<usize>>,
    /// Byte range `parameters` was decoded from.
    #[serde(skip)]
    pub parameters_range: Option<Range<usize>>,
    /// Line the declaration starts on (1-indexed).
    pub line: usize,
}

impl Declaration {
    /// Render as `name(params)` for outlines.
    pub fn signature(&self) -> String {
        format!(
            "{}{}",
            self.name.as_deref().unwrap_or("<anonymous>"),
            self.parameters.as_deref().unwrap_or("")
        )
    }
}

/// Declarations discovered in one file.
///
/// Holds the global-scope sequence (always present, possibly empty) and
/// one method sequence per class, keyed by class name in first-encounter
/// order. Sequences are in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    global_scope: Vec<Declaration>,
    classes: Vec<(String, Vec<Declaration>)>,
}

impl ExtractionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level functions.
    pub fn global_scope(&self) -> &[Declaration] {
        &self.global_scope
    }

    /// Methods of the class named `name`.
    pub fn class(&self, name: &str) -> Option<&[Declaration]> {
        self.classes
            .iter()
            .find(|(class_name, _)| class_name == name)
            .map(|(_, methods)| methods.as_slice())
    }

    /// Look up a sequence by key; [`GLOBAL_SCOPE`] selects the global scope.
    pub fn get(&self, key: &str) -> Option<&[Declaration]> {
        if key == GLOBAL_SCOPE {
            Some(&self.global_scope)
        } else {
            self.class(key)
        }
    }

    /// Class entries in first-encounter order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &[Declaration])> {
        self.classes
            .iter()
            .map(|(name, methods)| (name.as_str(), methods.as_slice()))
    }

    /// All keys: classes in encounter order, then the global-scope sentinel.
    pub fn keys(&self) -> Vec<&str> {
        self.classes
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(std::iter::once(GLOBAL_SCOPE))
            .collect()
    }

    /// True when no class was found and the global scope is empty.
    pub fn is_empty(&self) -> bool {
        self.global_scope.is_empty() && self.classes.is_empty()
    }

    /// Total number of functions and methods.
    pub fn declaration_count(&self) -> usize {
        self.global_scope.len()
            + self
                .classes
                .iter()
                .map(|(_, methods)| methods.len())
                .sum::<usize>()
    }

    pub(crate) fn push_global(&mut self, decl: Declaration) {
        self.global_scope.push(decl);
    }

    /// Register a class, keeping the position of an earlier class with the
    /// same name, and return its method sequence.
    pub(crate) fn class_entry(&mut self, name: String) -> &mut Vec<Declaration> {
        let index = match self.classes.iter().position(|(n, _)| *n == name) {
            Some(index) => index,
            None => {
                self.classes.push((name, Vec::new()));
                self.classes.len() - 1
            }
        };
        &mut self.classes[index].1
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.classes.len() + 1))?;
        for (name, methods) in &self.classes {
            map.serialize_entry(name, methods)?;
        }
        map.serialize_entry(GLOBAL_SCOPE, &self.global_scope)?;
        map.end()
    }
}
