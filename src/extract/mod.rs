//! Grammar-agnostic declaration extraction.
//!
//! Walks the top level of a concrete syntax tree and collects:
//! - top-level functions, into the global-scope sequence
//! - classes, each with the methods declared directly in its body
//!
//! The walk is deliberately shallow. Functions nested in other functions,
//! nested classes, decorated definitions and declarations inside control
//! flow are not recovered.
//!
//! What counts as a function, class, name or parameter list differs per
//! grammar; those node kinds are data ([`GrammarKinds`]) so the walk itself
//! has no per-language branches.

mod node;
mod result;
mod slice;

pub use node::SyntaxNode;
pub use result::{Declaration, ExtractionResult, GLOBAL_SCOPE};
pub use slice::{slice, DecodeError};

#[cfg(test)]
pub(crate) use node::mock;

use thiserror::Error;

/// Node kinds that drive extraction for one grammar.
#[derive(Debug, Clone, Copy)]
pub struct GrammarKinds {
    /// Top-level function definitions.
    pub function_kinds: &'static [&'static str],
    /// Class-like containers whose body holds methods.
    pub class_kinds: &'static [&'static str],
    /// Method definitions inside a class body.
    pub method_kinds: &'static [&'static str],
    /// Function/method name child.
    pub name_kinds: &'static [&'static str],
    /// Class name child.
    pub class_name_kinds: &'static [&'static str],
    /// Parameter list child, captured verbatim.
    pub params_kind: &'static str,
    /// Class body child.
    pub body_kind: &'static str,
    /// Children that carry the name and parameters instead of the
    /// definition itself (C's `function_declarator`). Followed down as long
    /// as one matches, so `pointer_declarator` -> `function_declarator`
    /// chains resolve.
    pub declarator_kinds: &'static [&'static str],
    /// Top-level statement wrappers looked through once (C#'s
    /// `global_statement` around top-level local functions).
    pub wrapper_kinds: &'static [&'static str],
    /// A class node without a body is a forward declaration (C++'s
    /// `class Widget;`) and is skipped instead of treated as malformed.
    pub forward_declarations: bool,
}

/// A class-like node without a body child.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("class {class:?} at line {line} has no {body_kind} child")]
pub struct MalformedTree {
    pub class: String,
    pub line: usize,
    pub body_kind: &'static str,
}

/// Extract top-level functions and classes with their methods.
///
/// `source` must be the buffer the tree was parsed from. The result depends
/// only on the tree and the buffer; calling this twice gives equal results.
pub fn extract<N: SyntaxNode>(root: N, source: &[u8], kinds: &GrammarKinds) -> ExtractionResult {
    let mut result = ExtractionResult::new();

    for node in top_level(root, kinds) {
        let kind = node.kind();
        if kinds.function_kinds.contains(&kind) {
            result.push_global(declaration(node, source, kinds));
        } else if kinds.class_kinds.contains(&kind) {
            if kinds.forward_declarations && node.first_child_of(&[kinds.body_kind]).is_none() {
                tracing::trace!(line = node.start_line(), "skipping forward declaration");
                continue;
            }
            if let Err(err) = extract_class(node, source, kinds, &mut result) {
                tracing::debug!(error = %err, "recording class with no methods");
            }
        }
    }

    result
}

/// Root children in order, with wrapper statements replaced by their own
/// children.
fn top_level<N: SyntaxNode>(root: N, kinds: &GrammarKinds) -> Vec<N> {
    let mut nodes = Vec::new();
    for child in root.children() {
        if kinds.wrapper_kinds.contains(&child.kind()) {
            nodes.extend(child.children());
        } else {
            nodes.push(child);
        }
    }
    nodes
}

/// Record one class and its direct methods.
///
/// A missing body still registers the class (with an empty method list)
/// before reporting [`MalformedTree`].
fn extract_class<N: SyntaxNode>(
    node: N,
    source: &[u8],
    kinds: &GrammarKinds,
    result: &mut ExtractionResult,
) -> Result<(), MalformedTree> {
    let name = node
        .last_child_of(kinds.class_name_kinds)
        .and_then(|child| decode(child, source))
        .map(|(text, _)| text)
        .unwrap_or_default();

    let body = node.first_child_of(&[kinds.body_kind]);
    let methods = result.class_entry(name.clone());

    let body = body.ok_or(MalformedTree {
        class: name,
        line: node.start_line(),
        body_kind: kinds.body_kind,
    })?;

    for child in body.children() {
        if kinds.method_kinds.contains(&child.kind()) {
            methods.push(declaration(child, source, kinds));
        }
    }

    Ok(())
}

/// Build a declaration from a function or method node.
fn declaration<N: SyntaxNode>(node: N, source: &[u8], kinds: &GrammarKinds) -> Declaration {
    let mut holder = node;
    while let Some(inner) = holder.first_child_of(kinds.declarator_kinds) {
        holder = inner;
    }

    let name = holder
        .last_child_of(kinds.name_kinds)
        .and_then(|child| decode(child, source));
    let parameters = holder
        .last_child_of(&[kinds.params_kind])
        .and_then(|child| decode(child, source));

    let (name, name_range) = split(name);
    let (parameters, parameters_range) = split(parameters);

    Declaration {
        name,
        parameters,
        name_range,
        parameters_range,
        line: node.start_line(),
    }
}

/// Decode a node's text, dropping the field on failure.
fn decode<N: SyntaxNode>(node: N, source: &[u8]) -> Option<(String, std::ops::Range<usize>)> {
    let range = node.byte_range();
    match slice(source, range.start, range.end) {
        Ok(text) => Some((text.to_string(), range)),
        Err(err) => {
            tracing::debug!(error = %err, kind = node.kind(), "omitting undecodable field");
            None
        }
    }
}

fn split<T, R>(pair: Option<(T, R)>) -> (Option<T>, Option<R>) {
    match pair {
        Some((text, range)) => (Some(text), Some(range)),
        None => (None, None),
    }
}
