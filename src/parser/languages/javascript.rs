//! JavaScript grammar configuration.

use tree_sitter::Language;

use crate::extract::GrammarKinds;

/// JavaScript node kinds.
///
/// `export` statements are looked through so exported functions and
/// classes count as top level. Functions bound to variables
/// (`const f = () => {}`) are expressions, not declarations, and are skipped.
pub static KINDS: GrammarKinds = GrammarKinds {
    function_kinds: &["function_declaration", "generator_function_declaration"],
    class_kinds: &["class_declaration"],
    method_kinds: &["method_definition"],
    name_kinds: &["identifier", "property_identifier", "private_property_identifier"],
    class_name_kinds: &["identifier"],
    params_kind: "formal_parameters",
    body_kind: "class_body",
    declarator_kinds: &[],
    wrapper_kinds: &["export_statement"],
    forward_declarations: false,
};

pub fn language() -> Language {
    tree_sitter_javascript::LANGUAGE.into()
}
