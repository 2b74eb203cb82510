//! C grammar configuration.

use tree_sitter::Language;

use crate::extract::GrammarKinds;

/// C node kinds.
///
/// C has no classes. A function's name and parameter list live on its
/// `function_declarator` child rather than on the definition itself.
/// Definitions returning pointers wrap that declarator in one
/// `pointer_declarator` per `*`.
pub static KINDS: GrammarKinds = GrammarKinds {
    function_kinds: &["function_definition"],
    class_kinds: &[],
    method_kinds: &[],
    name_kinds: &["identifier"],
    class_name_kinds: &[],
    params_kind: "parameter_list",
    body_kind: "",
    declarator_kinds: &["pointer_declarator", "function_declarator"],
    wrapper_kinds: &[],
    forward_declarations: false,
};

pub fn language() -> Language {
    tree_sitter_c::LANGUAGE.into()
}
