//! Python grammar configuration.

use tree_sitter::Language;

use crate::extract::GrammarKinds;

/// Python node kinds.
///
/// `def` at module level and directly in a class body share one kind.
/// Decorated definitions are wrapped in `decorated_definition` and are
/// not looked through.
pub static KINDS: GrammarKinds = GrammarKinds {
    function_kinds: &["function_definition"],
    class_kinds: &["class_definition"],
    method_kinds: &["function_definition"],
    name_kinds: &["identifier"],
    class_name_kinds: &["identifier"],
    params_kind: "parameters",
    body_kind: "block",
    declarator_kinds: &[],
    wrapper_kinds: &[],
    forward_declarations: false,
};

pub fn language() -> Language {
    tree_sitter_python::LANGUAGE.into()
}
