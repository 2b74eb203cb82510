//! C# grammar configuration.

use tree_sitter::Language;

use crate::extract::GrammarKinds;

/// C# node kinds.
///
/// Top-level functions only exist as local functions in top-level
/// statements, each wrapped in a `global_statement`. Return types that are
/// plain identifiers precede the method name, which is why the extractor
/// takes the last matching name child. Types declared inside a namespace
/// block are one level too deep and are not recovered; a file-scoped
/// `namespace X;` leaves them at the top level.
pub static KINDS: GrammarKinds = GrammarKinds {
    function_kinds: &["local_function_statement"],
    class_kinds: &[
        "class_declaration",
        "struct_declaration",
        "interface_declaration",
        "record_declaration",
    ],
    method_kinds: &["method_declaration", "constructor_declaration"],
    name_kinds: &["identifier"],
    class_name_kinds: &["identifier"],
    params_kind: "parameter_list",
    body_kind: "declaration_list",
    declarator_kinds: &[],
    wrapper_kinds: &["global_statement"],
    forward_declarations: false,
};

pub fn language() -> Language {
    tree_sitter_c_sharp::LANGUAGE.into()
}
