//! C++ grammar configuration.

use tree_sitter::Language;

use crate::extract::GrammarKinds;

/// C++ node kinds.
///
/// Methods defined inline in a class body are `function_definition`s whose
/// declarator is named by a `field_identifier`. Out-of-line definitions
/// (`void Foo::bar()`) stay in the global scope under their qualified name.
/// Member declarations without a body are `field_declaration`s and are
/// skipped. Pointer and reference return types wrap the
/// `function_declarator` and are looked through. Forward declarations
/// (`class Widget;`) have no body and are skipped, so a class keeps the
/// position of its definition.
pub static KINDS: GrammarKinds = GrammarKinds {
    function_kinds: &["function_definition"],
    class_kinds: &["class_specifier", "struct_specifier"],
    method_kinds: &["function_definition"],
    name_kinds: &[
        "identifier",
        "field_identifier",
        "qualified_identifier",
        "destructor_name",
        "operator_name",
    ],
    class_name_kinds: &["type_identifier"],
    params_kind: "parameter_list",
    body_kind: "field_declaration_list",
    declarator_kinds: &[
        "pointer_declarator",
        "reference_declarator",
        "function_declarator",
    ],
    wrapper_kinds: &[],
    forward_declarations: true,
};

pub fn language() -> Language {
    tree_sitter_cpp::LANGUAGE.into()
}
