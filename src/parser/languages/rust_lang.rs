//! Rust grammar configuration.

use tree_sitter::Language;

use crate::extract::GrammarKinds;

/// Rust node kinds.
///
/// `impl` and `trait` blocks play the role of classes. For
/// `impl Trait for Type` both names are `type_identifier` children and the
/// implementing type comes last, so the entry is keyed by the type. Several
/// `impl` blocks for one type share one entry.
pub static KINDS: GrammarKinds = GrammarKinds {
    function_kinds: &["function_item"],
    class_kinds: &["impl_item", "trait_item"],
    method_kinds: &["function_item", "function_signature_item"],
    name_kinds: &["identifier"],
    class_name_kinds: &["type_identifier", "generic_type", "scoped_type_identifier"],
    params_kind: "parameters",
    body_kind: "declaration_list",
    declarator_kinds: &[],
    wrapper_kinds: &[],
    forward_declarations: false,
};

pub fn language() -> Language {
    tree_sitter_rust::LANGUAGE.into()
}

#[cfg(test)]
mod tests {
    use super::super::{extract_str, signatures};
    use crate::extract::GLOBAL_SCOPE;
    use crate::parser::LanguageId;

    #[test]
    fn test_rust_functions_and_impls() {
        let source = r#"
use std::fmt;

pub struct Config {
    name: String,
}

impl Config {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }

    const LIMIT: usize = 4;

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn main() {
    let _ = Config::new("x");
}
"#;
        let result = extract_str(LanguageId::Rust, source);

        assert_eq!(signatures(result.global_scope()), vec!["main()"]);
        assert_eq!(
            signatures(result.class("Config").unwrap()),
            vec![
                "new(name: &str)",
                "name(&self)",
                "fmt(&self, f: &mut fmt::Formatter<'_>)"
            ]
        );
        assert_eq!(result.keys(), vec!["Config", GLOBAL_SCOPE]);
    }

    #[test]
    fn test_rust_trait_signatures() {
        let source = r#"
pub trait Shape {
    fn area(&self) -> f64;

    fn describe(&self) -> String {
        String::new()
    }
}
"#;
        let result = extract_str(LanguageId::Rust, source);

        assert_eq!(
            signatures(result.class("Shape").unwrap()),
            vec!["area(&self)", "describe(&self)"]
        );
    }

    #[test]
    fn test_rust_mod_contents_not_recovered() {
        let source = r#"
mod inner {
    pub fn hidden() {}
}

fn visible() {}
"#;
        let result = extract_str(LanguageId::Rust, source);

        assert_eq!(signatures(result.global_scope()), vec!["visible()"]);
    }
}
