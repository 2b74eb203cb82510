//! Declaration outlines for every extracted file.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::extract::{Declaration, ExtractionResult};

/// Markdown outline: one section per file, global functions first, then
/// each class with its methods.
pub fn outline_to_markdown(results: &BTreeMap<String, ExtractionResult>) -> String {
    let mut buf = String::new();
    for (path, result) in results {
        let _ = writeln!(buf, "## {}\n", path);

        if result.is_empty() {
            buf.push_str("_no declarations_\n\n");
            continue;
        }

        if !result.global_scope().is_empty() {
            buf.push_str("### Global scope\n\n");
            write_declarations(&mut buf, result.global_scope());
        }

        for (class, methods) in result.classes() {
            let title = if class.is_empty() { "<anonymous>" } else { class };
            let _ = writeln!(buf, "### {}\n", title);
            if methods.is_empty() {
                buf.push_str("_no methods_\n\n");
            } else {
                write_declarations(&mut buf, methods);
            }
        }
    }
    buf
}

fn write_declarations(buf: &mut String, decls: &[Declaration]) {
    for decl in decls {
        let _ = writeln!(buf, "- `{}` (line {})", decl.signature(), decl.line);
    }
    buf.push('\n');
}

/// Pretty JSON of path to extraction result.
pub fn outline_to_json(results: &BTreeMap<String, ExtractionResult>) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_source, Grammars, LanguageId};

    fn python(source: &str) -> ExtractionResult {
        parse_source(Grammars::global(), LanguageId::Python, source.as_bytes().to_vec())
            .unwrap()
            .declarations()
    }

    #[test]
    fn test_outline_markdown() {
        let mut results = BTreeMap::new();
        results.insert(
            "pkg/mod.py".to_string(),
            python("def foo(x):\n    pass\n\nclass Bar:\n    def baz(self, y):\n        pass\n\nclass Empty:\n    pass\n"),
        );
        results.insert("pkg/empty.py".to_string(), python("x = 1\n"));

        let md = outline_to_markdown(&results);
        assert_eq!(
            md,
            "## pkg/empty.py\n\n_no declarations_\n\n\
             ## pkg/mod.py\n\n\
             ### Global scope\n\n- `foo(x)` (line 1)\n\n\
             ### Bar\n\n- `baz(self, y)` (line 5)\n\n\
             ### Empty\n\n_no methods_\n\n"
        );
    }

    #[test]
    fn test_outline_json() {
        let mut results = BTreeMap::new();
        results.insert("a.py".to_string(), python("def foo(x):\n    pass\n"));

        let json = outline_to_json(&results).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["a.py"]["globalScope"][0]["name"], "foo");
        assert_eq!(value["a.py"]["globalScope"][0]["parameters"], "(x)");
    }
}
