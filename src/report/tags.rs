//! Marker comment mining (`TODO` and friends).

use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write;

use serde::Serialize;

/// One line containing a marker tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLine {
    /// Line number, 0-indexed.
    pub line: usize,
    /// Text from the tag to the end of the line.
    pub text: String,
}

impl fmt::Display for TagLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.line, self.text)
    }
}

/// Find every non-empty line of `text` that contains `tag`.
///
/// Anything before the first occurrence of the tag is dropped, so
/// `    x = 1  # TODO: tidy` yields `TODO: tidy`.
pub fn find_tags(text: &str, tag: &str) -> Vec<TagLine> {
    if tag.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .filter_map(|(num, line)| {
            let start = line.find(tag)?;
            Some(TagLine {
                line: num,
                text: line[start..].trim_end_matches('\r').to_string(),
            })
        })
        .collect()
}

/// Render tagged lines per file as markdown.
///
/// Files without tags are left out.
pub fn tags_to_markdown(tags: &BTreeMap<String, Vec<TagLine>>) -> String {
    let mut buf = String::new();
    for (name, lines) in tags.iter().filter(|(_, lines)| !lines.is_empty()) {
        let _ = writeln!(buf, "# {}", name);
        buf.push_str("\n```\n");
        for line in lines {
            let _ = writeln!(buf, "{}", line);
        }
        buf.push_str("```\n");
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tags() {
        let text = "def f():\n    # TODO: handle unicode paths\n    pass\n\nx = 1  # TODO later\n";
        let tags = find_tags(text, "TODO");

        assert_eq!(
            tags,
            vec![
                TagLine {
                    line: 1,
                    text: "TODO: handle unicode paths".to_string()
                },
                TagLine {
                    line: 4,
                    text: "TODO later".to_string()
                },
            ]
        );
        assert_eq!(tags[0].to_string(), "1 -> TODO: handle unicode paths");
    }

    #[test]
    fn test_find_tags_case_sensitive() {
        assert!(find_tags("// todo: lower case\n", "TODO").is_empty());
        assert_eq!(find_tags("// FIXME: x\n", "FIXME").len(), 1);
        assert!(find_tags("anything", "").is_empty());
    }

    #[test]
    fn test_crlf_is_trimmed() {
        let tags = find_tags("a\r\n// TODO: b\r\n", "TODO");
        assert_eq!(tags[0].text, "TODO: b");
    }

    #[test]
    fn test_tags_markdown() {
        let mut tags = BTreeMap::new();
        tags.insert("main.rs".to_string(), find_tags("// TODO: one\n", "TODO"));
        tags.insert("clean.rs".to_string(), Vec::new());

        let md = tags_to_markdown(&tags);
        assert_eq!(md, "# main.rs\n\n```\n0 -> TODO: one\n```\n");
    }
}
