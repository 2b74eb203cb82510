//! Per-file line statistics.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

/// Line counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total_lines: usize,
    pub empty_lines: usize,
}

impl LineStats {
    /// Count lines of `text`.
    ///
    /// Lines are the pieces between `'\n'` separators, so text ending in a
    /// newline has a final empty line.
    pub fn from_text(text: &str) -> Self {
        let mut stats = LineStats::default();
        for line in text.split('\n') {
            stats.total_lines += 1;
            if line.is_empty() {
                stats.empty_lines += 1;
            }
        }
        stats
    }

    /// Lines that are not empty.
    pub fn code_lines(&self) -> usize {
        self.total_lines - self.empty_lines
    }

    /// Small HTML block shown above a file's source.
    pub fn to_html(&self) -> String {
        format!(
            "<div>\n<h5>Total: {}</h5>\n<h5>Empty: {}</h5>\n<h5>Loc: {}</h5>\n</div>\n",
            self.total_lines,
            self.empty_lines,
            self.code_lines()
        )
    }
}

/// Render stats for many files as markdown, one section per file.
pub fn stats_to_markdown(stats: &BTreeMap<String, LineStats>) -> String {
    let mut buf = String::new();
    for (name, s) in stats {
        let _ = writeln!(buf, "# {}", name);
        let _ = writeln!(buf, "* total line count: {}", s.total_lines);
        let _ = writeln!(buf, "* empty line count: {}", s.empty_lines);
        let _ = writeln!(buf, "* code  line count: {}", s.code_lines());
        buf.push('\n');
    }
    buf
}
