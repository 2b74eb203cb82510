//! Highlighted HTML rendering of source files.
//!
//! Highlighting emits CSS classes rather than inline colors, so one page
//! can switch between themes by swapping its stylesheet. Each syntect
//! theme becomes one stylesheet under `style/`.

use lazy_static::lazy_static;
use regex::Regex;
use syntect::highlighting::ThemeSet;
use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::stats::LineStats;

lazy_static! {
    static ref SYNTAX_SET: SyntaxSet = SyntaxSet::load_defaults_newlines();
    static ref THEME_SET: ThemeSet = ThemeSet::load_defaults();

    /// The theme's base rule for highlighted blocks.
    static ref CODE_RULE: Regex = Regex::new(r"(?s)\.code \{.*?\}").unwrap();
}

/// Rule prepended to every stylesheet.
const CSS_GLOBAL: &str = "body  { background: #1c1d19; color: #f8f8f2 }\n";

/// Theme switcher, inserted into the page head.
const SCRIPT: &str = r#"  <script>
    function updateCss() {
      let newVal = document.getElementById('styleId').value;
      let link = document.getElementsByTagName('link')[0];
      link.href = newVal;
    }
  </script>
"#;

/// Default theme used when none is configured.
pub const DEFAULT_STYLE: &str = "base16-ocean.dark";

/// Names of all available highlighting themes.
pub fn style_names() -> Vec<String> {
    THEME_SET.themes.keys().cloned().collect()
}

/// File-name-safe form of a theme name (`Solarized (dark)` -> `solarized-dark`).
pub fn style_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '.' {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Stylesheet for every theme, as `(slug, css)` pairs.
///
/// A theme whose base rule sets no text color gets black text.
pub fn theme_stylesheets() -> anyhow::Result<Vec<(String, String)>> {
    let mut sheets = Vec::new();
    for (name, theme) in THEME_SET.themes.iter() {
        let css = css_for_theme_with_class_style(theme, ClassStyle::Spaced)?;
        sheets.push((style_slug(name), with_global_rules(&css)));
    }
    Ok(sheets)
}

fn with_global_rules(css: &str) -> String {
    let Some(rule) = CODE_RULE.find(css) else {
        return format!("{}{}", CSS_GLOBAL, css);
    };

    let block = rule.as_str();
    let has_text_color = block
        .lines()
        .any(|line| line.trim_start().starts_with("color:"));
    let block = if has_text_color {
        block.to_string()
    } else {
        block.replacen('}', " color: #000000;\n}", 1)
    };

    format!(
        "{}{}{}{}",
        &css[..rule.start()],
        CSS_GLOBAL,
        block,
        &css[rule.end()..]
    )
}

/// Renders source files into one browsable page.
pub struct HtmlRenderer {
    style: String,
}

impl HtmlRenderer {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }

    /// Highlight one file: heading, stats block, then the source.
    ///
    /// `ext` picks the syntax (without the dot); unknown extensions render
    /// as plain text.
    pub fn render_file(
        &self,
        title: &str,
        source: &str,
        ext: &str,
        stats: &LineStats,
    ) -> anyhow::Result<String> {
        let syntax = SYNTAX_SET
            .find_syntax_by_extension(ext)
            .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
        for line in LinesWithEndings::from(source) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(format!(
            "<h2>{}</h2>\n{}<pre class=\"code\">{}</pre>\n",
            html_escape::encode_text(title),
            stats.to_html(),
            generator.finalize()
        ))
    }

    /// Wrap rendered files into a complete document with the theme picker.
    pub fn render_page(&self, title: &str, body: &str) -> String {
        let options: Vec<String> = style_names()
            .iter()
            .map(|name| {
                let slug = style_slug(name);
                let selected = if *name == self.style { " selected" } else { "" };
                format!(
                    "<option value=\"style/{}.css\"{}>{}</option>",
                    slug,
                    selected,
                    html_escape::encode_text(name)
                )
            })
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
  <title>{title}</title>
  <meta http-equiv="content-type" content="text/html; charset=utf-8">
  <link rel="stylesheet" href="style/{css}.css" type="text/css">
{script}</head>
<body>
<label for="styles">Choose syntax color style:</label>
<select name="styles" id="styleId" onchange="updateCss()">
  {options}
</select>
{body}
</body>
</html>
"#,
            title = html_escape::encode_text(title),
            css = style_slug(&self.style),
            script = SCRIPT,
            options = options.join("\n  "),
            body = body,
        )
    }
}
