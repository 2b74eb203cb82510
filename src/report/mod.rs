//! Report generation: highlighted source, stats, tags and outlines.
//!
//! Output layout under the output directory:
//! - `source.html`: every file, highlighted, with its line stats
//! - `style/<theme>.css`: one stylesheet per highlighting theme
//! - `meta/stats.md`, `meta/todos.md`: line stats and tagged lines
//! - `meta/declarations.md`, `meta/declarations.json`: declaration outlines

mod html;
mod outline;
mod stats;
mod tags;

pub use html::{style_names, style_slug, theme_stylesheets, HtmlRenderer, DEFAULT_STYLE};
pub use outline::{outline_to_json, outline_to_markdown};
pub use stats::{stats_to_markdown, LineStats};
pub use tags::{find_tags, tags_to_markdown, TagLine};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::runner::BatchReport;

/// Write `contents` to `dir/name.ext`, creating `dir` if needed.
pub fn write_report<P: AsRef<Path>>(
    dir: P,
    name: &str,
    ext: &str,
    contents: &str,
) -> anyhow::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join(format!("{}.{}", name, ext));
    fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote report");
    Ok(path)
}

/// Write one stylesheet per theme into `out_dir/style`.
///
/// Existing stylesheets are left alone so hand edits survive reruns.
pub fn write_stylesheets<P: AsRef<Path>>(out_dir: P) -> anyhow::Result<usize> {
    let style_dir = out_dir.as_ref().join("style");
    let mut written = 0;
    for (slug, css) in theme_stylesheets()? {
        if style_dir.join(format!("{}.css", slug)).exists() {
            continue;
        }
        write_report(&style_dir, &slug, "css", &css)?;
        written += 1;
    }
    Ok(written)
}

/// Options for [`write_all`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Page title, usually the scanned directory's name.
    pub title: String,
    /// Highlighting theme selected by default.
    pub style: String,
    /// Whether to write the per-theme stylesheets.
    pub write_styles: bool,
}

/// Write the complete report for a batch. Returns the files written.
pub fn write_all<P: AsRef<Path>>(
    out_dir: P,
    batch: &BatchReport,
    options: &ReportOptions,
) -> anyhow::Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    let meta_dir = out_dir.join("meta");
    let renderer = HtmlRenderer::new(options.style.clone());

    let mut body = String::new();
    for file in &batch.files {
        let ext = file
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        body.push_str(&renderer.render_file(&file.title, &file.source, ext, &file.stats)?);
    }

    let mut written = vec![write_report(
        out_dir,
        "source",
        "html",
        &renderer.render_page(&options.title, &body),
    )?];

    if options.write_styles {
        let count = write_stylesheets(out_dir)?;
        tracing::debug!(count, "stylesheets written");
    }

    written.push(write_report(
        &meta_dir,
        "stats",
        "md",
        &stats_to_markdown(&batch.stats()),
    )?);
    written.push(write_report(
        &meta_dir,
        "todos",
        "md",
        &tags_to_markdown(&batch.tags()),
    )?);

    let declarations = batch.declarations();
    written.push(write_report(
        &meta_dir,
        "declarations",
        "md",
        &outline_to_markdown(&declarations),
    )?);
    written.push(write_report(
        &meta_dir,
        "declarations",
        "json",
        &outline_to_json(&declarations)?,
    )?);

    Ok(written)
}
