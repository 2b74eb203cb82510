//! Batch driver: reads, measures and extracts every file in parallel.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::config::Config;
use crate::extract::ExtractionResult;
use crate::parser::{parse_source, Grammars, LanguageId, UnsupportedLanguage};
use crate::report::{find_tags, LineStats, TagLine};

/// Everything gathered for one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    /// Path relative to the scanned root, for display.
    pub title: String,
    pub language: Option<LanguageId>,
    /// Source text (decoded lossily).
    pub source: String,
    pub stats: LineStats,
    pub tags: Vec<TagLine>,
    /// `None` when the language is unsupported.
    pub declarations: Option<ExtractionResult>,
}

/// A file that could not be processed.
#[derive(Debug)]
pub struct FileError {
    pub path: PathBuf,
    pub error: anyhow::Error,
}

/// Outcome of a batch run. Successful files are kept even when others fail.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Processed files, sorted by path.
    pub files: Vec<FileReport>,
    /// Files read fine but with no grammar; they have stats and tags only.
    pub skipped: Vec<UnsupportedLanguage>,
    pub errors: Vec<FileError>,
}

impl BatchReport {
    /// Declarations of every file that has them, keyed by display path.
    pub fn declarations(&self) -> BTreeMap<String, ExtractionResult> {
        self.files
            .iter()
            .filter_map(|f| f.declarations.clone().map(|d| (f.title.clone(), d)))
            .collect()
    }

    /// Line stats keyed by display path.
    pub fn stats(&self) -> BTreeMap<String, LineStats> {
        self.files
            .iter()
            .map(|f| (f.title.clone(), f.stats))
            .collect()
    }

    /// Tagged lines keyed by display path.
    pub fn tags(&self) -> BTreeMap<String, Vec<TagLine>> {
        self.files
            .iter()
            .map(|f| (f.title.clone(), f.tags.clone()))
            .collect()
    }
}

enum Outcome {
    Done(FileReport, Option<UnsupportedLanguage>),
    Failed(FileError),
}

/// Runs the per-file pipeline over a set of files.
pub struct Runner<'a> {
    grammars: &'a Grammars,
    root: PathBuf,
    tag: String,
    show_progress: bool,
}

impl<'a> Runner<'a> {
    /// Create a runner; `root` is used to shorten paths for display.
    pub fn new<P: AsRef<Path>>(grammars: &'a Grammars, root: P, config: &Config) -> Self {
        Self {
            grammars,
            root: root.as_ref().to_path_buf(),
            tag: config.tag.clone(),
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr while running.
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Process all files. Never fails as a whole; per-file problems are
    /// collected in the report.
    pub fn run(&self, files: &[PathBuf]) -> BatchReport {
        let progress = if self.show_progress {
            let bar = ProgressBar::new(files.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}") {
                bar.set_style(style);
            }
            bar
        } else {
            ProgressBar::hidden()
        };

        let outcomes: Vec<Outcome> = files
            .par_iter()
            .map(|path| {
                let outcome = match self.process(path) {
                    Ok((report, skipped)) => Outcome::Done(report, skipped),
                    Err(error) => Outcome::Failed(FileError {
                        path: path.clone(),
                        error,
                    }),
                };
                progress.inc(1);
                outcome
            })
            .collect();
        progress.finish_and_clear();

        let mut batch = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Done(report, skipped) => {
                    if let Some(skipped) = skipped {
                        tracing::debug!("{}", skipped);
                        batch.skipped.push(skipped);
                    }
                    batch.files.push(report);
                }
                Outcome::Failed(err) => {
                    tracing::warn!(path = %err.path.display(), "{:#}", err.error);
                    batch.errors.push(err);
                }
            }
        }
        batch.files.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            files = batch.files.len(),
            skipped = batch.skipped.len(),
            errors = batch.errors.len(),
            "batch complete"
        );
        batch
    }

    /// Read, measure and extract one file.
    fn process(&self, path: &Path) -> anyhow::Result<(FileReport, Option<UnsupportedLanguage>)> {
        let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let source = String::from_utf8_lossy(&bytes).into_owned();
        let stats = LineStats::from_text(&source);
        let tags = find_tags(&source, &self.tag);

        let (language, declarations, skipped) = match LanguageId::from_path(path) {
            Ok(language) => {
                let parsed = parse_source(self.grammars, language, bytes)
                    .with_context(|| format!("parsing {}", path.display()))?;
                if parsed.has_errors() {
                    tracing::debug!(path = %path.display(), "tree contains syntax errors");
                }
                (Some(language), Some(parsed.declarations()), None)
            }
            Err(unsupported) => (None, None, Some(unsupported)),
        };

        Ok((
            FileReport {
                path: path.to_path_buf(),
                title: display_path(&self.root, path),
                language,
                source,
                stats,
                tags,
                declarations,
            },
            skipped,
        ))
    }
}

/// `path` relative to `root`, prefixed with the root's own name
/// (`/home/me/proj/src/a.py` under `/home/me/proj` -> `proj/src/a.py`).
pub fn display_path(root: &Path, path: &Path) -> String {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => root_name,
        Ok(rel) if root_name.is_empty() => rel.to_string_lossy().to_string(),
        Ok(rel) => format!("{}/{}", root_name, rel.to_string_lossy()),
        Err(_) => path.to_string_lossy().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn test_runner_mixed_batch() {
        let temp = TempDir::new().unwrap();
        let py = temp.path().join("tool.py");
        let txt = temp.path().join("notes.txt");
        let missing = temp.path().join("missing.rs");
        std::fs::write(&py, "def foo(x):\n    pass  # TODO: validate x\n").unwrap();
        std::fs::write(&txt, "TODO: write notes\n").unwrap();

        let grammars = Grammars::load();
        let runner = Runner::new(&grammars, temp.path(), &config());
        let batch = runner.run(&[py.clone(), txt.clone(), missing.clone()]);

        assert_eq!(batch.files.len(), 2);
        assert_eq!(batch.errors.len(), 1);
        assert_eq!(batch.errors[0].path, missing);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].extension, "txt");

        let tool = batch.files.iter().find(|f| f.path == py).unwrap();
        assert_eq!(tool.language, Some(LanguageId::Python));
        assert_eq!(tool.stats.total_lines, 3);
        assert_eq!(tool.tags.len(), 1);
        let decls = tool.declarations.as_ref().unwrap();
        assert_eq!(decls.global_scope()[0].name.as_deref(), Some("foo"));

        let notes = batch.files.iter().find(|f| f.path == txt).unwrap();
        assert!(notes.declarations.is_none());
        assert_eq!(notes.tags.len(), 1);

        assert_eq!(batch.declarations().len(), 1);
        assert_eq!(batch.stats().len(), 2);
    }

    #[test]
    fn test_runner_results_sorted() {
        let temp = TempDir::new().unwrap();
        let mut files = Vec::new();
        for name in ["c.py", "a.py", "b.py"] {
            let path = temp.path().join(name);
            std::fs::write(&path, format!("def {}():\n    pass\n", &name[..1])).unwrap();
            files.push(path);
        }

        let grammars = Grammars::load();
        let batch = Runner::new(&grammars, temp.path(), &config()).run(&files);

        let names: Vec<_> = batch
            .files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.py", "b.py", "c.py"]);
    }

    #[test]
    fn test_display_path() {
        let root = Path::new("/home/me/proj");
        assert_eq!(
            display_path(root, Path::new("/home/me/proj/src/a.py")),
            "proj/src/a.py"
        );
        assert_eq!(display_path(root, Path::new("/elsewhere/b.rs")), "/elsewhere/b.rs");
        assert_eq!(display_path(root, root), "proj");
    }
}
