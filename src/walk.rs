//! Source file enumeration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;

/// Collect files under `root` whose names end with a legal ending.
///
/// Hidden directories, the output directory and excluded paths are
/// skipped. Results are sorted.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let out_dir = resolve_out_dir(&config.out_dir)?;

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            // Skip hidden directories and our own output
            let name = e.file_name().to_string_lossy();
            !name.starts_with('.') && !is_same_dir(e.path(), &out_dir)
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !config.is_legal_file(name) {
            continue;
        }
        if config.is_path_excluded(path) {
            tracing::debug!(path = %path.display(), "excluded by config");
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

/// Absolute form of the output directory. Relative paths are taken from
/// the current directory, where reports are written.
pub fn resolve_out_dir(out_dir: &Path) -> anyhow::Result<PathBuf> {
    let abs = if out_dir.is_absolute() {
        out_dir.to_path_buf()
    } else {
        std::env::current_dir()?.join(out_dir)
    };
    // Not created yet means nothing to skip; keep the joined path
    Ok(abs.canonicalize().unwrap_or(abs))
}

fn is_same_dir(dir: &Path, out_dir: &Path) -> bool {
    dir == out_dir || dir.canonicalize().map_or(false, |d| d == out_dir)
}
