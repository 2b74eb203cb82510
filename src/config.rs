//! Run configuration, loaded from YAML.
//!
//! Every field is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::report::DEFAULT_STYLE;

/// Config file names looked for in the current directory.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["srcdoc.yaml", ".srcdoc.yaml"];

/// File endings scanned when none are configured.
pub const DEFAULT_LEGAL_ENDINGS: &[&str] = &[".py", ".rs", ".c", ".cpp", ".h", ".cs", ".js"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// File name endings to include (e.g. ".py"), matched literally.
    pub legal_endings: Vec<String>,
    /// Where reports are written; relative paths are taken from the working
    /// directory. Skipped when it lies inside the scanned tree.
    pub out_dir: PathBuf,
    /// Highlighting theme selected by default in the HTML page.
    pub style: String,
    /// Marker text collected into the tags report.
    pub tag: String,
    /// Glob patterns for paths to leave out (e.g. "**/vendor/**").
    pub excluded_paths: Vec<String>,
    /// Whether to (re)generate per-theme stylesheets.
    pub write_styles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legal_endings: DEFAULT_LEGAL_ENDINGS.iter().map(|e| e.to_string()).collect(),
            out_dir: PathBuf::from("out"),
            style: DEFAULT_STYLE.to_string(),
            tag: "TODO".to_string(),
            excluded_paths: Vec::new(),
            write_styles: true,
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load `explicit` if given, else the first discovered config file,
    /// else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::parse_file(path),
            None => match discover() {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "using discovered config");
                    Self::parse_file(path)
                }
                None => Ok(Self::default()),
            },
        }
    }

    /// Check if a path should be excluded based on `excluded_paths`.
    /// Invalid patterns are ignored.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }

    /// True if `file_name` ends with one of the legal endings.
    pub fn is_legal_file(&self, file_name: &str) -> bool {
        self.legal_endings
            .iter()
            .any(|ending| file_name.ends_with(ending.as_str()))
    }
}

/// Validate a configuration.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.legal_endings.is_empty() {
        anyhow::bail!("legal_endings must not be empty");
    }
    if let Some(ending) = config.legal_endings.iter().find(|e| e.is_empty()) {
        anyhow::bail!("legal_endings contains an empty entry: {:?}", ending);
    }
    if config.tag.trim().is_empty() {
        anyhow::bail!("tag must not be empty");
    }
    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .with_context(|| format!("invalid excluded_paths pattern {:?}", pattern))?;
    }
    Ok(())
}

/// First config file found in the current directory, then in the user's
/// config directory.
fn discover() -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }
    ProjectDirs::from("", "", "srcdoc")
        .map(|dirs| dirs.config_dir().join("config.yaml"))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.tag, "TODO");
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert!(config.is_legal_file("main.py"));
        assert!(config.is_legal_file("lib.rs"));
        assert!(!config.is_legal_file("README.md"));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = Config::parse_str(
            r#"
legal_endings: [".py"]
tag: FIXME
excluded_paths:
  - "**/build/**"
"#,
        )
        .unwrap();

        assert_eq!(config.legal_endings, vec![".py"]);
        assert_eq!(config.tag, "FIXME");
        // Unset fields keep their defaults
        assert_eq!(config.style, DEFAULT_STYLE);
        assert!(config.write_styles);
        assert!(config.is_path_excluded(Path::new("proj/build/gen.py")));
        assert!(!config.is_path_excluded(Path::new("proj/src/gen.py")));
    }

    #[test]
    fn test_parse_empty_file() {
        let config = Config::parse_str("").unwrap();
        assert_eq!(config.tag, "TODO");
    }

    #[test]
    fn test_parse_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("srcdoc.yaml");
        std::fs::write(&path, "out_dir: docs/out\nwrite_styles: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.out_dir, PathBuf::from("docs/out"));
        assert!(!config.write_styles);

        assert!(Config::load(Some(&temp.path().join("missing.yaml"))).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_config() {
        let mut config = Config::default();
        config.tag = "  ".to_string();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.legal_endings.clear();
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.excluded_paths.push("[unclosed".to_string());
        assert!(validate(&config).is_err());
    }
}
