//! Command-line interface for srcdoc.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{self, Config};
use crate::parser::Grammars;
use crate::report::{self, outline_to_json, outline_to_markdown, ReportOptions};
use crate::runner::{BatchReport, Runner};
use crate::walk;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Source documentation generator.
///
/// Scans a source tree and writes highlighted HTML, line statistics,
/// marker comments and declaration outlines.
#[derive(Parser)]
#[command(name = "srcdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the full report for a file or directory
    Report(ReportArgs),
    /// Print declaration outlines to stdout
    Outline(OutlineArgs),
    /// List available highlighting styles
    Styles,
}

/// Options shared by every command that scans a tree.
#[derive(Args)]
pub struct ScanArgs {
    /// Path to scan (file or directory)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Default highlighting style (overrides config)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Marker text to collect (overrides config)
    #[arg(short, long)]
    pub tag: Option<String>,
}

/// Arguments for the outline command.
#[derive(Args)]
pub struct OutlineArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Output format: markdown or json
    #[arg(short, long, default_value = "markdown")]
    pub format: String,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity count.
pub fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,srcdoc=info".to_string(),
            2 => "info,srcdoc=debug".to_string(),
            _ => "debug,srcdoc=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is not an error worth reporting
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}

/// A resolved scan: the root used for display and the files under it.
struct Scan {
    root: PathBuf,
    files: Vec<PathBuf>,
}

/// Resolve `path` and collect the files to process.
fn scan(path: &Path, config: &Config) -> anyhow::Result<Scan> {
    let abs_path = path
        .canonicalize()
        .map_err(|e| anyhow::anyhow!("cannot access path {:?}: {}", path, e))?;

    if abs_path.is_dir() {
        let files = walk::collect_files(&abs_path, config)?;
        Ok(Scan {
            root: abs_path,
            files,
        })
    } else {
        let root = abs_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| abs_path.clone());
        Ok(Scan {
            root,
            files: vec![abs_path],
        })
    }
}

/// Load and validate the config, or print why not.
fn load_config(explicit: Option<&Path>) -> Option<Config> {
    let config = match Config::load(explicit) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return None;
        }
    };
    if let Err(e) = config::validate(&config) {
        eprintln!("{} invalid config: {:#}", "Error:".red().bold(), e);
        return None;
    }
    Some(config)
}

fn exit_code(batch: &BatchReport) -> i32 {
    if batch.errors.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILED
    }
}

fn print_errors(batch: &BatchReport) {
    for err in &batch.errors {
        eprintln!(
            "{} {}: {:#}",
            "failed".red().bold(),
            err.path.display(),
            err.error
        );
    }
}

/// Run the report command.
pub fn run_report(args: &ReportArgs) -> anyhow::Result<i32> {
    let Some(mut config) = load_config(args.scan.config.as_deref()) else {
        return Ok(EXIT_ERROR);
    };

    // Flags override the file
    if let Some(out) = &args.out {
        config.out_dir = out.clone();
    }
    if let Some(style) = &args.style {
        config.style = style.clone();
    }
    if let Some(tag) = &args.tag {
        config.tag = tag.clone();
    }
    if let Err(e) = config::validate(&config) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        return Ok(EXIT_ERROR);
    }
    if !report::style_names().iter().any(|s| s == &config.style) {
        eprintln!(
            "{} unknown style {:?}; run 'srcdoc styles' to list them",
            "Error:".red().bold(),
            config.style
        );
        return Ok(EXIT_ERROR);
    }

    let scan = match scan(&args.scan.path, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return Ok(EXIT_ERROR);
        }
    };

    if scan.files.is_empty() {
        eprintln!("{} no files to scan", "Warning:".yellow().bold());
        return Ok(EXIT_SUCCESS);
    }

    let grammars = Grammars::global();
    grammars.check()?;
    let batch = Runner::new(grammars, &scan.root, &config)
        .show_progress(true)
        .run(&scan.files);

    let title = scan
        .root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| scan.root.display().to_string());
    let options = ReportOptions {
        title,
        style: config.style.clone(),
        write_styles: config.write_styles,
    };
    let written = report::write_all(&config.out_dir, &batch, &options)?;

    print_errors(&batch);
    println!(
        "{} {} files ({} without a grammar, {} failed) into {}",
        "Reported".green().bold(),
        batch.files.len(),
        batch.skipped.len(),
        batch.errors.len(),
        config.out_dir.display()
    );
    for path in &written {
        println!("  {}", path.display());
    }

    Ok(exit_code(&batch))
}

/// Run the outline command.
pub fn run_outline(args: &OutlineArgs) -> anyhow::Result<i32> {
    if args.format != "markdown" && args.format != "json" {
        eprintln!(
            "{} invalid format {:?}, must be 'markdown' or 'json'",
            "Error:".red().bold(),
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let Some(config) = load_config(args.scan.config.as_deref()) else {
        return Ok(EXIT_ERROR);
    };

    let scan = match scan(&args.scan.path, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            return Ok(EXIT_ERROR);
        }
    };

    let grammars = Grammars::global();
    grammars.check()?;
    let batch = Runner::new(grammars, &scan.root, &config).run(&scan.files);
    let declarations = batch.declarations();

    match args.format.as_str() {
        "json" => println!("{}", outline_to_json(&declarations)?),
        _ => print!("{}", outline_to_markdown(&declarations)),
    }

    print_errors(&batch);
    Ok(exit_code(&batch))
}

/// Run the styles command.
pub fn run_styles() -> anyhow::Result<i32> {
    println!("Available styles:");
    println!();
    for name in report::style_names() {
        if name == report::DEFAULT_STYLE {
            println!("  {} {}", name, "(default)".dimmed());
        } else {
            println!("  {}", name);
        }
    }
    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_args() {
        let cli = Cli::try_parse_from([
            "srcdoc", "-vv", "report", "src", "--out", "docs", "--style", "InspiredGitHub",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.scan.path, PathBuf::from("src"));
                assert_eq!(args.out, Some(PathBuf::from("docs")));
                assert_eq!(args.style.as_deref(), Some("InspiredGitHub"));
                assert!(args.scan.config.is_none());
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_parse_outline_defaults() {
        let cli = Cli::try_parse_from(["srcdoc", "outline", "."]).unwrap();
        match cli.command {
            Commands::Outline(args) => assert_eq!(args.format, "markdown"),
            _ => panic!("expected outline command"),
        }
    }

    #[test]
    fn test_outline_rejects_unknown_format() {
        let args = OutlineArgs {
            scan: ScanArgs {
                path: PathBuf::from("."),
                config: None,
            },
            format: "xml".to_string(),
        };
        assert_eq!(run_outline(&args).unwrap(), EXIT_ERROR);
    }

    #[test]
    fn test_scan_single_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let file = temp.path().join("one.py");
        std::fs::write(&file, "def f():\n    pass\n").unwrap();

        let scan = scan(&file, &Config::default()).unwrap();
        assert_eq!(scan.files.len(), 1);
        assert_eq!(scan.root, temp.path().canonicalize().unwrap());
    }
}
