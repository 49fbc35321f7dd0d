//! Command-line interface for the ontodoc utility
//!
//! Generates Markdown documentation from OntoUML JSON exports and cleans
//! modelling-tool droppings out of a project tree.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::colorizer::{Painter, Tone};
use ontodoc::cleanup::{self, CleanupRules, CleanupScanner};
use ontodoc::core::logging::init_logging;
use ontodoc::markdown::{Orchestrator, RenderConfig};

/// Ontodoc - Markdown documentation from OntoUML exports
#[derive(Parser)]
#[command(name = "ontodoc")]
#[command(about = "Generate Markdown documentation from OntoUML JSON exports")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Markdown documentation from an OntoUML JSON export
    Generate {
        /// Path to the OntoUML JSON file
        input: PathBuf,

        /// Path to write the Markdown output file (use - for stdout)
        output: PathBuf,

        /// Optional folder containing images to include in the documentation
        images_dir: Option<PathBuf>,

        /// Prefix for image links in the output (defaults to the images folder)
        #[arg(long)]
        link_base: Option<PathBuf>,
    },

    /// Delete backup, lock, log and temporary files below a directory
    Clean {
        /// Directory to scan (defaults to the current directory)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Delete without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// List matching files without deleting anything
        #[arg(long, conflicts_with = "yes")]
        dry_run: bool,

        /// Filename pattern to delete instead of the defaults (repeatable)
        #[arg(long = "pattern", value_name = "GLOB")]
        patterns: Vec<String>,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if output is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    fn painter(self) -> Painter {
        match self {
            ColorChoice::Auto => Painter::detect(),
            ColorChoice::Always => Painter::new(true),
            ColorChoice::Never => Painter::new(false),
        }
    }
}

/// Main CLI application
#[derive(Default)]
pub struct OntodocApp;

impl OntodocApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("ONTODOC_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var("ONTODOC_LOG_FORMAT")
            .ok()
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Ontodoc v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Generate {
                input,
                output,
                images_dir,
                link_base,
            } => self.generate_command(input, output, images_dir, link_base, cli.verbose),
            Commands::Clean {
                root,
                yes,
                dry_run,
                patterns,
                color,
            } => {
                let root = match root {
                    Some(root) => root,
                    None => std::env::current_dir()?,
                };
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let stdout = io::stdout();
                let mut out = stdout.lock();
                self.clean_command(
                    &root,
                    CleanOptions {
                        yes,
                        dry_run,
                        patterns,
                        painter: color.painter(),
                    },
                    &mut input,
                    &mut out,
                )
            }
        }
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        input: PathBuf,
        output: PathBuf,
        images_dir: Option<PathBuf>,
        link_base: Option<PathBuf>,
        verbose: bool,
    ) -> Result<()> {
        if let Some(dir) = images_dir.as_deref().filter(|dir| !dir.is_dir()) {
            warn!(images_dir = %dir.display(), "Images folder not found, no images will be embedded");
        }

        let config = Self::build_config(images_dir, link_base);
        let orchestrator = Orchestrator::new(config);

        if is_stdout(&output) {
            let markdown = orchestrator.generate(&input)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(markdown.as_bytes())?;
            stdout.flush()?;
            return Ok(());
        }

        let report = orchestrator.generate_to_file(&input, &output)?;
        if verbose {
            eprintln!("Wrote {} bytes", report.bytes_written);
        }
        println!("Documentation written to: {}", output.display());
        Ok(())
    }

    fn build_config(images_dir: Option<PathBuf>, link_base: Option<PathBuf>) -> RenderConfig {
        let mut config = RenderConfig::new();
        if let Some(dir) = images_dir {
            config = config.with_images_dir(dir);
        }
        if let Some(base) = link_base {
            config = config.with_link_base(base);
        }
        config
    }

    /// Handle the clean command
    pub fn clean_command<R: io::BufRead, W: Write>(
        &self,
        root: &Path,
        options: CleanOptions,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        let painter = options.painter;
        let rules = if options.patterns.is_empty() {
            CleanupRules::default()
        } else {
            CleanupRules::with_patterns(&options.patterns)?
        };
        debug!(patterns = ?rules.patterns().collect::<Vec<_>>(), "Cleanup rules");

        let candidates = CleanupScanner::new(root).with_rules(rules).scan()?;

        if candidates.is_empty() {
            writeln!(out, "No files matched the deletion criteria.")?;
            return Ok(());
        }

        writeln!(out, "The following files will be deleted:\n")?;
        for path in &candidates {
            writeln!(out, "{}", painter.paint(&path.display().to_string(), Tone::Candidate))?;
        }
        writeln!(
            out,
            "\n{}",
            painter.paint(
                &format!("Total files that would be deleted: {}", candidates.len()),
                Tone::Summary
            )
        )?;

        if options.dry_run {
            debug!("Dry run, nothing deleted");
            return Ok(());
        }

        let confirmed = options.yes || cleanup::confirm(input, out)?;
        if !confirmed {
            writeln!(out, "\nDeletion cancelled.")?;
            return Ok(());
        }

        let report = cleanup::delete_files(&candidates);
        for path in &report.deleted {
            let line = format!("Deleted: {}", path.display());
            writeln!(out, "{}", painter.paint(&line, Tone::Deleted))?;
        }
        for (path, error) in &report.failed {
            let line = format!("Error deleting {}: {}", path.display(), error);
            writeln!(out, "{}", painter.paint(&line, Tone::Failed))?;
        }
        writeln!(
            out,
            "\n{}",
            painter.paint(
                &format!("Total files deleted: {}", report.deleted_count()),
                Tone::Summary
            )
        )?;
        Ok(())
    }
}

/// Options for the clean command
#[derive(Clone, Debug)]
pub struct CleanOptions {
    pub yes: bool,
    pub dry_run: bool,
    /// Replaces the default patterns when non-empty
    pub patterns: Vec<String>,
    pub painter: Painter,
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}
