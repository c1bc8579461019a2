//! CLI entry point for ramtree
//!
//! Parses a JSON document and dumps its in-memory object tree.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use ramtree::{DumpError, OutputConfig, SizeFormat, TreeFormatter, TreeWalker, print_json};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ramtree")]
#[command(about = "Show the shallow and retained memory of a JSON document's object tree")]
#[command(version)]
struct Args {
    /// JSON file to inspect (reads stdin when omitted or "-")
    file: Option<PathBuf>,

    /// Output the object tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Show sizes as 1.5K / 2.0M instead of exact bytes
    #[arg(short = 'H', long = "human")]
    human: bool,

    /// Render only N levels below the root (sizes still cover everything)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("RAMTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn run(args: &Args) -> Result<(), DumpError> {
    let input = read_input(args.file.as_deref())?;
    let document: Value = serde_json::from_str(&input)?;
    tracing::debug!(bytes = input.len(), "parsed document");

    let tree = TreeWalker::new().walk(&document)?;

    if args.json {
        return print_json(&tree);
    }

    let formatter = TreeFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
        size_format: if args.human {
            SizeFormat::Human
        } else {
            SizeFormat::Bytes
        },
        max_depth: args.level,
    });
    formatter.print(&tree)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging();

    if let Err(e) = run(&args) {
        eprintln!("ramtree: {}", e);
        process::exit(1);
    }
}
