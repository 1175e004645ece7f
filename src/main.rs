//! CLI entry point for fcount

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use fcount::{TreeCounter, WalkConfig, print_summary, print_summary_json};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fcount")]
#[command(about = "Counts files whose name ends in a given extension, recursively")]
#[command(version)]
struct Args {
    /// Directory to search
    #[arg(default_value = ".")]
    path: PathBuf,

    /// File name suffix to count (leading dot optional)
    #[arg(
        short = 'e',
        long = "ext",
        value_name = "SUFFIX",
        default_value = ".exe"
    )]
    ext: String,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        let reason = if root.exists() {
            "Not a directory"
        } else {
            "No such file or directory"
        };
        eprintln!("fcount: cannot access '{}': {}", args.path.display(), reason);
        process::exit(1);
    }

    let counter = TreeCounter::new(WalkConfig {
        suffix: args.ext.clone(),
    });
    let summary = match counter.count(&root) {
        Some(s) => s,
        None => {
            eprintln!(
                "fcount: cannot access '{}': No such file or directory",
                args.path.display()
            );
            process::exit(1);
        }
    };

    let result = if args.json {
        print_summary_json(&summary)
    } else {
        print_summary(&summary, should_use_color(args.color))
    };

    if let Err(e) = result {
        eprintln!("fcount: error writing output: {}", e);
        process::exit(1);
    }
}
