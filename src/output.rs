//! Summary formatting and display

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::walk::CountSummary;

/// Print the count summary to stdout with optional color.
pub fn print_summary(summary: &CountSummary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    write!(stdout, "Found ")?;
    stdout.set_color(&bold)?;
    write!(stdout, "{}", summary.matched)?;
    stdout.reset()?;
    writeln!(stdout, " \"{}\" files", summary.suffix)?;

    let mut detail = ColorSpec::new();
    detail.set_fg(Some(Color::Cyan));
    stdout.set_color(&detail)?;
    writeln!(
        stdout,
        "  {} files, {} directories scanned",
        summary.files, summary.directories
    )?;
    stdout.reset()?;

    Ok(())
}

/// Print the count summary as pretty-printed JSON.
pub fn print_summary_json(summary: &CountSummary) -> io::Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
