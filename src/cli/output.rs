//! Shared CLI output helpers (respects NO_COLOR).
//!
//! Color scheme:
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints, links, identifiers
//! - Bold: table headers

use colored::Colorize;
use std::io::{self, Write as IoWrite};

/// Check if color output is disabled via the NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an in-progress action in the form `label... ` without a newline.
///
/// Finish the line with [`ok`] or [`error`].
pub fn action(msg: &str) {
    print!("{}", msg);
    let _ = io::stdout().flush();
}

/// Finish an action line with a green OK.
pub fn ok(msg: &str) {
    if msg.is_empty() {
        println!("{}", if colors_enabled() { "OK".green().to_string() } else { "OK".to_string() });
    } else if colors_enabled() {
        println!("{} {}", "OK".green(), msg);
    } else {
        println!("OK {}", msg);
    }
}

/// Print a success message with checkmark (green).
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "✓".green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", "✗".red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "⚠".yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
pub fn hint(msg: &str) {
    if colors_enabled() {
        println!("{} {}", "→".cyan(), msg.cyan());
    } else {
        println!("→ {}", msg);
    }
}

/// Print a section label (bold).
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", title.bold());
    } else {
        println!("{}", title);
    }
}

/// Format an identifier or link in cyan for inline use.
pub fn link(text: &str) -> String {
    if colors_enabled() {
        text.cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Print a column-aligned table with a bold header row.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    if colors_enabled() {
        println!("{}", header_line.bold());
    } else {
        println!("{}", header_line);
    }

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Print rows as tab-separated values, header first.
pub fn print_tsv(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", headers.join("\t"));
    for row in rows {
        println!("{}", row.join("\t"));
    }
}
