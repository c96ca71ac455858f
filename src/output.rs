//! Terminal output formatting for casegen.
//!
//! Consistent colored output for all CLI operations: simple message helpers,
//! issue display for `fetch`, and aligned-table rendering for `testdata`.

use crate::jira::Issue;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Print an error message.
pub fn print_error(msg: &str) {
    println!("{RED}{BOLD}Error:{RESET} {}", msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    println!("{YELLOW}Warning:{RESET} {}", msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{CYAN}Info:{RESET} {}", msg);
}

/// Print a fetched issue as labeled sections.
pub fn print_issue(issue: &Issue) {
    println!("{BOLD}{CYAN}Summary{RESET}");
    println!("{}", issue.summary);
    println!();
    println!("{BOLD}{CYAN}Description{RESET}");
    if issue.description.is_empty() {
        println!("{DIM}(empty){RESET}");
    } else {
        println!("{}", issue.description);
    }
    println!();
    println!("{BOLD}{CYAN}Acceptance criteria{RESET}");
    match issue.acceptance_criteria.as_deref() {
        Some(criteria) if !criteria.is_empty() => println!("{}", criteria),
        _ => println!("{DIM}(none found){RESET}"),
    }
}

/// Render rows as a plain-text table with padded columns.
///
/// Multi-line cells are not expected here; values come from the generator,
/// which produces single-line strings.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&render_row(headers));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

/// Print a generated data table with a bold header row.
pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    let rendered = render_table(headers, rows);
    let mut lines = rendered.lines();
    if let Some(header) = lines.next() {
        println!("{BOLD}{}{RESET}", header);
    }
    for line in lines {
        println!("{}", line);
    }
}
