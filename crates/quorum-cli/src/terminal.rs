// Rust guideline compliant 2026-10-16

//! Terminal UI utilities for the Quorum CLI.
//!
//! Color support, terminal width detection and status lines on stderr.

use std::env;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Gets the terminal width in columns, or 80 if it cannot be determined.
pub fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Wraps text to `width` columns, indenting continuation lines by `indent`.
///
/// Existing line breaks are preserved. Words longer than the available
/// width are left intact.
pub fn wrap_to(text: &str, width: usize, indent: usize) -> String {
    let available_width = width.saturating_sub(indent);
    if available_width < 10 {
        return text.to_string();
    }

    let indent_str = " ".repeat(indent);
    let mut result = String::new();

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            result.push('\n');
            result.push_str(&indent_str);
        }

        if line.chars().count() <= available_width {
            result.push_str(line);
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            if current_line.is_empty() {
                current_line.push_str(word);
            } else if current_line.chars().count() + 1 + word.chars().count() <= available_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push_str(&current_line);
                result.push('\n');
                result.push_str(&indent_str);
                current_line = word.to_string();
            }
        }
        result.push_str(&current_line);
    }

    result
}

/// Wraps text to the terminal width.
pub fn wrap_text(text: &str, indent: usize) -> String {
    wrap_to(text, get_terminal_width(), indent)
}

/// Prints a status message with a colored prefix to stderr.
pub fn print_status(prefix: &str, prefix_color: Color, message: &str, use_color: bool) {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(prefix_color)).set_bold(true));
    let _ = write!(stderr, "{}: ", prefix);
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{}", message);
}

/// Prints an error message.
pub fn print_error(message: &str, use_color: bool) {
    print_status("error", Color::Red, message, use_color);
}
