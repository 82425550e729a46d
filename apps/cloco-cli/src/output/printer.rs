//! Terminal output helpers for consistent CLI formatting

use crate::config::Configuration;
use std::io::{self, IsTerminal};

/// Color is used only on a terminal and only while `NO_COLOR` is unset
fn color_allowed(no_color: bool, is_terminal: bool) -> bool {
    !no_color && is_terminal
}

/// Check if color output is enabled for the given stream
fn use_color(stream: &impl IsTerminal) -> bool {
    color_allowed(std::env::var_os("NO_COLOR").is_some(), stream.is_terminal())
}

fn paint(enabled: bool, code: &str, text: &str) -> String {
    if enabled {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Print a success message (green checkmark)
pub fn print_success(message: &str) {
    if use_color(&io::stdout()) {
        println!("\x1b[32m✓\x1b[0m {}", message);
    } else {
        println!("OK: {}", message);
    }
}

/// Print a warning message (yellow)
pub fn print_warning(message: &str) {
    let label = paint(use_color(&io::stderr()), "33", "Warning:");
    eprintln!("{label} {message}");
}

/// Print a status message (yellow)
pub fn print_info(message: &str) {
    println!("{}", paint(use_color(&io::stdout()), "33", message));
}

/// Print a response body returned by the API (green)
pub fn print_body(body: &str) {
    println!("{}", paint(use_color(&io::stdout()), "32", body));
}

/// Print the configuration the way it is laid out on disk
pub fn print_config(config: &Configuration) {
    let color = use_color(&io::stdout());
    println!("Current configuration:");
    println!();
    for (section, entries) in config.sections() {
        println!("[{section}]");
        for (key, value) in entries {
            println!("{}", paint(color, "36", &format!("{key} = {value}")));
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_allowed() {
        assert!(color_allowed(false, true));
        assert!(!color_allowed(true, true));
        assert!(!color_allowed(false, false));
    }

    #[test]
    fn test_paint() {
        assert_eq!(paint(false, "32", "plain"), "plain");
        assert_eq!(paint(true, "32", "ok"), "\x1b[32mok\x1b[0m");
    }
}
