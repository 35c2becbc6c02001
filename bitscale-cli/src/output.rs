//! Terminal output helpers.
//!
//! Styling is applied through `console`, which drops colors automatically
//! when stdout is not a terminal.

use std::fmt::Display;

use console::style;
use serde_json::Value;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);
    println!("{}", style(&line).blue());
    println!("{}", style(format!(" {text} ")).bold().white());
    println!("{}", style(&line).blue());
}

/// Print a section heading (smaller than main heading)
pub fn print_section(text: &str) {
    println!();
    println!("{}", style(format!(" {text} ")).bold());
    println!("{}", style("-".repeat(40)).blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{:<22} {}", style(format!("{label}:")).cyan(), value);
}

/// Print a success line
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green(), text);
}

/// Print a warning line
pub fn print_warning(text: &str) {
    println!("{} {}", style("[WARN]").yellow(), text);
}

/// Print a JSON value on stdout, pretty-printed
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{value}"),
    }
}
