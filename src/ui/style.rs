use console::style;
use std::fmt::Display;

/// White bold — headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Green bold — the assistant speaker label
pub fn bot<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Cyan bold — quick-action ids, accents
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Dim — hints, metadata lines, secondary text
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Yellow — warnings, rejected input
pub fn warn<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}
