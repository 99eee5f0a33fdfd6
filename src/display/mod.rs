//! Terminal display module
//!
//! Prints the Markdown reports with rich styling when the terminal allows it.

mod formatter;
mod terminal;

pub use formatter::print_markdown;
