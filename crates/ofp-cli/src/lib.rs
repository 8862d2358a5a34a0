// Rust guideline compliant 2026-10-15

//! ofp CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod picker;
pub mod terminal;

pub use output::{create_formatter, JsonFormatter, OutputFormatter, TableFormatter};
pub use picker::TerminalPicker;
pub use terminal::{get_terminal_width, should_use_color, wrap_text};
