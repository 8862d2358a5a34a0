// Rust guideline compliant 2026-10-15

//! Line-based interactive picker used when a search is ambiguous.

use crate::OutputFormatter;
use ofp_core::{parse_selection, InvalidSelection, Participant, Picker, Selection};
use std::io::{BufRead, Write};

/// Prompt shown before each answer is read.
pub const PROMPT: &str = "Select an organization (number) or 'q' to quit: ";

/// Asks the user to choose among candidates on a line-oriented terminal.
///
/// Invalid answers are reported and the prompt is repeated. End of input
/// counts as a cancellation.
pub struct TerminalPicker<'f, R, W> {
    input: R,
    output: W,
    formatter: &'f dyn OutputFormatter,
}

impl<'f, R: BufRead, W: Write> TerminalPicker<'f, R, W> {
    /// Creates a picker reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W, formatter: &'f dyn OutputFormatter) -> Self {
        Self {
            input,
            output,
            formatter,
        }
    }
}

impl<R: BufRead, W: Write> Picker for TerminalPicker<'_, R, W> {
    fn pick(&mut self, candidates: &[&Participant]) -> ofp_core::Result<Selection> {
        writeln!(self.output, "\nFound the following matches:")?;
        writeln!(self.output, "{}", self.formatter.format_candidates(candidates))?;

        loop {
            write!(self.output, "\n{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(Selection::Cancel);
            }

            match parse_selection(&line, candidates.len()) {
                Ok(selection) => return Ok(selection),
                Err(InvalidSelection::OutOfRange { .. }) => {
                    writeln!(self.output, "Invalid selection. Please try again.")?;
                }
                Err(InvalidSelection::NotANumber(_)) => {
                    writeln!(self.output, "Please enter a valid number or 'q' to quit.")?;
                }
            }
        }
    }
}
