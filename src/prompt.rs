use std::io::{BufRead, Write};

use crate::errors::{CgError, Result};

/// Text shown before reading the component name.
pub const PROMPT: &str = "Enter the component name: ";

/// Ask for a component name on `output` and read one line from `input`.
///
/// Returns the line without its terminator. End of input before any line is
/// an error.
pub fn prompt_component_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    let io_err = |source: std::io::Error| CgError::Prompt { source };
    output.write_all(PROMPT.as_bytes()).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_err)? == 0 {
        return Err(CgError::Prompt {
            source: std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "no input"),
        });
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}
