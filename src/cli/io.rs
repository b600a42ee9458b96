//! Input and output plumbing shared by the commands

use anyhow::{Context, Result};
use std::io::{IsTerminal, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Read the whole input: the given file, else stdin when it is piped.
///
/// An interactive stdin with no file yields empty text. Bytes that are not
/// valid UTF-8 become U+FFFD, which the cipher passes through unchanged.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("Input file can not be read: {}", path.display()))?,
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                debug!("stdin is a terminal, using empty input");
                return Ok(String::new());
            }
            let mut input = Vec::new();
            stdin
                .lock()
                .read_to_end(&mut input)
                .context("Failed to read stdin")?;
            input
        }
    };
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(
                "Input is not valid UTF-8 (first bad byte at {}), replacing invalid sequences",
                e.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

/// Write the result to the given file, else stdout. No newline is appended.
pub fn write_output(path: Option<&Path>, output: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("Error writing output: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
