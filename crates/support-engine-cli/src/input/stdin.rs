use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Piped JSON on stdin, deserialised like an `--input` file.
///
/// `None` when stdin is a terminal or the pipe is empty, so callers can fall
/// back to flags.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| format!("Failed to read piped input: {}", e))?;
    parse_piped(&buffer)
}

fn parse_piped<T: DeserializeOwned>(buffer: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse piped input as JSON: {}", e))?;
    tracing::debug!(bytes = trimmed.len(), "read input from stdin");
    Ok(Some(value))
}
