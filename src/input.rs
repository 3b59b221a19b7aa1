use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::LineSequence;

/// Reads a UTF-8 text file into its lines.
pub fn read_lines(path: &Path) -> Result<LineSequence> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8 text", path.display()))?;
    Ok(split_lines(&text))
}

/// Splits on `\r\n`, `\n` or a lone `\r`; a final line break does not start
/// an extra line.
pub fn split_lines(text: &str) -> LineSequence {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let brk = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + brk..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
