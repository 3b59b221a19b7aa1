use std::path::Path;

use anyhow::{Context, Result};

use crate::compare::compare_lines;
use crate::input::read_lines;
use crate::model::{FileInfo, LineSequence, Metadata, Report};

pub const TOOL_NAME: &str = concat!("linemap ", env!("CARGO_PKG_VERSION"));

/// One side of a comparison.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub name: String,
    pub path: String,
    pub lines: LineSequence,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self> {
        let lines = read_lines(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            path: path.display().to_string(),
            lines,
        })
    }
}

impl Report {
    pub fn build(first: &SourceFile, second: &SourceFile, generated_at: String) -> Self {
        let comparison = compare_lines(&first.lines, &second.lines);
        Report {
            metadata: Metadata {
                generated_at,
                tool: TOOL_NAME.to_string(),
            },
            files: [file_info(1, first), file_info(2, second)],
            comparison,
        }
    }
}

fn file_info(id: u8, file: &SourceFile) -> FileInfo {
    FileInfo {
        id,
        name: file.name.clone(),
        path: file.path.clone(),
        line_count: file.lines.len(),
    }
}

/// Reads both files and builds a report stamped with the current time.
pub fn generate(first: &Path, second: &Path) -> Result<Report> {
    let first = SourceFile::read(first).context("read first input")?;
    let second = SourceFile::read(second).context("read second input")?;
    Ok(Report::build(&first, &second, now_ts()?))
}

pub fn now_ts() -> Result<String> {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .context("format timestamp")
}

#[cfg(test)]
#[path = "tests/report_tests.rs"]
mod tests;
