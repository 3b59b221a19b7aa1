use std::path::Path;

use anyhow::{Result, anyhow};

pub const REPORT_EXTENSION: &str = "xml";

/// Derives the report file name from the first input's name.
///
/// `report12.txt` becomes `report.xml`; a stem made only of digits is kept
/// (`42.txt` becomes `42.xml`).
pub fn output_file_name(input_name: &str) -> String {
    let stem = Path::new(input_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_name.to_string());

    let trimmed = stem.trim_end_matches(|c: char| c.is_ascii_digit());
    let base = if trimmed.is_empty() {
        stem.as_str()
    } else {
        trimmed
    };
    // Quotes would break the Content-Disposition header on download.
    format!("{}.{}", base.replace('"', "_"), REPORT_EXTENSION)
}

/// Reduces a client-supplied upload name to a bare file name.
pub fn sanitize_upload_name(name: &str) -> Result<String> {
    // Browsers on Windows may send full paths.
    let last = name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if last.is_empty() {
        return Err(anyhow!("file name cannot be empty"));
    }
    if last == "." || last == ".." {
        return Err(anyhow!("invalid file name {:?}", name));
    }
    if last.chars().any(char::is_control) {
        return Err(anyhow!("file name contains control characters"));
    }
    Ok(last.to_string())
}

pub fn validate_report_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(anyhow!("report name cannot be empty"));
    }
    if name.contains(['/', '\\', '"']) || name.chars().any(char::is_control) {
        return Err(anyhow!("report name must be a plain file name"));
    }
    let ext = Path::new(name).extension().and_then(|e| e.to_str());
    if ext != Some(REPORT_EXTENSION) {
        return Err(anyhow!("report name must end in .{}", REPORT_EXTENSION));
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/naming_tests.rs"]
mod tests;
