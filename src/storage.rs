use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result, anyhow};

use crate::model::Report;
use crate::naming::{output_file_name, sanitize_upload_name, validate_report_name};
use crate::report::generate;
use crate::xml::encode_report;

const UPLOADS_DIR: &str = "uploads";
const OUTPUTS_DIR: &str = "outputs";

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Upload and report directories under one data root.
#[derive(Clone, Debug)]
pub struct Storage {
    upload_dir: PathBuf,
    output_dir: PathBuf,
}

/// A report written to the output directory.
#[derive(Clone, Debug)]
pub struct Generated {
    pub file_name: String,
    pub path: PathBuf,
    pub report: Report,
}

impl Storage {
    pub fn open(data_dir: &Path) -> Result<Self> {
        Self::with_dirs(data_dir.join(UPLOADS_DIR), data_dir.join(OUTPUTS_DIR))
    }

    pub fn with_dirs(upload_dir: PathBuf, output_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&upload_dir)
            .with_context(|| format!("create upload dir {}", upload_dir.display()))?;
        fs::create_dir_all(&output_dir)
            .with_context(|| format!("create output dir {}", output_dir.display()))?;
        Ok(Self {
            upload_dir,
            output_dir,
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Stores an upload under its slot (1 or 2) so equal names do not collide.
    pub fn save_upload(&self, slot: u8, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let name = sanitize_upload_name(name)?;
        let path = self.upload_dir.join(slot.to_string()).join(name);
        write_atomic(&path, bytes).with_context(|| format!("save upload {}", path.display()))?;
        Ok(path)
    }

    pub fn report_path(&self, name: &str) -> Result<PathBuf> {
        validate_report_name(name)?;
        Ok(self.output_dir.join(name))
    }

    /// Returns `None` when no report with that name exists.
    pub fn read_report(&self, name: &str) -> Result<Option<String>> {
        let path = self.report_path(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        let text =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        Ok(Some(text))
    }

    pub fn write_report(&self, name: &str, xml: &str) -> Result<PathBuf> {
        let path = self.report_path(name)?;
        write_atomic(&path, xml.as_bytes())
            .with_context(|| format!("write report {}", path.display()))?;
        Ok(path)
    }

    /// Compares two files and writes the XML report named after the first one.
    pub fn process(&self, first: &Path, second: &Path) -> Result<Generated> {
        let report = generate(first, second)?;
        let first_name = report.source_file().name.clone();
        let file_name = output_file_name(&first_name);
        let xml = encode_report(&report);
        let path = self.write_report(&file_name, &xml)?;
        Ok(Generated {
            file_name,
            path,
            report,
        })
    }
}

pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow!("{} has no parent directory", path.display()))?;
    fs::create_dir_all(parent).context("create parent directories")?;
    let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let tmp = path.with_extension(format!("tmp.{}.{}", std::process::id(), seq));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/storage_tests.rs"]
mod tests;
