use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::naming::validate_report_name;
use crate::storage::write_atomic;

mod http_client;
use self::http_client::with_retries;

mod types;
pub use self::types::*;

/// Blocking client for a running `linemap-server`.
pub struct RemoteClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("linemap")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Uploads two files for comparison.
    pub fn compare(&self, first: &Path, second: &Path) -> Result<CompareResponse> {
        let first_part = file_part(first)?;
        let second_part = file_part(second)?;

        let resp = with_retries("POST /compare", || {
            let form = reqwest::blocking::multipart::Form::new()
                .part("file", first_part.to_part())
                .part("file", second_part.to_part());
            self.client
                .post(self.url("/compare"))
                .multipart(form)
                .send()
        })?;
        let resp = self.ensure_ok(resp, "compare")?;
        resp.json::<CompareResponse>()
            .context("parse compare response")
    }

    pub fn download(&self, report_name: &str) -> Result<String> {
        validate_report_name(report_name)?;
        let path = format!("/download/{}", report_name);
        let resp = with_retries(&format!("GET {}", path), || {
            self.client.get(self.url(&path)).send()
        })?;
        let resp = self.ensure_ok(resp, "download")?;
        resp.text().context("read report body")
    }

    /// Compares, then stores the generated report in `out_dir`.
    pub fn submit(&self, first: &Path, second: &Path, out_dir: &Path) -> Result<Submitted> {
        let response = self.compare(first, second)?;
        let report_name = response
            .output_file
            .clone()
            .ok_or_else(|| anyhow::anyhow!("server did not name an output file"))?;
        let xml = self.download(&report_name)?;
        let path = out_dir.join(&report_name);
        write_atomic(&path, xml.as_bytes())
            .with_context(|| format!("write {}", path.display()))?;
        Ok(Submitted { response, path })
    }
}

#[derive(Debug)]
pub struct Submitted {
    pub response: CompareResponse,
    pub path: PathBuf,
}

struct FilePart {
    name: String,
    bytes: Vec<u8>,
}

impl FilePart {
    fn to_part(&self) -> reqwest::blocking::multipart::Part {
        reqwest::blocking::multipart::Part::bytes(self.bytes.clone()).file_name(self.name.clone())
    }
}

fn file_part(path: &Path) -> Result<FilePart> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("{} has no file name", path.display()))?;
    Ok(FilePart { name, bytes })
}
