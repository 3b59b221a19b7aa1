use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub struct ServerGuard {
    pub base_url: String,
    pub data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub fn spawn_server() -> Result<ServerGuard> {
    let data_dir = tempfile::tempdir().context("create server tempdir")?;
    let addr_file = data_dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_linemap-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--data-dir",
            data_dir.path().to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn linemap-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        data_dir,
        child,
    })
}

/// Polls `check` until it yields a value or five seconds pass.
fn wait_for<T>(what: &str, mut check: impl FnMut() -> Option<T>) -> Result<T> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(v) = check() {
            return Ok(v);
        }
        thread::sleep(Duration::from_millis(20));
    }
    anyhow::bail!("timed out waiting for {}", what)
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    wait_for(&format!("addr file {}", addr_file.display()), || {
        let s = std::fs::read_to_string(addr_file).ok()?;
        let addr = s.trim();
        (!addr.is_empty()).then(|| format!("http://{}", addr))
    })
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    wait_for(&format!("{}/healthz", base_url), || {
        let resp = client.get(format!("{}/healthz", base_url)).send().ok()?;
        resp.status().is_success().then_some(())
    })
}

#[allow(dead_code)]
pub fn text_part(name: &str, body: &str) -> reqwest::blocking::multipart::Part {
    reqwest::blocking::multipart::Part::text(body.to_string()).file_name(name.to_string())
}
