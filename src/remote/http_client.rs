use super::*;

/// Sends a request, retrying only when the connection could not be made.
///
/// Any other failure is returned at once: a request that reached the server
/// is not repeated, since `POST /compare` writes a report.
pub(super) fn with_retries(
    label: &str,
    mut send: impl FnMut() -> reqwest::Result<reqwest::blocking::Response>,
) -> Result<reqwest::blocking::Response> {
    const ATTEMPTS: u32 = 3;
    let mut attempt = 0;
    loop {
        match send() {
            Ok(resp) => return Ok(resp),
            Err(err) if err.is_connect() && attempt + 1 < ATTEMPTS => {
                std::thread::sleep(std::time::Duration::from_millis(100 << attempt));
                attempt += 1;
            }
            Err(err) => return Err(anyhow::Error::new(err).context(label.to_string())),
        }
    }
}

impl RemoteClient {
    /// Turns an error status into an error carrying the server's message.
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        let message = serde_json::from_str::<CompareResponse>(&body)
            .map(|r| r.message)
            .unwrap_or(body);
        anyhow::bail!("{} failed ({}): {}", label, status, message)
    }

    pub(super) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
#[path = "../tests/remote/http_client_tests.rs"]
mod tests;
