use crate::error::{InstallerError, Result};
use crate::project_identity;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Source of artifact bytes.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch(url)
    }
}

/// One blocking GET per artifact. No retries and no mirror fallback.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(project_identity::user_agent())
            .build()
            .map_err(|e| InstallerError::Download(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| InstallerError::Download(format!("{}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(InstallerError::Download(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        let body = response
            .bytes()
            .map_err(|e| InstallerError::Download(format!("{}: {}", url, e)))?;
        Ok(body.to_vec())
    }
}
