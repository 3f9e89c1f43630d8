//! Liveness/readiness probes for the order API, plus the authenticated
//! vendor-license probe.

use crate::error::Result;
use crate::status::excerpt;
use reqwest::{Client, StatusCode};
use std::time::Duration;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of a single probe. Transport failures are fatal for the health
/// command and propagate as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    Ok,
    Fail(String),
}

impl Probe {
    pub fn is_ok(&self) -> bool {
        matches!(self, Probe::Ok)
    }
}

pub struct HealthChecker {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl HealthChecker {
    pub fn new(base_url: &str, auth_token: Option<String>) -> Result<Self> {
        let client = Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token,
        })
    }

    /// GET `{base}/healthz`.
    pub async fn check_health(&self) -> Result<Probe> {
        self.probe(&format!("{}/healthz", self.base_url), false).await
    }

    /// GET `{base}/readyz`.
    pub async fn check_ready(&self) -> Result<Probe> {
        self.probe(&format!("{}/readyz", self.base_url), false).await
    }

    /// GET `{base}/api/flour/vendors/license/{id}/` with the bearer token.
    pub async fn check_vendor_license(&self, license_id: &str) -> Result<Probe> {
        let url = format!(
            "{}/api/flour/vendors/license/{}/",
            self.base_url, license_id
        );
        let response = self.get(&url, true).await?;
        let status = response.status();
        let probe = match status {
            StatusCode::OK => Probe::Ok,
            StatusCode::UNAUTHORIZED => Probe::Fail("Unauthorized".to_string()),
            StatusCode::NOT_FOUND => Probe::Fail("Not Found".to_string()),
            _ => {
                let body = response.text().await.unwrap_or_default();
                Probe::Fail(format!("{} {}", status.as_u16(), excerpt(&body)))
            }
        };
        Ok(probe)
    }

    async fn probe(&self, url: &str, authed: bool) -> Result<Probe> {
        let response = self.get(url, authed).await?;
        let status = response.status();
        if status == StatusCode::OK {
            return Ok(Probe::Ok);
        }
        let body = response.text().await.unwrap_or_default();
        Ok(Probe::Fail(format!("{} {}", status.as_u16(), excerpt(&body))))
    }

    async fn get(&self, url: &str, authed: bool) -> Result<reqwest::Response> {
        let mut request = self.client.get(url);
        if authed {
            if let Some(token) = &self.auth_token {
                request = request.bearer_auth(token);
            }
        }
        Ok(request.send().await?)
    }
}
