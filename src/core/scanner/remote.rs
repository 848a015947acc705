// src/core/scanner/remote.rs

use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::models::ScanRequest;
use crate::core::scanner::Scanner;
use crate::error::ScannerError;

pub const DEFAULT_SCANNER_URL: &str = "http://localhost:57001";
const SCAN_ENDPOINT: &str = "api/v1/scan";

/// Scanner reached over HTTP.
///
/// The request is POSTed as JSON and the response body is returned as-is,
/// whatever the status code: a scanner that could not reach the target answers
/// with an `{"error": ...}` document, which is a result, not a transport error.
#[derive(Debug, Clone)]
pub struct RemoteScanner {
    client: reqwest::Client,
    endpoint: Url,
}

impl RemoteScanner {
    pub fn new(base_url: &str) -> Result<Self, ScannerError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("observatory-scan/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Self::with_client(client, base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ScannerError> {
        let mut base = Url::parse(base_url)?;
        // Without a trailing slash `join` would replace the last path segment.
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let endpoint = base.join(SCAN_ENDPOINT)?;
        debug!(%endpoint, "Remote scanner configured.");
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Scanner for RemoteScanner {
    async fn scan(&self, request: &ScanRequest) -> Result<Value, ScannerError> {
        info!(endpoint = %self.endpoint, hostname = %request.hostname, "Sending scan request.");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Scanner answered with a non-success status.");
        }

        let body = response.bytes().await?;
        let document = serde_json::from_slice(&body)?;
        debug!(%status, bytes = body.len(), "Received scanner document.");
        Ok(document)
    }
}
