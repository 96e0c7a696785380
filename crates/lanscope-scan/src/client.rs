//! HTTP client for the scan service

use std::time::Duration;

use url::Url;

use lanscope_core::prelude::*;
use lanscope_core::ScanResult;

/// Default per-request timeout.
///
/// The service runs a full ping sweep before answering, so this is generous;
/// without any deadline a hung service would leave the UI scanning forever.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the scan service's `GET /scan` endpoint.
///
/// Holds the resolved endpoint URL and a shared [`reqwest::Client`] so
/// repeated scans reuse connections.
#[derive(Debug, Clone)]
pub struct ScanClient {
    scan_url: Url,
    client: reqwest::Client,
}

impl ScanClient {
    /// Build a client for the given server base URL (e.g. `http://127.0.0.1:5050`).
    pub fn new(server: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(server).map_err(|_| Error::invalid_server_url(server))?;
        let scan_url = base
            .join("scan")
            .map_err(|_| Error::invalid_server_url(server))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::scan_request(e.to_string()))?;

        Ok(Self { scan_url, client })
    }

    /// The fully resolved scan endpoint URL.
    pub fn scan_url(&self) -> &Url {
        &self.scan_url
    }

    /// Run one scan and decode the response.
    ///
    /// Failure modes map onto distinct error variants:
    /// - transport problems (connect, timeout) → [`Error::ScanRequest`]
    /// - non-2xx responses → [`Error::ScanStatus`]
    /// - undecodable bodies → [`Error::ScanDecode`]
    pub async fn scan(&self) -> Result<ScanResult> {
        debug!("requesting scan from {}", self.scan_url);

        let response = self
            .client
            .get(self.scan_url.as_str())
            .send()
            .await
            .map_err(|e| Error::scan_request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("scan service answered HTTP {}", status);
            return Err(Error::scan_status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::scan_request(e.to_string()))?;

        let result = decode_scan_result(&body)?;
        info!(
            devices = result.devices.len(),
            scan_time = result.scan_time,
            "scan completed"
        );
        Ok(result)
    }
}

/// Decode a scan response body into a [`ScanResult`].
pub fn decode_scan_result(body: &[u8]) -> Result<ScanResult> {
    serde_json::from_slice(body).map_err(|e| Error::scan_decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanscope_core::Category;

    #[test]
    fn test_new_rejects_invalid_url() {
        let err = ScanClient::new("not a url", DEFAULT_TIMEOUT).unwrap_err();
        assert!(matches!(err, Error::InvalidServerUrl { .. }));
    }

    #[test]
    fn test_new_resolves_scan_endpoint() {
        let client = ScanClient::new("http://127.0.0.1:5050", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.scan_url().as_str(), "http://127.0.0.1:5050/scan");
    }

    #[test]
    fn test_decode_valid_body() {
        let body = br#"{
            "devices": [{"ip": "10.0.0.1", "mac": "aa:aa:aa:aa:aa:aa", "hostname": "gw", "category": "Router"}],
            "usage": {"bytes_sent": 10, "bytes_recv": 20},
            "scan_time": 1.5
        }"#;
        let result = decode_scan_result(body).unwrap();
        assert_eq!(result.devices.len(), 1);
        assert_eq!(result.devices[0].category, Category::Router);
    }

    #[test]
    fn test_decode_rejects_bad_body() {
        let err = decode_scan_result(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, Error::ScanDecode { .. }));
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let err = decode_scan_result(br#"{"devices": []}"#).unwrap_err();
        assert!(matches!(err, Error::ScanDecode { .. }));
    }
}
