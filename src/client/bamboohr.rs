//! HTTP client for the BambooHR "who's out" endpoint.
//!
//! Calls `GET {base}/{subdomain}/v1/time_off/whos_out/?start=..&end=..` with
//! HTTP Basic auth (API key as the username, any password).

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, error, info};

use crate::config::BambooHrConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::LeaveEntry;

use super::TimeOffSource;

/// Request timeout for a single API call.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

const BASIC_AUTH_PASSWORD: &str = "x";

/// BambooHR time off API client.
#[derive(Clone)]
pub struct BambooHrClient {
    http: Client,
    base_url: String,
    subdomain: String,
    api_key: String,
}

impl std::fmt::Debug for BambooHrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BambooHrClient")
            .field("base_url", &self.base_url)
            .field("subdomain", &self.subdomain)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl BambooHrClient {
    /// Builds a client from the environment configuration.
    ///
    /// # Errors
    ///
    /// Returns `Request` if the underlying HTTP client cannot be built.
    pub fn new(config: &BambooHrConfig) -> ReportResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().trim_end_matches('/').to_string(),
            subdomain: config.subdomain.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Builds the authenticated "who's out" request without sending it.
    pub fn whos_out_request(&self, start: NaiveDate, finish: NaiveDate) -> RequestBuilder {
        let url = format!(
            "{}/{}/v1/time_off/whos_out/",
            self.base_url, self.subdomain
        );
        self.http
            .get(url)
            .query(&[("start", start.to_string()), ("end", finish.to_string())])
            .header(ACCEPT, "application/json")
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD))
    }
}

#[async_trait]
impl TimeOffSource for BambooHrClient {
    async fn whos_out(&self, start: NaiveDate, finish: NaiveDate) -> ReportResult<Vec<LeaveEntry>> {
        debug!(%start, %finish, subdomain = %self.subdomain, "Requesting who's out");

        let response = self.whos_out_request(start, finish).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = %status, %start, %finish, "Who's out request failed");
            return Err(ReportError::UpstreamStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let entries = parse_whos_out(&body)?;
        info!(%start, %finish, entries = entries.len(), "Fetched leave");
        Ok(entries)
    }
}

/// Parses a "who's out" response body.
///
/// # Example
///
/// ```
/// use workday_report::client::parse_whos_out;
///
/// let body = r#"[
///     {"id": 1, "type": "timeOff", "employeeId": 3, "name": "Bob", "start": "2024-01-02", "end": "2024-01-03"},
///     {"id": 2, "type": "holiday", "name": "New Year's Day", "start": "2024-01-01", "end": "2024-01-01"}
/// ]"#;
///
/// let entries = parse_whos_out(body).unwrap();
/// assert_eq!(entries.len(), 2);
/// assert!(entries[1].is_holiday());
/// ```
///
/// # Errors
///
/// Returns `UpstreamPayload` if the body is not a JSON array of entries.
pub fn parse_whos_out(body: &str) -> ReportResult<Vec<LeaveEntry>> {
    serde_json::from_str(body).map_err(|e| ReportError::UpstreamPayload {
        message: e.to_string(),
    })
}
