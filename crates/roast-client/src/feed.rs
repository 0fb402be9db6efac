use std::time::Duration;

use reqwest::Client;
use roast_core::error::AppError;
use roast_core::feed::{Cursor, FeedResponse};
use roast_core::traits::FeedSource;

const DEFAULT_BASE_URL: &str = "https://api.bilibili.com/x/polymer/web-dynamic/v1/feed/space";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// The upstream endpoint rejects requests that don't look like a logged-in
// desktop browser, so the header set is fixed.
const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,\
                      image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";
const ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/137.0.0.0 Safari/537.36";

/// Feed page fetcher for the dynamic-feed endpoint, using reqwest.
///
/// One GET per page with `offset`/`host_mid` query parameters and the
/// caller's session cookie. The cursor is passed through untouched.
#[derive(Clone, Debug)]
pub struct BiliFeedClient {
    client: Client,
    base_url: String,
    cookie: String,
    timeout_secs: u64,
}

impl BiliFeedClient {
    pub fn new(cookie: &str) -> Result<Self, AppError> {
        Self::with_base_url(cookie, DEFAULT_BASE_URL)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(cookie: &str, base_url: &str) -> Result<Self, AppError> {
        if cookie.trim().is_empty() {
            return Err(AppError::ConfigError(
                "session cookie is not set; the feed API requires one".into(),
            ));
        }

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cookie: cookie.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        })
    }
}

impl FeedSource for BiliFeedClient {
    async fn fetch_page(
        &self,
        subject_id: &str,
        cursor: &Cursor,
    ) -> Result<FeedResponse, AppError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("offset", cursor.as_str()), ("host_mid", subject_id)])
            .header("Accept", ACCEPT)
            .header("Accept-Language", ACCEPT_LANGUAGE)
            .header("User-Agent", USER_AGENT)
            .header("Cookie", &self.cookie)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout(self.timeout_secs)
                } else if e.is_connect() {
                    AppError::NetworkError(format!("Connection failed: {e}"))
                } else {
                    AppError::HttpError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpError(format!(
                "HTTP {} for feed page",
                status.as_u16()
            )));
        }

        response
            .json::<FeedResponse>()
            .await
            .map_err(|e| AppError::PayloadError(format!("Failed to parse feed page: {e}")))
    }
}
