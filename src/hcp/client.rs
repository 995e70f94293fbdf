//! TFE HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::traits::PaginatedResponse;

/// TFE API client
///
/// Requests are issued one at a time; callers await each call before
/// starting the next.
pub struct TfeClient {
    client: Client,
    token: String,
    host: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl TfeClient {
    /// Create a new TFE client
    ///
    /// Certificate validation is disabled so that self-hosted Terraform
    /// Enterprise instances with private CAs keep working.
    pub fn new(token: String, host: String) -> Self {
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, host: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            host,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(api_error(response, &format!("Failed to fetch {}", error_context)).await);
        }
        Ok(response.json().await?)
    }

    /// Fetch a single resource by API path
    ///
    /// - 200: parse `data` into the typed model, keep the raw JSON too
    /// - 404: `Ok(None)`
    /// - anything else: `TfeError::Api`
    pub async fn fetch_resource_by_path<T>(
        &self,
        path: &str,
        resource_label: &str,
    ) -> Result<Option<(T, serde_json::Value)>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;

        match response.status().as_u16() {
            200 => {
                let raw: serde_json::Value = response.json().await?;
                let item: T =
                    serde_json::from_value(raw["data"].clone()).map_err(|e| TfeError::Api {
                        status: 200,
                        message: format!("Failed to parse {}: {}", resource_label, e),
                    })?;
                Ok(Some((item, raw)))
            }
            404 => Ok(None),
            _ => Err(api_error(response, &format!("Failed to fetch {}", resource_label)).await),
        }
    }

    /// Fetch all pages from a paginated API endpoint
    ///
    /// Pages are requested in order, one after another, until the
    /// `total-pages` reported in `meta.pagination` is reached. A response
    /// without pagination metadata is treated as a single page.
    pub async fn fetch_all_pages<T, R>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let mut all_items = Vec::new();
        let mut page_num: u32 = 1;

        loop {
            let url = format!(
                "{}{}{}page%5Bsize%5D={}&page%5Bnumber%5D={}",
                self.base_url(),
                path,
                separator,
                api::DEFAULT_PAGE_SIZE,
                page_num
            );
            debug!("Fetching page {} from: {}", page_num, url);

            let response = self.get(&url).send().await?;
            let page_context = format!("{} (page {})", error_context, page_num);
            let resp: R = self.parse_api_response(response, &page_context).await?;

            let total_pages = resp
                .meta()
                .and_then(|m| m.pagination.as_ref())
                .map(|p| p.total_pages)
                .unwrap_or(1);

            let items = resp.into_data();
            debug!(
                "Page {}/{} returned {} items",
                page_num,
                total_pages,
                items.len()
            );
            all_items.extend(items);

            if page_num >= total_pages {
                break;
            }
            page_num += 1;
        }

        debug!(
            "Fetched {} total items for {}",
            all_items.len(),
            error_context
        );
        Ok(all_items)
    }
}

/// Build a `TfeError::Api` from a non-success response, keeping the API's
/// own error detail when the body carries one
pub(crate) async fn api_error(response: reqwest::Response, context: &str) -> TfeError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = error_detail(&body);

    let message = if detail.is_empty() {
        context.to_string()
    } else {
        format!("{}: {}", context, detail)
    };

    TfeError::Api { status, message }
}

/// Extract the first `errors[].detail` (or `title`) from a JSON:API error
/// body; falls back to the trimmed raw body
pub fn error_detail(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let first_error = parsed
        .as_ref()
        .and_then(|v| v["errors"].as_array())
        .and_then(|errors| errors.first());

    if let Some(err) = first_error {
        if let Some(detail) = err["detail"].as_str() {
            return detail.to_string();
        }
        if let Some(title) = err["title"].as_str() {
            return title.to_string();
        }
    }

    body.trim().to_string()
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            base_url.to_string(),
        )
    }
}
