// FAQ API HTTP client.
// Handles base URL validation, default headers, and raw request dispatch.

use reqwest::{
    Client, Response, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;
use tracing::debug;

use crate::error::{FaqError, Result};

/// Path of the FAQ collection resource.
pub const FAQ_ENDPOINT: &str = "/api/faq";

/// HTTP client bound to one FAQ server.
#[derive(Debug, Clone)]
pub struct FaqClient {
    client: Client,
    base_url: String,
}

impl FaqClient {
    /// Create a new client for the server at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("faqdesk"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(FaqError::Http)?;

        Self::with_client(base_url, client)
    }

    /// Create a client around a preconfigured reqwest client.
    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Full URL of an endpoint on this server.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Make a GET request. The status is left for the caller to judge.
    pub async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        debug!(%url, status = %response.status(), "GET completed");
        Ok(response)
    }

    /// Make a POST request with a JSON body. The status is left for the caller to judge.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response> {
        let url = self.url(endpoint);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        debug!(%url, status = %response.status(), "POST completed");
        Ok(response)
    }
}

/// Check that `raw` is an absolute http(s) URL and strip any trailing slash.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|e| FaqError::InvalidUrl(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(FaqError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                raw, scheme
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(FaqError::InvalidUrl(format!("{}: missing host", raw)));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
