// FAQ API endpoint functions.
// Defines the FaqApi seam and implements it over HTTP for the FAQ collection.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;

use super::client::{FAQ_ENDPOINT, FaqClient};
use super::types::NewFaq;

/// Operations the store needs from the FAQ server.
#[async_trait]
pub trait FaqApi: Send + Sync {
    /// Fetch the collection and decode its body as JSON, whatever the status.
    async fn list(&self) -> Result<Value>;

    /// Post a new entry. Only transport failures are errors; the status is returned as-is.
    async fn submit(&self, faq: &NewFaq) -> Result<StatusCode>;
}

#[async_trait]
impl FaqApi for FaqClient {
    async fn list(&self) -> Result<Value> {
        let response = self.get(FAQ_ENDPOINT).await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "FAQ list returned non-success status, decoding body anyway");
        }

        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    async fn submit(&self, faq: &NewFaq) -> Result<StatusCode> {
        let response = self.post_json(FAQ_ENDPOINT, faq).await?;
        Ok(response.status())
    }
}
