use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::prediction::{PredictionResult, ReviewRequest};

/// Client for the external sentiment model server.
///
/// Every call is a single attempt; nothing is retried.
#[derive(Clone, Debug)]
pub struct ModelServerClient {
    http: reqwest::Client,
    url: Url,
}

impl ModelServerClient {
    pub fn new(url: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .context("Failed to build model server HTTP client")?;
        Ok(ModelServerClient { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn predict(&self, review: &str) -> Result<PredictionResult> {
        let response = self
            .http
            .post(self.url.clone())
            .json(&ReviewRequest { review })
            .send()
            .await
            .with_context(|| format!("Failed to reach model server at {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Model server responded with status: {}", status);
        }

        let body: Value = response
            .json()
            .await
            .context("Model server returned a malformed body")?;
        if body.is_null() {
            bail!("Model server returned a null body");
        }
        debug!(%body, "Model server answered");

        Ok(PredictionResult::from(&body))
    }
}
