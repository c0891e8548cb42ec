//! Documentation served over HTTP at `<base_url>/docs/<name>`.
//!
//! Matches how the published docs site exposes its markdown, so a running
//! site can be browsed from the terminal.

use async_trait::async_trait;
use log::{debug, warn};

use crate::content::{ContentError, ContentSource, validate_resource_name};

pub struct HttpSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url_for(&self, resource: &str) -> String {
        format!("{}/docs/{}", self.base_url, resource)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, resource: &str) -> Result<String, ContentError> {
        validate_resource_name(resource)?;
        let url = self.url_for(resource);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(if status == reqwest::StatusCode::NOT_FOUND {
                ContentError::NotFound(resource.to_string())
            } else {
                ContentError::Status {
                    status: status.as_u16(),
                    resource: resource.to_string(),
                }
            });
        }

        response
            .text()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))
    }
}
