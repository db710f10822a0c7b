use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;

use crate::core::cache::Cache;
use crate::core::catalog::{CatalogProvider, Review, SampleAssignment};
use crate::providers::util::with_retry;

/// Reviews and samples served as JSON lists from the site API.
pub struct CatalogApiProvider {
    base_url: String,
    cache: Arc<Cache<String, String>>,
}

impl CatalogApiProvider {
    pub fn new(base_url: &str, cache: Arc<Cache<String, String>>) -> Self {
        CatalogApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    async fn fetch_list<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, resource);

        let body = match self.cache.get(&url).await {
            Some(cached) => cached,
            None => {
                debug!("Requesting {} from {}", resource, url);
                let client = reqwest::Client::builder().user_agent("quill/0.1").build()?;
                let response = with_retry(|| async { client.get(&url).send().await }, 3, 500)
                    .await
                    .with_context(|| format!("Failed to send request for {resource}"))?;

                if !response.status().is_success() {
                    return Err(anyhow!(
                        "HTTP error: {} while fetching {}",
                        response.status(),
                        resource
                    ));
                }

                let text = response
                    .text()
                    .await
                    .with_context(|| format!("Failed to get response text for {resource}"))?;
                self.cache.put(url.clone(), text.clone()).await;
                text
            }
        };

        serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse {resource} list from {url}"))
    }
}

#[async_trait]
impl CatalogProvider for CatalogApiProvider {
    async fn reviews(&self) -> Result<Vec<Review>> {
        self.fetch_list("reviews").await
    }

    async fn samples(&self) -> Result<Vec<SampleAssignment>> {
        self.fetch_list("samples").await
    }
}
