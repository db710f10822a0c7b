use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::core::catalog::{CatalogProvider, Review, SampleAssignment};

const BUNDLED_CATALOG: &str = include_str!("../../docs/catalog.json");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    reviews: Vec<Review>,
    samples: Vec<SampleAssignment>,
}

/// Catalog compiled into the binary, used when no API is configured.
pub struct BundledCatalog {
    catalog: CatalogFile,
}

impl BundledCatalog {
    pub fn load() -> Result<Self> {
        let catalog =
            serde_json::from_str(BUNDLED_CATALOG).context("Failed to parse bundled catalog")?;
        Ok(BundledCatalog { catalog })
    }
}

#[async_trait]
impl CatalogProvider for BundledCatalog {
    async fn reviews(&self) -> Result<Vec<Review>> {
        Ok(self.catalog.reviews.clone())
    }

    async fn samples(&self) -> Result<Vec<SampleAssignment>> {
        Ok(self.catalog.samples.clone())
    }
}
