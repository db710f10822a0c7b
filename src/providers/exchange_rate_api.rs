use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::currency::{ExchangeRateProvider, ExchangeRates};

/// Rates from an exchangerate-api style `/v4/latest/{base}` endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    /// Only USD and GBP are read; other entries may hold anything.
    rates: HashMap<String, Value>,
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    #[instrument(name = "ExchangeRateFetch", skip(self), fields(base = %base))]
    async fn fetch_rates(&self, base: &str) -> Result<ExchangeRates> {
        let url = format!("{}/v4/latest/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("quill/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {}", e, base))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;
        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", base, e))?;

        let usd = data.rates.get("USD").and_then(Value::as_f64);
        let gbp = data.rates.get("GBP").and_then(Value::as_f64);
        if usd.is_none() || gbp.is_none() {
            debug!(?usd, ?gbp, "Incomplete rate table, filling gaps with fallback");
        }

        Ok(ExchangeRates::from_quotes(usd, gbp))
    }
}
