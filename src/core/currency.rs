//! Currency conversion abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a single rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    Live,
    Fallback,
}

/// Multipliers from one base-currency unit into the quoted currencies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub usd_per_base: f64,
    pub gbp_per_base: f64,
    pub usd_source: RateSource,
    pub gbp_source: RateSource,
}

impl ExchangeRates {
    pub const FALLBACK_USD: f64 = 0.0084;
    pub const FALLBACK_GBP: f64 = 0.0065;

    pub const FALLBACK: ExchangeRates = ExchangeRates {
        usd_per_base: Self::FALLBACK_USD,
        gbp_per_base: Self::FALLBACK_GBP,
        usd_source: RateSource::Fallback,
        gbp_source: RateSource::Fallback,
    };

    /// Rates taken entirely from a live quote.
    pub fn live(usd_per_base: f64, gbp_per_base: f64) -> Self {
        ExchangeRates {
            usd_per_base,
            gbp_per_base,
            usd_source: RateSource::Live,
            gbp_source: RateSource::Live,
        }
    }

    /// Builds rates from optional quotes. A quote that is missing, zero or
    /// not finite is replaced by the fallback for that currency.
    pub fn from_quotes(usd: Option<f64>, gbp: Option<f64>) -> Self {
        let pick = |rate: Option<f64>, fallback: f64| {
            rate.filter(|r| r.is_finite() && *r != 0.0)
                .map_or((fallback, RateSource::Fallback), |r| (r, RateSource::Live))
        };
        let (usd_per_base, usd_source) = pick(usd, Self::FALLBACK_USD);
        let (gbp_per_base, gbp_source) = pick(gbp, Self::FALLBACK_GBP);
        ExchangeRates {
            usd_per_base,
            gbp_per_base,
            usd_source,
            gbp_source,
        }
    }

    /// Both rates are the fixed fallback pair.
    pub fn is_fallback(&self) -> bool {
        self.usd_source == RateSource::Fallback && self.gbp_source == RateSource::Fallback
    }

    /// Both rates come from a live quote.
    pub fn is_live(&self) -> bool {
        self.usd_source == RateSource::Live && self.gbp_source == RateSource::Live
    }
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<ExchangeRates>;
}

/// Fetches rates for `base`, falling back to the fixed pair on any error.
pub async fn resolve_rates(provider: &dyn ExchangeRateProvider, base: &str) -> ExchangeRates {
    match provider.fetch_rates(base).await {
        Ok(rates) => rates,
        Err(e) => {
            debug!(error = %e, "Rate lookup failed, using fallback rates");
            ExchangeRates::FALLBACK
        }
    }
}
