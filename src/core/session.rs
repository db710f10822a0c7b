//! One-shot exchange-rate fetch tied to a calculator session.
//!
//! The feed starts out holding the fallback pair so a quote can be rendered
//! straight away. The fetch runs on its own task and publishes its result
//! once; dropping the feed aborts a fetch that has not finished.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{Instrument, Span, debug, instrument};

use super::currency::{ExchangeRateProvider, ExchangeRates, resolve_rates};

pub struct RateFeed {
    rx: watch::Receiver<Option<ExchangeRates>>,
    task: Option<JoinHandle<()>>,
}

impl RateFeed {
    /// Spawns the rate lookup for `base` on the current runtime.
    #[instrument(name = "RateFeed", skip(provider))]
    pub fn spawn(provider: Arc<dyn ExchangeRateProvider>, base: &str) -> Self {
        let (tx, rx) = watch::channel(None);
        let base = base.to_string();
        let lookup = async move {
            let rates = resolve_rates(provider.as_ref(), &base).await;
            debug!(?rates, "Rate lookup resolved");
            // The session may already be gone; nothing to do then.
            let _ = tx.send(Some(rates));
        };
        let task = tokio::spawn(lookup.instrument(Span::current()));

        RateFeed {
            rx,
            task: Some(task),
        }
    }

    /// A feed that never fetches and always reports the fallback pair.
    pub fn offline() -> Self {
        let (_tx, rx) = watch::channel(Some(ExchangeRates::FALLBACK));
        RateFeed { rx, task: None }
    }

    /// Rates to render with right now.
    pub fn current(&self) -> ExchangeRates {
        self.rx.borrow().unwrap_or(ExchangeRates::FALLBACK)
    }

    pub fn is_resolved(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Waits up to `timeout` for the lookup to resolve, then returns the
    /// rates to render with. A lookup still pending at the deadline leaves
    /// the fallback pair in place.
    pub async fn resolved(&mut self, timeout: Duration) -> ExchangeRates {
        let wait = self.rx.wait_for(|rates| rates.is_some());
        match tokio::time::timeout(timeout, wait).await {
            Ok(Ok(rates)) => rates.unwrap_or(ExchangeRates::FALLBACK),
            Ok(Err(_)) => {
                debug!("Rate lookup ended without a result");
                ExchangeRates::FALLBACK
            }
            Err(_) => {
                debug!(?timeout, "Rate lookup timed out, keeping fallback rates");
                ExchangeRates::FALLBACK
            }
        }
    }
}

impl Drop for RateFeed {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                debug!("Aborting pending rate lookup");
            }
            task.abort();
        }
    }
}
