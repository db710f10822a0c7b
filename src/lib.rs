pub mod cli;
pub mod core;
pub mod providers;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::{
    AddOn, AssignmentType, Calculator, CatalogProvider, ContactForm, DisplayCurrency,
    ExchangeRateProvider, RateFeed,
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Inputs for one calculator run.
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub word_count: u32,
    pub assignment_type: AssignmentType,
    pub add_ons: Vec<AddOn>,
    pub currency: DisplayCurrency,
    pub offline: bool,
    pub json: bool,
}

impl QuoteRequest {
    pub fn to_calculator(&self) -> Calculator {
        let mut calculator = Calculator::new();
        calculator.set_word_count(self.word_count);
        calculator.set_assignment_type(self.assignment_type);
        for add_on in &self.add_ons {
            calculator.select_add_on(*add_on);
        }
        calculator.set_display_currency(self.currency);
        calculator
    }
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Quote(QuoteRequest),
    Rates,
    Reviews,
    Samples,
    Home,
    Contact(ContactForm),
    ListEnquiries,
}

fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

fn rate_provider(config: &AppConfig) -> Arc<dyn ExchangeRateProvider> {
    Arc::new(providers::exchange_rate_api::ExchangeRateApiProvider::new(
        &config.providers.exchange_rate.base_url,
    ))
}

fn catalog_provider(config: &AppConfig) -> Result<Box<dyn CatalogProvider>> {
    let provider: Box<dyn CatalogProvider> = match &config.api_base_url {
        Some(base_url) => {
            let cache = Arc::new(crate::core::cache::Cache::new());
            Box::new(providers::catalog_api::CatalogApiProvider::new(
                base_url, cache,
            ))
        }
        None => Box::new(providers::bundled::BundledCatalog::load()?),
    };
    Ok(provider)
}

/// Runs one calculator session with the rate lookup described by `config`
/// and returns what was rendered.
pub async fn run_quote(
    request: &QuoteRequest,
    config: &AppConfig,
) -> Result<cli::quote::QuoteView> {
    let calculator = request.to_calculator();
    let feed = if request.offline {
        RateFeed::offline()
    } else {
        RateFeed::spawn(rate_provider(config), &config.base_currency)
    };
    cli::quote::run(
        &calculator,
        feed,
        Duration::from_secs(config.providers.exchange_rate.timeout_secs),
        &config.base_currency,
        &config.base_symbol,
        request.json,
    )
    .await
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("quill starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::Quote(request) => run_quote(&request, &config).await.map(|_| ()),
        AppCommand::Rates => {
            let provider = rate_provider(&config);
            cli::rates::run(provider.as_ref(), &config.base_currency).await
        }
        AppCommand::Reviews => {
            let catalog = catalog_provider(&config)?;
            cli::catalog::run_reviews(catalog.as_ref()).await
        }
        AppCommand::Samples => {
            let catalog = catalog_provider(&config)?;
            cli::catalog::run_samples(catalog.as_ref()).await
        }
        AppCommand::Home => {
            let catalog = catalog_provider(&config)?;
            cli::catalog::run_overview(catalog.as_ref()).await
        }
        AppCommand::Contact(form) => {
            form.validate()?;
            let store = store::open_submission_store(&config)?;
            cli::contact::submit(store.as_ref(), &form).await.map(|_| ())
        }
        AppCommand::ListEnquiries => {
            let store = store::open_submission_store(&config)?;
            cli::contact::list(store.as_ref()).await
        }
    }
}
