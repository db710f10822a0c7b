//! Core business logic abstractions

pub mod cache;
pub mod calculator;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod currency;
pub mod log;
pub mod pricing;
pub mod session;

// Re-export main types for cleaner imports
pub use calculator::Calculator;
pub use catalog::{CatalogProvider, Review, SampleAssignment};
pub use contact::{ContactForm, EnquiryType, StoredSubmission, SubmissionStore};
pub use currency::{ExchangeRateProvider, ExchangeRates, RateSource};
pub use pricing::{AddOn, AssignmentType, DisplayCurrency, PriceQuote, PricingInput};
pub use session::RateFeed;
