//! Cost estimation for writing orders.
//!
//! The price is linear in the word count with flat surcharges for
//! presentations and for each specialist add-on. Conversion into the two
//! foreign currencies is a plain multiplication against a rate snapshot.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use super::currency::ExchangeRates;

/// Smallest word count the calculator accepts.
pub const MIN_WORD_COUNT: u32 = 100;
/// Largest word count the calculator accepts.
pub const MAX_WORD_COUNT: u32 = 10_000;

/// Base-currency units charged per block of words.
pub const PRICE_PER_BLOCK: f64 = 100.0;
/// Number of words in one priced block.
pub const WORDS_PER_BLOCK: f64 = 50.0;
/// Flat surcharge for presentations.
pub const PRESENTATION_SURCHARGE: f64 = 500.0;
/// Flat surcharge per selected add-on.
pub const ADD_ON_SURCHARGE: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AssignmentType {
    #[default]
    Essay,
    Report,
    Dissertation,
    Coursework,
    Presentation,
    ExamPrep,
}

impl AssignmentType {
    pub const ALL: [AssignmentType; 6] = [
        AssignmentType::Essay,
        AssignmentType::Report,
        AssignmentType::Dissertation,
        AssignmentType::Coursework,
        AssignmentType::Presentation,
        AssignmentType::ExamPrep,
    ];

    pub fn surcharge(&self) -> f64 {
        match self {
            AssignmentType::Presentation => PRESENTATION_SURCHARGE,
            _ => 0.0,
        }
    }
}

impl Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AssignmentType::Essay => "Essay",
                AssignmentType::Report => "Report",
                AssignmentType::Dissertation => "Dissertation",
                AssignmentType::Coursework => "Coursework",
                AssignmentType::Presentation => "Presentation",
                AssignmentType::ExamPrep => "Exam Prep",
            }
        )
    }
}

impl FromStr for AssignmentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "essay" => Ok(AssignmentType::Essay),
            "report" => Ok(AssignmentType::Report),
            "dissertation" => Ok(AssignmentType::Dissertation),
            "coursework" => Ok(AssignmentType::Coursework),
            "presentation" => Ok(AssignmentType::Presentation),
            "exam-prep" | "examprep" => Ok(AssignmentType::ExamPrep),
            _ => Err(anyhow!("Invalid assignment type: {}", s)),
        }
    }
}

/// Specialist subject areas that carry a surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum AddOn {
    Accounting,
    Coding,
    Medical,
}

impl AddOn {
    pub const ALL: [AddOn; 3] = [AddOn::Accounting, AddOn::Coding, AddOn::Medical];
}

impl Display for AddOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                AddOn::Accounting => "Accounting",
                AddOn::Coding => "Coding/Programming",
                AddOn::Medical => "Medical/Healthcare",
            }
        )
    }
}

impl FromStr for AddOn {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accounting" => Ok(AddOn::Accounting),
            "coding" | "programming" => Ok(AddOn::Coding),
            "medical" | "healthcare" => Ok(AddOn::Medical),
            _ => Err(anyhow!("Invalid add-on: {}", s)),
        }
    }
}

/// Currency a quote is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayCurrency {
    #[default]
    Base,
    Usd,
    Gbp,
}

impl FromStr for DisplayCurrency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BASE" => Ok(DisplayCurrency::Base),
            "USD" => Ok(DisplayCurrency::Usd),
            "GBP" => Ok(DisplayCurrency::Gbp),
            _ => Err(anyhow!("Invalid display currency: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    pub word_count: u32,
    pub assignment_type: AssignmentType,
    pub add_ons: BTreeSet<AddOn>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub base_amount: f64,
    pub usd_amount: f64,
    pub gbp_amount: f64,
    pub display_currency: DisplayCurrency,
}

/// Price of an order in the base currency.
pub fn base_price(input: &PricingInput) -> f64 {
    let words = (f64::from(input.word_count) / WORDS_PER_BLOCK) * PRICE_PER_BLOCK;
    let add_ons = input.add_ons.len() as f64 * ADD_ON_SURCHARGE;
    words + input.assignment_type.surcharge() + add_ons
}

/// Prices an order and converts it with the given rate snapshot.
pub fn price_quote(
    input: &PricingInput,
    rates: &ExchangeRates,
    display_currency: DisplayCurrency,
) -> PriceQuote {
    let base_amount = base_price(input);
    PriceQuote {
        base_amount,
        usd_amount: base_amount * rates.usd_per_base,
        gbp_amount: base_amount * rates.gbp_per_base,
        display_currency,
    }
}

impl PriceQuote {
    /// Formats the amount in `currency`. The base amount is shown as a whole
    /// number, converted amounts with two decimals.
    pub fn format_in(&self, currency: DisplayCurrency, base_symbol: &str) -> String {
        match currency {
            DisplayCurrency::Base => format!("{base_symbol}{:.0}", self.base_amount),
            DisplayCurrency::Usd => format!("${:.2}", self.usd_amount),
            DisplayCurrency::Gbp => format!("£{:.2}", self.gbp_amount),
        }
    }

    /// Formats the amount in the quote's own display currency.
    pub fn display(&self, base_symbol: &str) -> String {
        self.format_in(self.display_currency, base_symbol)
    }
}
