//! Input state of a single calculator session.

use std::collections::BTreeSet;

use super::currency::ExchangeRates;
use super::pricing::{
    AddOn, AssignmentType, DisplayCurrency, MAX_WORD_COUNT, MIN_WORD_COUNT, PriceQuote,
    PricingInput, price_quote,
};

/// Default word count a new session starts with.
pub const DEFAULT_WORD_COUNT: u32 = 1000;

#[derive(Debug, Clone)]
pub struct Calculator {
    word_count: u32,
    assignment_type: AssignmentType,
    add_ons: BTreeSet<AddOn>,
    display_currency: DisplayCurrency,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            word_count: DEFAULT_WORD_COUNT,
            assignment_type: AssignmentType::default(),
            add_ons: BTreeSet::new(),
            display_currency: DisplayCurrency::default(),
        }
    }

    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Sets the word count, clamped to the accepted range.
    pub fn set_word_count(&mut self, words: u32) {
        self.word_count = words.clamp(MIN_WORD_COUNT, MAX_WORD_COUNT);
    }

    pub fn assignment_type(&self) -> AssignmentType {
        self.assignment_type
    }

    pub fn set_assignment_type(&mut self, assignment_type: AssignmentType) {
        self.assignment_type = assignment_type;
    }

    pub fn add_ons(&self) -> &BTreeSet<AddOn> {
        &self.add_ons
    }

    /// Flips the selection of `add_on`; returns whether it is now selected.
    pub fn toggle_add_on(&mut self, add_on: AddOn) -> bool {
        if self.add_ons.remove(&add_on) {
            false
        } else {
            self.add_ons.insert(add_on);
            true
        }
    }

    pub fn select_add_on(&mut self, add_on: AddOn) {
        self.add_ons.insert(add_on);
    }

    pub fn display_currency(&self) -> DisplayCurrency {
        self.display_currency
    }

    pub fn set_display_currency(&mut self, currency: DisplayCurrency) {
        self.display_currency = currency;
    }

    pub fn input(&self) -> PricingInput {
        PricingInput {
            word_count: self.word_count,
            assignment_type: self.assignment_type,
            add_ons: self.add_ons.clone(),
        }
    }

    /// Derives a fresh quote from the current inputs and `rates`.
    pub fn quote(&self, rates: &ExchangeRates) -> PriceQuote {
        price_quote(&self.input(), rates, self.display_currency)
    }
}
