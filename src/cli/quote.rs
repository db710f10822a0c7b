use super::ui;
use crate::core::currency::{ExchangeRates, RateSource};
use crate::core::pricing::{
    ADD_ON_SURCHARGE, DisplayCurrency, PRICE_PER_BLOCK, PriceQuote, WORDS_PER_BLOCK,
};
use crate::core::{Calculator, RateFeed};
use anyhow::Result;
use comfy_table::Cell;
use serde::Serialize;
use std::time::Duration;

/// A rendered calculator result.
#[derive(Debug, Serialize)]
pub struct QuoteView {
    pub calculator: QuoteInputView,
    pub rates: ExchangeRates,
    pub quote: PriceQuote,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct QuoteInputView {
    pub word_count: u32,
    pub assignment_type: String,
    pub add_ons: Vec<String>,
}

impl QuoteView {
    pub fn new(calculator: &Calculator, rates: ExchangeRates, base_symbol: &str) -> Self {
        let quote = calculator.quote(&rates);
        QuoteView {
            calculator: QuoteInputView {
                word_count: calculator.word_count(),
                assignment_type: calculator.assignment_type().to_string(),
                add_ons: calculator.add_ons().iter().map(|a| a.to_string()).collect(),
            },
            rates,
            display: quote.display(base_symbol),
            quote,
        }
    }

    pub fn display_as_table(
        &self,
        calculator: &Calculator,
        base_currency: &str,
        base_symbol: &str,
    ) -> String {
        let mut breakdown = ui::new_styled_table();
        breakdown.set_header(vec![
            ui::header_cell("Item"),
            ui::header_cell(&format!("Amount ({base_currency})")),
        ]);

        let words = calculator.word_count();
        let word_price = (f64::from(words) / WORDS_PER_BLOCK) * PRICE_PER_BLOCK;
        breakdown.add_row(vec![
            Cell::new(format!("{words} words ({})", calculator.assignment_type())),
            ui::amount_cell(format!("{base_symbol}{word_price:.0}"), false),
        ]);

        let surcharge = calculator.assignment_type().surcharge();
        if surcharge > 0.0 {
            breakdown.add_row(vec![
                Cell::new(format!("{} surcharge", calculator.assignment_type())),
                ui::amount_cell(format!("{base_symbol}{surcharge:.0}"), false),
            ]);
        }

        for add_on in calculator.add_ons() {
            breakdown.add_row(vec![
                Cell::new(format!("{add_on} specialist")),
                ui::amount_cell(format!("{base_symbol}{ADD_ON_SURCHARGE:.0}"), false),
            ]);
        }

        let mut currencies = ui::new_styled_table();
        currencies.set_header(vec![
            ui::header_cell(base_currency),
            ui::header_cell("USD"),
            ui::header_cell("GBP"),
        ]);
        currencies.add_row(
            [DisplayCurrency::Base, DisplayCurrency::Usd, DisplayCurrency::Gbp]
                .into_iter()
                .map(|currency| {
                    ui::amount_cell(
                        self.quote.format_in(currency, base_symbol),
                        currency == self.quote.display_currency,
                    )
                })
                .collect::<Vec<_>>(),
        );

        let mut output = format!(
            "{}\n\n",
            ui::style_text("Cost Estimate", ui::StyleType::Title)
        );
        output.push_str(&breakdown.to_string());
        output.push('\n');
        output.push_str(&currencies.to_string());
        output.push_str(&format!(
            "\n\n{}: {}",
            ui::style_text("Estimated Price", ui::StyleType::TotalLabel),
            ui::style_text(&self.display, ui::StyleType::TotalValue)
        ));

        let rates_note = format!(
            "1 {base_currency} = {} USD ({}) / {} GBP ({})",
            self.rates.usd_per_base,
            source_label(self.rates.usd_source),
            self.rates.gbp_per_base,
            source_label(self.rates.gbp_source),
        );
        output.push_str(&format!(
            "\n{}",
            ui::style_text(&rates_note, ui::StyleType::Subtle)
        ));
        output.push_str(&format!(
            "\n{}",
            ui::style_text(
                "This is an estimate. Final pricing may vary with deadline and complexity.",
                ui::StyleType::Subtle
            )
        ));
        output
    }
}

fn source_label(source: RateSource) -> &'static str {
    match source {
        RateSource::Live => "live",
        RateSource::Fallback => "fallback",
    }
}

/// Runs one calculator session: render-ready rates are awaited for at most
/// `timeout`, after which the fallback pair is used.
pub async fn run(
    calculator: &Calculator,
    mut feed: RateFeed,
    timeout: Duration,
    base_currency: &str,
    base_symbol: &str,
    as_json: bool,
) -> Result<QuoteView> {
    let rates = if feed.is_resolved() {
        feed.current()
    } else {
        let spinner = (!as_json).then(|| ui::new_spinner("Fetching exchange rates..."));
        let rates = feed.resolved(timeout).await;
        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }
        rates
    };
    // Session ends here; an unfinished lookup is cancelled.
    drop(feed);

    let view = QuoteView::new(calculator, rates, base_symbol);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.display_as_table(calculator, base_currency, base_symbol));
    }
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::{AddOn, AssignmentType};

    fn presentation_with_coding() -> Calculator {
        let mut calc = Calculator::new();
        calc.set_word_count(1500);
        calc.set_assignment_type(AssignmentType::Presentation);
        calc.select_add_on(AddOn::Coding);
        calc.set_display_currency(DisplayCurrency::Usd);
        calc
    }

    #[test]
    fn test_quote_view_with_fallback_rates() {
        let calc = presentation_with_coding();
        let view = QuoteView::new(&calc, ExchangeRates::FALLBACK, "৳");
        assert_eq!(view.quote.base_amount, 4000.0);
        assert!(view.rates.is_fallback());
        assert_eq!(view.display, "$33.60");
        assert_eq!(view.calculator.add_ons, vec!["Coding/Programming".to_string()]);
    }

    #[test]
    fn test_table_lists_breakdown() {
        console::set_colors_enabled(false);
        let calc = presentation_with_coding();
        let view = QuoteView::new(&calc, ExchangeRates::FALLBACK, "৳");
        let table = view.display_as_table(&calc, "BDT", "৳");
        assert!(table.contains("1500 words (Presentation)"));
        assert!(table.contains("Presentation surcharge"));
        assert!(table.contains("Coding/Programming specialist"));
        assert!(table.contains("৳4000"));
        assert!(table.contains("$33.60"));
        assert!(table.contains("£26.00"));
        assert!(table.contains("0.0084 USD (fallback) / 0.0065 GBP (fallback)"));
    }

    #[test]
    fn test_table_reports_partial_fallback_per_currency() {
        console::set_colors_enabled(false);
        let calc = Calculator::new();
        let partial = ExchangeRates::from_quotes(Some(0.0082), None);
        let view = QuoteView::new(&calc, partial, "৳");
        let table = view.display_as_table(&calc, "BDT", "৳");
        assert!(table.contains("0.0082 USD (live) / 0.0065 GBP (fallback)"));
    }

    #[test]
    fn test_quote_view_json() {
        let calc = Calculator::new();
        let live = ExchangeRates::live(0.0082, 0.0061);
        let view = QuoteView::new(&calc, live, "৳");
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["quote"]["base_amount"], 2000.0);
        assert_eq!(json["rates"]["usd_source"], "live");
        assert_eq!(json["rates"]["gbp_source"], "live");
        assert_eq!(json["display"], "৳2000");
    }

    #[tokio::test]
    async fn test_run_offline() {
        let calc = Calculator::new();
        let result = run(
            &calc,
            RateFeed::offline(),
            Duration::from_millis(10),
            "BDT",
            "৳",
            true,
        )
        .await
        .unwrap();
        assert!(result.rates.is_fallback());
        assert_eq!(result.quote.base_amount, 2000.0);
    }
}
