use super::ui;
use crate::core::currency::{ExchangeRateProvider, ExchangeRates, RateSource};
use anyhow::Result;
use comfy_table::Cell;

/// Looks up live rates once and prints them next to the fallback pair.
pub async fn run(provider: &dyn ExchangeRateProvider, base_currency: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching exchange rates...");
    let live = provider.fetch_rates(base_currency).await;
    pb.finish_and_clear();

    println!("{}", render(base_currency, live.as_ref().ok()));
    if let Err(e) = &live {
        println!(
            "{}",
            ui::style_text(
                &format!("Live rates unavailable ({e}); quotes use the fallback rates."),
                ui::StyleType::Subtle
            )
        );
    }
    Ok(())
}

fn render(base_currency: &str, live: Option<&ExchangeRates>) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Live (per {base_currency})")),
        ui::header_cell(&format!("Fallback (per {base_currency})")),
    ]);

    // A quote filled in from the fallback pair is not a live rate.
    let live_only = |rate: f64, source: RateSource| (source == RateSource::Live).then_some(rate);
    let rows = [
        (
            "USD",
            live.and_then(|r| live_only(r.usd_per_base, r.usd_source)),
            ExchangeRates::FALLBACK_USD,
        ),
        (
            "GBP",
            live.and_then(|r| live_only(r.gbp_per_base, r.gbp_source)),
            ExchangeRates::FALLBACK_GBP,
        ),
    ];
    for (code, live_rate, fallback) in rows {
        table.add_row(vec![
            Cell::new(code),
            ui::format_optional_cell(live_rate, |r| format!("{r:.6}")),
            Cell::new(format!("{fallback:.6}")),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Exchange Rates", ui::StyleType::Title),
        table
    )
}
