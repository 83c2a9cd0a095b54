use super::ui;
use crate::core::format::{AMOUNT_DECIMALS, PLACEHOLDER};
use crate::core::market::{CoinMarket, MarketProvider};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};

/// Compact market cap: 1.23T, 456.70B, 12.00M.
fn format_market_cap(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    const UNITS: [(f64, &str); 3] = [(1e12, "T"), (1e9, "B"), (1e6, "M")];
    for (scale, suffix) in UNITS {
        if value.abs() >= scale {
            return format!("{:.2}{}", value / scale, suffix);
        }
    }
    format!("{value:.0}")
}

fn markets_table(coins: &[CoinMarket], vs_currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Coin"),
        ui::header_cell(&format!("Price ({})", vs_currency.to_uppercase())),
        ui::header_cell("24h"),
        ui::header_cell("Market cap"),
    ]);
    for (rank, coin) in coins.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("{} ({})", coin.name, coin.symbol.to_uppercase())),
            ui::optional_number_cell(coin.current_price, AMOUNT_DECIMALS),
            ui::change_cell(coin.price_change_percentage_24h),
            Cell::new(format_market_cap(coin.market_cap)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.to_string()
}

pub async fn run(provider: &dyn MarketProvider, vs_currency: &str, limit: usize) -> Result<()> {
    let pb = ui::new_spinner("Fetching coin markets...");
    let coins = provider.top_coins(vs_currency, limit).await;
    pb.finish_and_clear();

    println!("{}", markets_table(&coins?, vs_currency));
    Ok(())
}
