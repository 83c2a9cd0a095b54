use super::ui;
use crate::core::format::RATE_DECIMALS;
use crate::core::prefs::{KeyValueStore, Preferences};
use crate::core::rate::{RateProvider, RateQuote};
use crate::core::series::Pair;
use anyhow::Result;
use comfy_table::Cell;
use futures::future::join_all;
use tracing::debug;

fn favorites_table(rows: &[(Pair, Result<RateQuote>)]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Pair"),
        ui::header_cell("Date"),
        ui::header_cell("Latest rate"),
    ]);
    for (pair, quote) in rows {
        let quote = quote.as_ref().ok();
        table.add_row(vec![
            Cell::new(pair.to_string()),
            Cell::new(quote.map_or_else(String::new, |q| q.date.to_string())),
            ui::optional_number_cell(quote.map(|q| q.rate), RATE_DECIMALS),
        ]);
    }
    table.to_string()
}

/// Shows every favorite with its latest rate. A failing pair does not hide the others.
pub async fn list(provider: &dyn RateProvider, prefs: &Preferences) -> Result<()> {
    if prefs.favorites.is_empty() {
        println!("No favorites yet. Add one with `fxview favorites add USD/EUR`.");
        return Ok(());
    }

    let pb = ui::new_spinner("Fetching favorite rates...");
    let rows = join_all(prefs.favorites.iter().map(|pair| async move {
        let quote = provider.latest(pair).await;
        if let Err(e) = &quote {
            debug!("Latest rate failed for {}: {}", pair, e);
        }
        (pair.clone(), quote)
    }))
    .await;
    pb.finish_and_clear();

    println!("{}", favorites_table(&rows));
    Ok(())
}

pub fn add(store: &dyn KeyValueStore, prefs: &mut Preferences, pair: Pair) -> Result<()> {
    let label = pair.to_string();
    if prefs.add_favorite(store, pair)? {
        println!("Added {label} to favorites");
    } else {
        println!("{label} is already a favorite");
    }
    Ok(())
}

pub fn remove(store: &dyn KeyValueStore, prefs: &mut Preferences, pair: &Pair) -> Result<()> {
    if prefs.remove_favorite(store, pair)? {
        println!("Removed {pair} from favorites");
    } else {
        println!("{pair} is not a favorite");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::NaiveDate;

    #[test]
    fn test_failed_pair_shows_placeholder() {
        let rows: Vec<(Pair, Result<RateQuote>)> = vec![
            (
                "USD/EUR".parse().unwrap(),
                Ok(RateQuote {
                    date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                    rate: 0.9214,
                }),
            ),
            ("USD/XYZ".parse().unwrap(), Err(anyhow!("not found"))),
        ];
        let table = favorites_table(&rows);
        let ok_line = table.lines().find(|l| l.contains("USD/EUR")).unwrap();
        let failed_line = table.lines().find(|l| l.contains("USD/XYZ")).unwrap();
        assert!(ok_line.contains("0.9214"));
        assert!(ok_line.contains("2024-01-31"));
        assert!(failed_line.contains('—'));
    }
}
