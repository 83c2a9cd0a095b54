use super::ui;
use crate::core::prefs::Preferences;
use crate::core::rate::RateProvider;
use anyhow::Result;
use comfy_table::Cell;
use std::collections::BTreeMap;

fn currencies_table(currencies: &BTreeMap<String, String>, prefs: &Preferences) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("In favorites"),
    ]);
    for (code, name) in currencies {
        let favorite = prefs
            .favorites
            .iter()
            .any(|p| &p.base == code || &p.quote == code);
        table.add_row(vec![
            Cell::new(code),
            Cell::new(name),
            Cell::new(if favorite { "★" } else { "" }),
        ]);
    }
    table.to_string()
}

pub async fn run(provider: &dyn RateProvider, prefs: &Preferences) -> Result<()> {
    let pb = ui::new_spinner("Fetching currencies...");
    let currencies = provider.currencies().await;
    pb.finish_and_clear();

    let currencies = currencies?;
    println!("{}", currencies_table(&currencies, prefs));
    println!(
        "{}",
        ui::style_text(
            &format!("{} currencies", currencies.len()),
            ui::StyleType::Subtle
        )
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::Theme;

    #[test]
    fn test_marks_currencies_in_favorites() {
        let currencies = BTreeMap::from([
            ("EUR".to_string(), "Euro".to_string()),
            ("JPY".to_string(), "Japanese Yen".to_string()),
        ]);
        let prefs = Preferences {
            favorites: vec!["USD/EUR".parse().unwrap()],
            fee_percent: 0.0,
            theme: Theme::Light,
        };
        let table = currencies_table(&currencies, &prefs);
        let eur_line = table.lines().find(|l| l.contains("EUR")).unwrap();
        let jpy_line = table.lines().find(|l| l.contains("JPY")).unwrap();
        assert!(eur_line.contains('★'));
        assert!(!jpy_line.contains('★'));
    }
}
