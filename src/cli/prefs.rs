use super::ui;
use crate::core::format::format_amount;
use crate::core::prefs::{KeyValueStore, Preferences, Theme};
use anyhow::Result;

pub fn show_fee(prefs: &Preferences) {
    println!(
        "Fee: {}",
        ui::style_text(
            &format!("{}%", format_amount(prefs.fee_percent)),
            ui::StyleType::TotalValue
        )
    );
}

pub fn set_fee(store: &dyn KeyValueStore, prefs: &mut Preferences, fee_percent: f64) -> Result<()> {
    prefs.set_fee(store, fee_percent)?;
    if fee_percent >= 100.0 {
        println!(
            "{}",
            ui::style_text(
                "Fees of 100% or more convert every amount to zero",
                ui::StyleType::Error
            )
        );
    }
    show_fee(prefs);
    Ok(())
}

pub fn show_theme(prefs: &Preferences) {
    println!(
        "Theme: {}",
        ui::style_text(&prefs.theme.to_string(), ui::StyleType::TotalValue)
    );
}

pub fn set_theme(store: &dyn KeyValueStore, prefs: &mut Preferences, theme: Theme) -> Result<()> {
    prefs.set_theme(store, theme)?;
    show_theme(prefs);
    Ok(())
}

pub fn toggle_theme(store: &dyn KeyValueStore, prefs: &mut Preferences) -> Result<()> {
    prefs.toggle_theme(store)?;
    show_theme(prefs);
    Ok(())
}
