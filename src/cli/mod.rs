pub mod chart;
pub mod crypto;
pub mod currencies;
pub mod favorites;
pub mod prefs;
pub mod quote;
pub mod setup;
pub mod ui;
