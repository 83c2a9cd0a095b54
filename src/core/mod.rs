//! Core business logic: rate series, chart geometry, statistics, conversion,
//! application state and preferences. Nothing here touches a terminal.

pub mod chart;
pub mod config;
pub mod convert;
pub mod dashboard;
pub mod format;
pub mod log;
pub mod market;
pub mod prefs;
pub mod rate;
pub mod render;
pub mod series;
pub mod state;
pub mod stats;

// Re-export main types for cleaner imports
pub use market::{CoinMarket, MarketProvider};
pub use rate::{RateProvider, RateQuote};
pub use series::{Pair, Sample, Series, WindowRange};
