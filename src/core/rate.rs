//! Exchange rate abstractions

use crate::core::series::{Pair, Series};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A single rate quoted for a day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateQuote {
    pub date: NaiveDate,
    pub rate: f64,
}

/// Source of exchange rates. Implementations hide all wire details.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Supported currency codes mapped to their display names.
    async fn currencies(&self) -> Result<BTreeMap<String, String>>;

    async fn latest(&self, pair: &Pair) -> Result<RateQuote>;

    async fn historical(&self, pair: &Pair, date: NaiveDate) -> Result<RateQuote>;

    /// Daily rates between `start` and `end`, inclusive.
    async fn window(&self, pair: &Pair, start: NaiveDate, end: NaiveDate) -> Result<Series>;
}
