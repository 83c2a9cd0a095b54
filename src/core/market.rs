//! Cryptocurrency market snapshot abstractions

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

#[async_trait]
pub trait MarketProvider: Send + Sync {
    /// Top coins by market cap, priced in `vs_currency`.
    async fn top_coins(&self, vs_currency: &str, limit: usize) -> Result<Vec<CoinMarket>>;
}
