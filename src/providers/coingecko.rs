use crate::core::market::{CoinMarket, MarketProvider};
use crate::providers::util::get_json;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Url;
use tracing::instrument;

/// Market snapshots from a CoinGecko-compatible API.
pub struct CoinGeckoProvider {
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new(base_url: &str) -> Self {
        CoinGeckoProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl MarketProvider for CoinGeckoProvider {
    #[instrument(name = "CoinMarkets", skip(self))]
    async fn top_coins(&self, vs_currency: &str, limit: usize) -> Result<Vec<CoinMarket>> {
        let vs_currency = vs_currency.to_lowercase();
        let per_page = limit.to_string();
        let url = Url::parse_with_params(
            &format!("{}/api/v3/coins/markets", self.base_url),
            [
                ("vs_currency", vs_currency.as_str()),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
            ],
        )?;
        let mut coins: Vec<CoinMarket> =
            get_json(url.as_str(), &format!("coin markets in {vs_currency}")).await?;
        coins.truncate(limit);
        Ok(coins)
    }
}
