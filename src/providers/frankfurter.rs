use crate::core::rate::{RateProvider, RateQuote};
use crate::core::series::{Pair, Sample, Series};
use crate::providers::util::get_json;
use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Url;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, instrument};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Rates from a Frankfurter-compatible API (ECB reference rates).
pub struct FrankfurterProvider {
    base_url: String,
}

impl FrankfurterProvider {
    pub fn new(base_url: &str) -> Self {
        FrankfurterProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: &str, pair: &Pair) -> Result<Url> {
        Ok(Url::parse_with_params(
            &format!("{}/{}", self.base_url, endpoint),
            [("from", pair.base.as_str()), ("to", pair.quote.as_str())],
        )?)
    }

    async fn quote(&self, endpoint: &str, pair: &Pair) -> Result<RateQuote> {
        let subject = format!("pair: {pair}");
        let data: QuoteResponse = get_json(self.url(endpoint, pair)?.as_str(), &subject).await?;
        let rate = data
            .rates
            .get(&pair.quote)
            .copied()
            .ok_or_else(|| anyhow!("No rate data found for {}", subject))?;
        let date = NaiveDate::parse_from_str(&data.date, DATE_FORMAT)
            .with_context(|| format!("Invalid date '{}' for {}", data.date, subject))?;
        Ok(RateQuote { date, rate })
    }
}

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    date: String,
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct WindowResponse {
    rates: BTreeMap<String, HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for FrankfurterProvider {
    async fn currencies(&self) -> Result<BTreeMap<String, String>> {
        let url = format!("{}/currencies", self.base_url);
        get_json(&url, "currency list").await
    }

    #[instrument(name = "LatestRate", skip(self), fields(pair = %pair))]
    async fn latest(&self, pair: &Pair) -> Result<RateQuote> {
        if pair.is_identity() {
            return Ok(RateQuote {
                date: chrono::Utc::now().date_naive(),
                rate: 1.0,
            });
        }
        self.quote("latest", pair).await
    }

    #[instrument(name = "HistoricalRate", skip(self), fields(pair = %pair, date = %date))]
    async fn historical(&self, pair: &Pair, date: NaiveDate) -> Result<RateQuote> {
        if pair.is_identity() {
            return Ok(RateQuote { date, rate: 1.0 });
        }
        self.quote(&date.format(DATE_FORMAT).to_string(), pair).await
    }

    #[instrument(name = "RateWindow", skip(self), fields(pair = %pair, start = %start, end = %end))]
    async fn window(&self, pair: &Pair, start: NaiveDate, end: NaiveDate) -> Result<Series> {
        if pair.is_identity() {
            return Ok(Series::flat(start, end, 1.0));
        }

        let endpoint = format!(
            "{}..{}",
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        );
        let subject = format!("pair: {pair}");
        let data: WindowResponse = get_json(self.url(&endpoint, pair)?.as_str(), &subject).await?;

        let mut samples = Vec::with_capacity(data.rates.len());
        for (day, rates) in &data.rates {
            let date = NaiveDate::parse_from_str(day, DATE_FORMAT)
                .with_context(|| format!("Invalid date '{}' for {}", day, subject))?;
            match rates.get(&pair.quote) {
                Some(rate) => samples.push(Sample::new(date, *rate)),
                None => debug!("No {} rate on {}", pair.quote, day),
            }
        }
        Series::new(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    async fn mount(server: &MockServer, request_path: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(request_path))
            .and(query_param("from", "USD"))
            .and(query_param("to", "EUR"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_latest_rate() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/latest",
            200,
            r#"{"amount":1.0,"base":"USD","date":"2024-01-31","rates":{"EUR":0.9214}}"#,
        )
        .await;

        let provider = FrankfurterProvider::new(&server.uri());
        let quote = provider
            .latest(&"USD/EUR".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(quote.rate, 0.9214);
        assert_eq!(quote.date, date("2024-01-31"));
    }

    #[tokio::test]
    async fn test_historical_rate() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/2024-01-15",
            200,
            r#"{"amount":1.0,"base":"USD","date":"2024-01-15","rates":{"EUR":0.9137}}"#,
        )
        .await;

        let provider = FrankfurterProvider::new(&server.uri());
        let quote = provider
            .historical(&"USD/EUR".parse().unwrap(), date("2024-01-15"))
            .await
            .unwrap();
        assert_eq!(quote.rate, 0.9137);
    }

    #[tokio::test]
    async fn test_rate_window() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/2024-01-01..2024-01-05",
            200,
            r#"{
                "amount": 1.0,
                "base": "USD",
                "start_date": "2024-01-02",
                "end_date": "2024-01-05",
                "rates": {
                    "2024-01-04": {"EUR": 0.9150},
                    "2024-01-02": {"EUR": 0.9110},
                    "2024-01-03": {"EUR": 0.9170},
                    "2024-01-05": {"GBP": 0.7900}
                }
            }"#,
        )
        .await;

        let provider = FrankfurterProvider::new(&server.uri());
        let series = provider
            .window(
                &"USD/EUR".parse().unwrap(),
                date("2024-01-01"),
                date("2024-01-05"),
            )
            .await
            .unwrap();
        let values: Vec<f64> = series.values().collect();
        assert_eq!(values, vec![0.9110, 0.9170, 0.9150]);
        assert_eq!(series.samples()[0].date, date("2024-01-02"));
    }

    #[tokio::test]
    async fn test_identity_pair_skips_network() {
        // No mocks mounted: any request would fail with 404.
        let server = MockServer::start().await;
        let provider = FrankfurterProvider::new(&server.uri());
        let pair: Pair = "USD/USD".parse().unwrap();

        assert_eq!(provider.latest(&pair).await.unwrap().rate, 1.0);
        assert_eq!(
            provider
                .historical(&pair, date("2024-01-10"))
                .await
                .unwrap()
                .rate,
            1.0
        );
        let series = provider
            .window(&pair, date("2024-01-01"), date("2024-01-10"))
            .await
            .unwrap();
        assert_eq!(series.len(), 10);
        assert!(series.values().all(|v| v == 1.0));
    }

    #[tokio::test]
    async fn test_currencies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/currencies"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"EUR":"Euro","USD":"United States Dollar"}"#),
            )
            .mount(&server)
            .await;

        let provider = FrankfurterProvider::new(&server.uri());
        let currencies = provider.currencies().await.unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies["EUR"], "Euro");
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let server = MockServer::start().await;
        mount(&server, "/latest", 500, "").await;

        let provider = FrankfurterProvider::new(&server.uri());
        let result = provider.latest(&"USD/EUR".parse().unwrap()).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for pair: USD/EUR"
        );
    }

    #[tokio::test]
    async fn test_missing_quote_currency() {
        let server = MockServer::start().await;
        mount(
            &server,
            "/latest",
            200,
            r#"{"amount":1.0,"base":"USD","date":"2024-01-31","rates":{}}"#,
        )
        .await;

        let provider = FrankfurterProvider::new(&server.uri());
        let result = provider.latest(&"USD/EUR".parse().unwrap()).await;
        assert_eq!(
            result.unwrap_err().to_string(),
            "No rate data found for pair: USD/EUR"
        );
    }

    #[tokio::test]
    async fn test_malformed_response() {
        let server = MockServer::start().await;
        mount(&server, "/latest", 200, r#"{"result": []}"#).await;

        let provider = FrankfurterProvider::new(&server.uri());
        let result = provider.latest(&"USD/EUR".parse().unwrap()).await;
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for pair: USD/EUR")
        );
    }
}
