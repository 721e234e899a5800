//! Client for the cryptocompare min-api.
//!
//! The service reports failures in-band: HTTP 200 with
//! `{"Response": "Error", "Message": "..."}`. Every response goes through
//! [`check_service_error`] before typed deserialization, and typed
//! deserialization is where malformed exchange records fail.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    Pair,
    error::MarketError,
    types::{ExchangeQuote, PriceSnapshot},
};

pub const DEFAULT_API_URL: &str = "https://min-api.cryptocompare.com";

/// Asynchronous client for the pricing service.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    api_url: String,
}

#[derive(Deserialize)]
struct PriceMultiFull {
    #[serde(rename = "DISPLAY", default)]
    display: HashMap<String, HashMap<String, PairDisplay>>,
}

#[derive(Deserialize)]
struct PairDisplay {
    #[serde(rename = "TOSYMBOL")]
    to_symbol: String,
}

#[derive(Deserialize)]
struct TopExchanges {
    #[serde(rename = "Data")]
    data: ExchangeData,
}

#[derive(Deserialize)]
struct ExchangeData {
    #[serde(rename = "Exchanges")]
    exchanges: Vec<ExchangeQuote>,
}

impl Default for Fetcher {
    fn default() -> Self { Self::new() }
}

impl Fetcher {
    pub fn new() -> Self { Self::with_api_url(DEFAULT_API_URL) }

    /// Points the client at a different endpoint, e.g. a mock server in
    /// tests.
    pub fn with_api_url(api_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches current prices for the pair and extracts the display
    /// currency symbol from the service's nested `DISPLAY` map.
    pub async fn prices(&self, pair: &Pair) -> Result<PriceSnapshot, MarketError> {
        let url = format!("{}/data/pricemultifull", self.api_url);
        tracing::debug!(%url, coin = pair.coin(), base = pair.base(), "fetching prices");
        let body = self
            .client
            .get(&url)
            .query(&[
                ("fsyms", pair.coin()),
                ("tsyms", pair.base()),
                ("tryConversion", "true"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        check_service_error(&body)?;

        let prices: PriceMultiFull = serde_json::from_value(body)?;
        let display = prices
            .display
            .get(pair.coin())
            .and_then(|bases| bases.get(pair.base()))
            .ok_or_else(|| MarketError::UnknownPair {
                coin: pair.coin().to_string(),
                base: pair.base().to_string(),
            })?;

        Ok(PriceSnapshot::new(pair.clone(), display.to_symbol.clone()))
    }

    /// Fetches the top exchanges trading the pair, ranked by the service
    /// (by direct volume). Order is preserved as received.
    pub async fn top_exchanges(
        &self,
        pair: &Pair,
        top: usize,
    ) -> Result<Vec<ExchangeQuote>, MarketError> {
        let url = format!("{}/data/top/exchanges/full", self.api_url);
        tracing::debug!(%url, coin = pair.coin(), base = pair.base(), top, "fetching exchanges");
        let body = self
            .client
            .get(&url)
            .query(&[
                ("fsym", pair.coin()),
                ("tsym", pair.base()),
                ("limit", top.to_string().as_str()),
                ("page", "0"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        check_service_error(&body)?;

        let exchanges: TopExchanges = serde_json::from_value(body)?;
        Ok(exchanges.data.exchanges)
    }
}

fn check_service_error(body: &serde_json::Value) -> Result<(), MarketError> {
    if body.get("Response").and_then(|r| r.as_str()) == Some("Error") {
        let message = body
            .get("Message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        return Err(MarketError::Service(message.to_string()));
    }
    Ok(())
}
