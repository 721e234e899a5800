use serde::Deserialize;

use crate::Pair;

/// One market's quote and 24h statistics for a coin/base pair, as reported
/// by the pricing service.
///
/// Every numeric field is mandatory: a record missing one (or carrying a
/// non-numeric value) fails deserialization at the fetch boundary rather
/// than producing a misleading partial row downstream.
#[derive(Clone, Debug, Deserialize)]
pub struct ExchangeQuote {
    /// Exchange (market) name.
    #[serde(rename = "MARKET")]
    pub market: String,

    /// Current price in the base currency.
    #[serde(rename = "PRICE")]
    pub price: f64,

    /// Absolute price change over the last 24h.
    #[serde(rename = "CHANGE24HOUR")]
    pub change_24h: f64,

    /// Fractional price change over the last 24h (0.1 = 10%, not
    /// pre-multiplied by 100).
    #[serde(rename = "CHANGEPCT24HOUR")]
    pub change_pct_24h: f64,

    /// Price 24h ago.
    #[serde(rename = "OPEN24HOUR")]
    pub open_24h: f64,

    /// 24h high.
    #[serde(rename = "HIGH24HOUR")]
    pub high_24h: f64,

    /// 24h low.
    #[serde(rename = "LOW24HOUR")]
    pub low_24h: f64,

    /// 24h traded volume, denominated in the base currency.
    #[serde(rename = "VOLUME24HOURTO")]
    pub volume_24h: f64,
}

/// Display metadata for a pair, extracted once from the price snapshot
/// instead of re-reading the service's nested maps per cell.
#[derive(Clone, Debug)]
pub struct PriceSnapshot {
    pair: Pair,
    to_symbol: String,
}

impl PriceSnapshot {
    pub fn new(pair: Pair, to_symbol: String) -> Self { Self { pair, to_symbol } }

    pub fn pair(&self) -> &Pair { &self.pair }

    /// Currency glyph of the base currency, e.g. "$".
    pub fn to_symbol(&self) -> &str { &self.to_symbol }
}
