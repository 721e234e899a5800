use thiserror::Error;

/// Errors surfaced by the quote pipeline.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Transport-level failure talking to the pricing service.
    #[error("request to pricing service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The pricing service answered with an in-band error payload
    /// (it reports errors with HTTP 200 and `"Response": "Error"`).
    #[error("pricing service error: {0}")]
    Service(String),

    /// The response body did not match the expected shape.
    #[error("malformed pricing response: {0}")]
    MalformedResponse(String),

    /// The service has no quote for the requested coin/base pair.
    #[error("no price data for pair {coin}/{base}")]
    UnknownPair { coin: String, base: String },
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::MalformedResponse(err.to_string())
    }
}
