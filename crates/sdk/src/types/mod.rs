mod quote;
mod trend;

pub use quote::{ExchangeQuote, PriceSnapshot};
pub use trend::{Trend, TrendColor};
