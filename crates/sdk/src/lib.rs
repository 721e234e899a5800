//! `cointab` SDK.
//!
//! # Overview
//!
//! Turns one snapshot of per-exchange quotes into a column-aligned,
//! colorized comparison table.
//!
//! Use [`fetch::Fetcher`] to pull the display symbol and the top exchanges
//! for a coin/base pair, then [`table::render_report`] to produce the final
//! banner + grid text.
//!
//! See `./tests` for examples.
//!
//! # Limitations/follow-ups
//!
//! * Only one coin/base pair per report; portfolio-style multi-pair
//!   comparison is left to callers looping over pairs.

pub mod error;
pub mod fetch;
pub mod format;
pub mod table;
pub mod types;

/// Coin/base-currency pair a report is built for.
/// Symbols are uppercased on construction, matching what the pricing
/// service expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    coin: String,
    base: String,
}

impl Pair {
    pub fn new(coin: &str, base: &str) -> Self {
        Self { coin: coin.to_uppercase(), base: base.to_uppercase() }
    }

    pub fn coin(&self) -> &str { &self.coin }

    pub fn base(&self) -> &str { &self.base }
}
