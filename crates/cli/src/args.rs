use clap::Parser;
use cointab_sdk::fetch;

pub(crate) const DEFAULT_BASE: &str = "USD";
pub(crate) const DEFAULT_TOP: usize = 10;

#[derive(Parser, Debug)]
#[command(name = "cointab", version, about, long_about = None)]
pub struct Cli {
    /// Coin symbol to compare across markets, e.g. BTC
    pub coin: String,

    /// Base currency to price the coin in
    #[arg(short, long, default_value = DEFAULT_BASE)]
    pub base: String,

    /// Number of top markets (by direct volume) to show
    #[arg(short, long, default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Disable colored output (glyphs and alignment are kept)
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Pricing service endpoint [default: cryptocompare min-api]
    #[arg(long, default_value_t = fetch::DEFAULT_API_URL.to_string())]
    pub api_url: String,
}
