pub mod args;
mod markets;
mod progress;

use args::Cli;
use cointab_sdk::{Pair, fetch::Fetcher};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let fetcher = Fetcher::with_api_url(&cli.api_url);
    let pair = Pair::new(&cli.coin, &cli.base);

    let mut stdout = std::io::stdout();
    markets::render(&fetcher, &pair, cli.top, !cli.no_color, &mut stdout).await
}
