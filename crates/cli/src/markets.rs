use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use cointab_sdk::{
    Pair,
    fetch::Fetcher,
    table::render_report,
    types::{ExchangeQuote, PriceSnapshot},
};

use crate::progress;

/// Fetches one snapshot for the pair and writes the banner + comparison
/// table to `out`. The spinner is cleared before anything is written, on
/// the failure path too, so a fetch error never leaves chrome behind.
pub(crate) async fn render<W: Write>(
    fetcher: &Fetcher,
    pair: &Pair,
    top: usize,
    color: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let spinner = progress::fetch_spinner();
    let fetched = fetch_snapshot(fetcher, pair, top).await;
    spinner.finish_and_clear();

    let (snapshot, quotes) = fetched?;
    let report = render_report(&snapshot, &quotes, Utc::now(), color);
    out.write_all(report.as_bytes())
        .context("writing report")?;

    Ok(())
}

async fn fetch_snapshot(
    fetcher: &Fetcher,
    pair: &Pair,
    top: usize,
) -> anyhow::Result<(PriceSnapshot, Vec<ExchangeQuote>)> {
    let snapshot = fetcher
        .prices(pair)
        .await
        .context("fetching current prices")?;
    let quotes = fetcher
        .top_exchanges(pair, top)
        .await
        .context("fetching top exchanges")?;
    Ok((snapshot, quotes))
}
