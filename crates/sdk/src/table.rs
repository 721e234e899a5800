//! Comparison-table assembly: one row per exchange, fixed 8-column header,
//! unicode grid with a banner line above.

use chrono::{DateTime, Utc};
use colored::Colorize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Style, object::Columns},
};

use crate::{
    Pair,
    format::{format_currency, format_percent},
    types::{ExchangeQuote, PriceSnapshot, Trend},
};

const TIME_FORMAT: &str = "%d %B %Y at %I:%M:%S %p UTC";

/// One rendered table row. The derive fixes both the column count and the
/// header order; an empty record list still renders the full header.
#[derive(Tabled)]
pub struct MarketRow {
    #[tabled(rename = "Market")]
    market: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Chg. 24H")]
    change: String,
    #[tabled(rename = "Chg.% 24H")]
    change_pct: String,
    #[tabled(rename = "Open 24H")]
    open: String,
    #[tabled(rename = "High 24H")]
    high: String,
    #[tabled(rename = "Low 24H")]
    low: String,
    #[tabled(rename = "Direct Vol. 24H")]
    volume: String,
}

/// Formats one exchange record into its row.
///
/// Price and both change cells carry the row's trend color; the change
/// cells additionally carry the direction glyph. Open/high/low/volume are
/// descriptive stats and stay unstyled. `color: false` suppresses every
/// escape sequence while leaving glyphs and text untouched.
pub fn build_row(quote: &ExchangeQuote, to_symbol: &str, color: bool) -> MarketRow {
    let trend = Trend::from_change(quote.change_24h);
    let paint = |text: String| trend.color().paint(&text, color);
    let with_glyph = |text: String| match trend.glyph() {
        Some(glyph) => format!("{glyph} {text}"),
        None => text,
    };

    MarketRow {
        market: accent(&quote.market, color),
        price: paint(format!("{to_symbol} {}", format_currency(quote.price))),
        change: paint(with_glyph(format!(
            "{to_symbol} {}",
            format_currency(quote.change_24h)
        ))),
        change_pct: paint(with_glyph(format!("{}%", format_percent(quote.change_pct_24h)))),
        open: format!("{to_symbol} {}", format_currency(quote.open_24h)),
        high: format!("{to_symbol} {}", format_currency(quote.high_24h)),
        low: format!("{to_symbol} {}", format_currency(quote.low_24h)),
        volume: format!("{to_symbol} {}", format_currency(quote.volume_24h)),
    }
}

/// Renders the grid: sharp unicode borders, single separator under the
/// header, market column left-aligned and everything else right-aligned.
/// Rows keep the order the records arrived in.
pub fn render_table(quotes: &[ExchangeQuote], to_symbol: &str, color: bool) -> String {
    let rows: Vec<MarketRow> = quotes
        .iter()
        .map(|quote| build_row(quote, to_symbol, color))
        .collect();
    let mut table = Table::new(rows);
    if quotes.is_empty() {
        // With no data rows the under-header separator would land where the
        // closing border belongs, leaving the frame unterminated.
        table.with(Style::sharp().remove_horizontals());
    } else {
        table.with(Style::sharp());
    }
    table.modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Single banner line: coin, base currency and fetch time, each behind an
/// accent-colored label.
pub fn banner(pair: &Pair, fetched_at: DateTime<Utc>, color: bool) -> String {
    format!(
        "{} {}  {} {}  {} {}",
        accent("Coin", color),
        pair.coin(),
        accent("Base Currency", color),
        pair.base(),
        accent("Time", color),
        fetched_at.format(TIME_FORMAT),
    )
}

/// Full report text: blank line, banner, blank line, grid, trailing
/// newline. Rendering is pure, so the same snapshot produces the same
/// bytes every time.
pub fn render_report(
    snapshot: &PriceSnapshot,
    quotes: &[ExchangeQuote],
    fetched_at: DateTime<Utc>,
    color: bool,
) -> String {
    format!(
        "\n{}\n\n{}\n",
        banner(snapshot.pair(), fetched_at, color),
        render_table(quotes, snapshot.to_symbol(), color),
    )
}

fn accent(text: &str, color: bool) -> String {
    if color { text.yellow().to_string() } else { text.to_string() }
}
