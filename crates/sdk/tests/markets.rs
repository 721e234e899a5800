use chrono::{DateTime, TimeZone, Utc};
use cointab_sdk::{
    Pair,
    table::render_report,
    types::{ExchangeQuote, PriceSnapshot},
};

fn fetched_at() -> DateTime<Utc> { Utc.with_ymd_and_hms(2018, 4, 1, 12, 30, 54).unwrap() }

#[allow(clippy::too_many_arguments)]
fn quote(
    market: &str,
    price: f64,
    change_24h: f64,
    change_pct_24h: f64,
    open_24h: f64,
    high_24h: f64,
    low_24h: f64,
    volume_24h: f64,
) -> ExchangeQuote {
    ExchangeQuote {
        market: market.to_string(),
        price,
        change_24h,
        change_pct_24h,
        open_24h,
        high_24h,
        low_24h,
        volume_24h,
    }
}

fn btc_quotes() -> Vec<ExchangeQuote> {
    vec![
        quote("Bitfinex", 9122.5, -138.4, -1.4945, 9260.9, 9393.9, 9047.1, 192_448_713.47),
        quote("Bitstamp", 9116.09, -123.91, -1.341, 9240.0, 9393.0, 9050.0, 100_336_858.18),
        quote("Coinbase", 9120.0, 114.85, 1.2437, 9234.85, 9386.31, 9056.93, 60_991_360.82),
        quote("HitBTC", 9170.05, 0.0, 0.0, 9170.05, 9398.39, 9100.0, 56_968_995.14),
        quote("itBit", 9118.09, -128.91, -1.3941, 9247.0, 9391.97, 9051.74, 39_133_536.25),
    ]
}

fn trx_quotes() -> Vec<ExchangeQuote> {
    vec![
        quote("Bitfinex", 0.074, 0.0083, 12.6348, 0.066, 0.076, 0.065, 1_874_744.19),
        quote("HitBTC", 0.075, 0.0087, 13.1371, 0.066, 0.076, 0.066, 1_007_006.56),
        quote("Yobit", 0.078, 0.0092, 13.4784, 0.069, 0.079, 0.068, 44_741.073),
        quote("BitFlip", 0.084, 0.01, 13.5135, 0.074, 0.084, 0.071, 922.52),
    ]
}

#[test]
fn renders_top_markets_for_btc_usd() {
    let snapshot = PriceSnapshot::new(Pair::new("BTC", "USD"), "$".to_string());

    let rendered = render_report(&snapshot, &btc_quotes(), fetched_at(), false);

    let expected = "
Coin BTC  Base Currency USD  Time 01 April 2018 at 12:30:54 PM UTC

┌──────────┬────────────┬─────────────┬────────────┬────────────┬────────────┬────────────┬──────────────────┐
│ Market   │      Price │    Chg. 24H │  Chg.% 24H │   Open 24H │   High 24H │    Low 24H │  Direct Vol. 24H │
├──────────┼────────────┼─────────────┼────────────┼────────────┼────────────┼────────────┼──────────────────┤
│ Bitfinex │  $ 9,122.5 │  ▾ $ -138.4 │ ▾ -149.45% │  $ 9,260.9 │  $ 9,393.9 │  $ 9,047.1 │ $ 192,448,713.47 │
│ Bitstamp │ $ 9,116.09 │ ▾ $ -123.91 │  ▾ -134.1% │    $ 9,240 │    $ 9,393 │    $ 9,050 │ $ 100,336,858.18 │
│ Coinbase │    $ 9,120 │  ▲ $ 114.85 │  ▲ 124.37% │ $ 9,234.85 │ $ 9,386.31 │ $ 9,056.93 │  $ 60,991,360.82 │
│ HitBTC   │ $ 9,170.05 │         $ 0 │         0% │ $ 9,170.05 │ $ 9,398.39 │    $ 9,100 │  $ 56,968,995.14 │
│ itBit    │ $ 9,118.09 │ ▾ $ -128.91 │ ▾ -139.41% │    $ 9,247 │ $ 9,391.97 │ $ 9,051.74 │  $ 39,133,536.25 │
└──────────┴────────────┴─────────────┴────────────┴────────────┴────────────┴────────────┴──────────────────┘
";

    assert_eq!(rendered, expected);
}

#[test]
fn renders_small_precision_currencies() {
    let snapshot = PriceSnapshot::new(Pair::new("TRX", "USD"), "$".to_string());

    let rendered = render_report(&snapshot, &trx_quotes(), fetched_at(), false);

    let expected = "
Coin TRX  Base Currency USD  Time 01 April 2018 at 12:30:54 PM UTC

┌──────────┬─────────┬────────────┬────────────┬──────────┬──────────┬─────────┬─────────────────┐
│ Market   │   Price │   Chg. 24H │  Chg.% 24H │ Open 24H │ High 24H │ Low 24H │ Direct Vol. 24H │
├──────────┼─────────┼────────────┼────────────┼──────────┼──────────┼─────────┼─────────────────┤
│ Bitfinex │ $ 0.074 │ ▲ $ 0.0083 │ ▲ 1263.48% │  $ 0.066 │  $ 0.076 │ $ 0.065 │  $ 1,874,744.19 │
│ HitBTC   │ $ 0.075 │ ▲ $ 0.0087 │ ▲ 1313.71% │  $ 0.066 │  $ 0.076 │ $ 0.066 │  $ 1,007,006.56 │
│ Yobit    │ $ 0.078 │ ▲ $ 0.0092 │ ▲ 1347.84% │  $ 0.069 │  $ 0.079 │ $ 0.068 │     $ 44,741.07 │
│ BitFlip  │ $ 0.084 │   ▲ $ 0.01 │ ▲ 1351.35% │  $ 0.074 │  $ 0.084 │ $ 0.071 │        $ 922.52 │
└──────────┴─────────┴────────────┴────────────┴──────────┴──────────┴─────────┴─────────────────┘
";

    assert_eq!(rendered, expected);
}

#[test]
fn renders_header_only_for_empty_exchange_list() {
    let snapshot = PriceSnapshot::new(Pair::new("BTC", "USD"), "$".to_string());

    let rendered = render_report(&snapshot, &[], fetched_at(), false);

    let expected = "
Coin BTC  Base Currency USD  Time 01 April 2018 at 12:30:54 PM UTC

┌────────┬───────┬──────────┬───────────┬──────────┬──────────┬─────────┬─────────────────┐
│ Market │ Price │ Chg. 24H │ Chg.% 24H │ Open 24H │ High 24H │ Low 24H │ Direct Vol. 24H │
└────────┴───────┴──────────┴───────────┴──────────┴──────────┴─────────┴─────────────────┘
";

    assert_eq!(rendered, expected);
}

#[test]
fn rendering_is_deterministic() {
    let snapshot = PriceSnapshot::new(Pair::new("BTC", "USD"), "$".to_string());

    let first = render_report(&snapshot, &btc_quotes(), fetched_at(), false);
    let second = render_report(&snapshot, &btc_quotes(), fetched_at(), false);

    assert_eq!(first, second);
}

#[test]
fn colored_output_matches_plain_modulo_escapes() {
    // `colored` strips styling when stdout is not a tty, so force it on for
    // this comparison.
    colored::control::set_override(true);

    let snapshot = PriceSnapshot::new(Pair::new("BTC", "USD"), "$".to_string());

    let colored = render_report(&snapshot, &btc_quotes(), fetched_at(), true);
    let plain = render_report(&snapshot, &btc_quotes(), fetched_at(), false);

    assert!(colored.contains('\u{1b}'));
    assert_eq!(strip_ansi(&colored), plain);
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
