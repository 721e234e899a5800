//! Magnitude-aware rounding and currency rendering.
//!
//! Quotes span several orders of magnitude within one table: BTC trades in
//! the thousands while many tokens trade in fractions of a cent. A flat
//! two-decimal rule would collapse 0.0083 to 0.01, so values below 1 keep
//! two significant fractional digits past the leading zeros instead.

/// Upper bound on fractional digits for vanishingly small values.
const MAX_FRACTION_DIGITS: u32 = 10;

fn fraction_digits(value: f64) -> u32 {
    let magnitude = value.abs();
    if magnitude == 0.0 || magnitude >= 1.0 {
        return 2;
    }
    let mut digits = 2;
    let mut scaled = magnitude;
    while scaled < 0.1 && digits < MAX_FRACTION_DIGITS {
        scaled *= 10.0;
        digits += 1;
    }
    digits
}

/// Rounds half away from zero to a currency-appropriate precision:
/// two decimals at magnitude >= 1, two significant fractional digits
/// below that (0.074 and 0.0083 survive unchanged).
pub fn round_to(value: f64) -> f64 {
    let factor = 10f64.powi(fraction_digits(value) as i32);
    (value * factor).round() / factor
}

/// Decimal string of the rounded value with trailing fractional zeros
/// trimmed; zero renders as "0", negatives keep their sign.
fn decimal_string(value: f64) -> String {
    let digits = fraction_digits(value) as usize;
    let mut rendered = format!("{:.*}", digits, round_to(value));
    if rendered.contains('.') {
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(trimmed);
    }
    if rendered == "-0" {
        rendered.remove(0);
    }
    rendered
}

/// Renders a monetary amount: rounded per [`round_to`], integer part
/// grouped with thousands separators.
pub fn format_currency(value: f64) -> String {
    let decimal = decimal_string(value);
    let (number, fraction) = match decimal.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (decimal.as_str(), None),
    };
    let (sign, int_part) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join(",");
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Renders a fractional 24h change as a percentage: multiplied by 100 and
/// rounded per [`round_to`], no thousands grouping (the pricing service
/// reports percent moves well past 1000%).
pub fn format_percent(fraction: f64) -> String {
    decimal_string(fraction * 100.0)
}
