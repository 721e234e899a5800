use colored::Colorize;

/// Direction of a 24h price move, derived from the sign of the change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Semantic color of a trend cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrendColor {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    /// Direction glyph, if any. Flat moves render no glyph at all.
    pub fn glyph(&self) -> Option<&'static str> {
        match self {
            Trend::Up => Some("▲"),
            Trend::Down => Some("▾"),
            Trend::Flat => None,
        }
    }

    pub fn color(&self) -> TrendColor {
        match self {
            Trend::Up => TrendColor::Positive,
            Trend::Down => TrendColor::Negative,
            Trend::Flat => TrendColor::Neutral,
        }
    }
}

impl TrendColor {
    /// Applies the ANSI color for this category, or returns the text
    /// untouched when color output is disabled.
    pub fn paint(&self, text: &str, color: bool) -> String {
        if !color {
            return text.to_string();
        }
        match self {
            TrendColor::Positive => text.green().to_string(),
            TrendColor::Negative => text.red().to_string(),
            TrendColor::Neutral => text.to_string(),
        }
    }
}
