//! Display formatting helpers shared by the HTML and report renderers

use crate::store::{RepoRecord, Trend};

/// Escape text for HTML element content and quoted attributes
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `82000` -> `82,000`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Compact star display: `1234` -> `1.2k`, `999` -> `999`
///
/// Accepts raw counts with separators (`"12,345"`); anything that is not a
/// plain number (e.g. an already compact `"142k"`) passes through unchanged.
pub fn compact_stars(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '\u{ff0c}').collect();
    match cleaned.trim().parse::<u64>() {
        Ok(n) if n >= 1000 => format!("{:.1}k", n as f64 / 1000.0),
        Ok(n) => n.to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Zero-padded rank label: `1` -> `01`
pub fn rank_label(rank: u32) -> String {
    format!("{:02}", rank)
}

/// Short trend marker: `▲ 4`, `▼ 2`, or `–` for neutral (no magnitude)
pub fn trend_marker(repo: &RepoRecord) -> String {
    match repo.trend {
        Trend::Up => format!("\u{25b2} {}", repo.trend_value),
        Trend::Down => format!("\u{25bc} {}", repo.trend_value),
        Trend::Neutral => "\u{2013}".to_string(),
    }
}

/// CSS class for a trend badge
pub fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend trend-up",
        Trend::Down => "trend trend-down",
        Trend::Neutral => "trend trend-neutral",
    }
}

/// Round a layout coordinate to a percentage of `total`, 4 decimal places
pub fn percent(value: f64, total: f64) -> String {
    if total <= 0.0 {
        return "0%".to_string();
    }
    let pct = (value / total * 100.0 * 10_000.0).round() / 10_000.0;
    format!("{}%", pct)
}
