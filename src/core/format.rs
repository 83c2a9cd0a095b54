//! Display formatting for rates and amounts. Never fails: anything that is not
//! a finite number is shown as [`PLACEHOLDER`].

pub const PLACEHOLDER: &str = "—";
pub const RATE_DECIMALS: usize = 4;
pub const AMOUNT_DECIMALS: usize = 2;

pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{value:.decimals$}")
    } else {
        PLACEHOLDER.to_string()
    }
}

pub fn format_rate(value: f64) -> String {
    format_fixed(value, RATE_DECIMALS)
}

pub fn format_amount(value: f64) -> String {
    format_fixed(value, AMOUNT_DECIMALS)
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format_fixed(v, decimals))
}

/// Parses a finite number, ignoring surrounding whitespace.
pub fn parse_rate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
