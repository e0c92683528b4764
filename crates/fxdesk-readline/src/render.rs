//! Text rendering of conversions and currency lists.

use chrono::{DateTime, Utc};
use fxdesk_core::conversion::Conversion;
use fxdesk_core::currency::Currency;

fn amount_in(code: &str, value: f64, currencies: &[Currency]) -> String {
    match currencies.iter().find(|c| c.short_code == code) {
        Some(currency) => currency.format_amount(value),
        None => format!("{} {}", value, code),
    }
}

pub fn quote_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// One line per conversion, e.g. `$100.00 = 85,50 € (2022-01-21 16:00 UTC)`.
pub fn conversion_line(conversion: &Conversion, currencies: &[Currency]) -> String {
    let quoted = conversion
        .quoted_at()
        .map(quote_time)
        .unwrap_or_else(|| conversion.date.clone());
    format!(
        "{} = {} ({})",
        amount_in(&conversion.from, conversion.amount, currencies),
        amount_in(&conversion.to, conversion.value, currencies),
        quoted
    )
}

pub fn currency_line(currency: &Currency) -> String {
    format!("{:<4} {:<3} {}", currency.short_code, currency.symbol, currency.name)
}
