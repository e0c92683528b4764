//! Currency domain model.

use serde::{Deserialize, Serialize};

/// A tradable currency known to the backend.
///
/// Fetched once when the orchestrator starts and held for the rest of the
/// session. Field names follow the backend record shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: u64,
    /// Display name (e.g. "US Dollar").
    pub name: String,
    /// ISO 4217 short code (e.g. "USD").
    pub short_code: String,
    /// Numeric or alternate code as reported by the backend.
    pub code: String,
    /// Number of decimal places shown for amounts.
    pub precision: u32,
    /// Subunits per unit (100 for cents).
    pub subunit: u32,
    pub symbol: String,
    /// Whether the symbol is written before the amount.
    pub symbol_first: bool,
    pub decimal_mark: String,
    pub thousands_separator: String,
}

impl Currency {
    /// Formats `value` with this currency's precision, separators and symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxdesk_core::currency::Currency;
    ///
    /// let usd = Currency {
    ///     id: 1,
    ///     name: "US Dollar".into(),
    ///     short_code: "USD".into(),
    ///     code: "840".into(),
    ///     precision: 2,
    ///     subunit: 100,
    ///     symbol: "$".into(),
    ///     symbol_first: true,
    ///     decimal_mark: ".".into(),
    ///     thousands_separator: ",".into(),
    /// };
    /// assert_eq!(usd.format_amount(1234567.891), "$1,234,567.89");
    /// ```
    pub fn format_amount(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.precision as usize, value.abs());
        let (integer, fraction) = match fixed.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(digit);
        }

        let mut number = grouped;
        if let Some(fraction) = fraction {
            number.push_str(&self.decimal_mark);
            number.push_str(fraction);
        }

        // Rounding can turn a tiny negative into zero; never print "-0.00".
        let sign = if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };

        if self.symbol_first {
            format!("{sign}{}{number}", self.symbol)
        } else {
            format!("{sign}{number} {}", self.symbol)
        }
    }
}
