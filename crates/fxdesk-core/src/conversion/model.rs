//! Conversion domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed conversion as returned by the backend.
///
/// Created once from a backend response and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Epoch seconds at which the rate was quoted.
    pub timestamp: i64,
    /// ISO date of the quote (e.g. "2022-01-21").
    pub date: String,
    pub from: String,
    pub to: String,
    /// The input amount.
    pub amount: f64,
    /// The converted amount.
    pub value: f64,
}

impl Conversion {
    /// Returns the quote time, if the timestamp is representable.
    pub fn quoted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// User intent captured from a valid form at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_record() {
        let json = r#"{"timestamp":1642780800,"date":"2022-01-21","from":"USD","to":"EUR","amount":100,"value":85.50}"#;
        let conversion: Conversion = serde_json::from_str(json).unwrap();

        assert_eq!(conversion.from, "USD");
        assert_eq!(conversion.to, "EUR");
        assert_eq!(conversion.amount, 100.0);
        assert_eq!(conversion.value, 85.5);
    }

    #[test]
    fn test_quoted_at() {
        let conversion = Conversion {
            timestamp: 1642780800,
            date: "2022-01-21".to_string(),
            from: "USD".to_string(),
            to: "EUR".to_string(),
            amount: 100.0,
            value: 85.5,
        };
        let quoted = conversion.quoted_at().unwrap();
        assert_eq!(quoted.format("%Y-%m-%d").to_string(), "2022-01-21");
    }
}
