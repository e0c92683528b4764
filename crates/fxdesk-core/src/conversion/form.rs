//! Editable conversion form and its validation policy.

use super::model::ConversionRequest;

/// A single field edit. `None` clears the field.
#[derive(Debug, Clone, PartialEq)]
pub enum FormChange {
    From(Option<String>),
    To(Option<String>),
    Amount(Option<f64>),
}

/// Current, possibly partial, user input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionForm {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<f64>,
}

impl ConversionForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single field edit.
    pub fn apply(&mut self, change: FormChange) {
        match change {
            FormChange::From(code) => self.from = code,
            FormChange::To(code) => self.to = code,
            FormChange::Amount(amount) => self.amount = amount,
        }
    }

    /// Returns true when every field is present.
    pub fn is_valid(&self) -> bool {
        self.submission().is_some()
    }

    /// Builds the request for the current input.
    ///
    /// All three fields must be present and the codes non-empty. Nothing
    /// else is checked: codes are forwarded exactly as entered (padding
    /// included), and same-currency pairs, zero and negative amounts pass
    /// through.
    pub fn submission(&self) -> Option<ConversionRequest> {
        let from = present(self.from.as_deref())?;
        let to = present(self.to.as_deref())?;
        let amount = self.amount?;

        Some(ConversionRequest {
            from: from.to_string(),
            to: to.to_string(),
            amount,
        })
    }
}

fn present(code: Option<&str>) -> Option<&str> {
    code.filter(|code| !code.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(from: &str, to: &str, amount: f64) -> ConversionForm {
        let mut form = ConversionForm::new();
        form.apply(FormChange::From(Some(from.to_string())));
        form.apply(FormChange::To(Some(to.to_string())));
        form.apply(FormChange::Amount(Some(amount)));
        form
    }

    #[test]
    fn test_empty_form_is_invalid() {
        assert!(!ConversionForm::new().is_valid());
    }

    #[test]
    fn test_each_missing_field_invalidates() {
        let mut form = filled("USD", "EUR", 10.0);
        form.apply(FormChange::From(None));
        assert!(form.submission().is_none());

        let mut form = filled("USD", "EUR", 10.0);
        form.apply(FormChange::To(None));
        assert!(form.submission().is_none());

        let mut form = filled("USD", "EUR", 10.0);
        form.apply(FormChange::Amount(None));
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_empty_code_is_absent() {
        let form = filled("", "EUR", 10.0);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_codes_are_forwarded_verbatim() {
        let form = filled(" USD ", "   ", 1.0);
        let request = form.submission().unwrap();
        assert_eq!(request.from, " USD ");
        assert_eq!(request.to, "   ");

        let mut form = form;
        form.apply(FormChange::To(Some("EUR".to_string())));
        assert_eq!(form.submission().unwrap().from, " USD ");
    }

    #[test]
    fn test_boundary_values_are_accepted() {
        let request = filled("USD", "USD", 0.0).submission().unwrap();
        assert_eq!(request.from, request.to);
        assert_eq!(request.amount, 0.0);

        let request = filled("USD", "EUR", -50.0).submission().unwrap();
        assert_eq!(request.amount, -50.0);

        let request = filled("USD", "EUR", 1e15).submission().unwrap();
        assert_eq!(request.amount, 1e15);
    }
}
