use fxdesk_core::FxError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Inspects failed responses before they travel up to the caller.
///
/// A 401 is recorded as an authentication failure. No remediation happens
/// here; callers that want to react (re-login, token refresh) can watch
/// `unauthorized_count`. Every error is handed back unchanged.
#[derive(Debug, Default)]
pub struct ErrorClassifier {
    unauthorized: AtomicU64,
}

impl ErrorClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies `err` and returns it as-is.
    pub fn classify(&self, err: FxError) -> FxError {
        if err.is_unauthorized() {
            let total = self.unauthorized.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::warn!(
                "[ErrorClassifier] Backend rejected credentials (401), {} so far",
                total
            );
        }
        err
    }

    /// Number of authentication failures seen so far.
    pub fn unauthorized_count(&self) -> u64 {
        self.unauthorized.load(Ordering::Relaxed)
    }
}
