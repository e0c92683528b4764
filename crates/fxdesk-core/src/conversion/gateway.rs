//! Conversion gateway trait.
//!
//! Defines the interface to the exchange-rate backend.

use super::model::Conversion;
use crate::currency::Currency;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the exchange-rate backend.
///
/// Every call is a fresh round trip: implementations must not retry, cache
/// or otherwise recover from failures. Errors are returned to the caller
/// exactly as received.
#[async_trait]
pub trait ConversionGateway: Send + Sync {
    /// Fetches the list of supported currencies.
    async fn list_currencies(&self) -> Result<Vec<Currency>>;

    /// Converts `amount` from `from` to `to`.
    ///
    /// # Arguments
    ///
    /// * `from` - Source currency short code
    /// * `to` - Target currency short code
    /// * `amount` - Signed amount, forwarded verbatim
    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Conversion>;
}

#[async_trait]
impl<G: ConversionGateway + ?Sized> ConversionGateway for std::sync::Arc<G> {
    async fn list_currencies(&self) -> Result<Vec<Currency>> {
        (**self).list_currencies().await
    }

    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Conversion> {
        (**self).convert(from, to, amount).await
    }
}
