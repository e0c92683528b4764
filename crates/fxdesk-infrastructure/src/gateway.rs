//! HTTP implementation of the `ConversionGateway`.
//!
//! Talks to the two backend endpoints:
//!
//! - `GET /v1/currencies` → `{meta, response: Currency[]}`
//! - `GET /v1/convert?from=..&to=..&amount=..` → `{meta, response: Conversion}`

use crate::http::{Transport, TransportResponse};
use async_trait::async_trait;
use fxdesk_core::conversion::{Conversion, ConversionGateway};
use fxdesk_core::currency::Currency;
use fxdesk_core::envelope::Envelope;
use fxdesk_core::{FxError, Result};
use reqwest::{Method, Request, Url};
use serde::de::DeserializeOwned;

const CURRENCIES_PATH: &str = "v1/currencies";
const CONVERT_PATH: &str = "v1/convert";

/// Backend client over any `Transport`.
///
/// One request per call, no retries, no caching. Backend errors come back
/// as `FxError::Http` with the original status and body.
#[derive(Debug)]
pub struct HttpConversionGateway<T: Transport> {
    base_url: String,
    transport: T,
}

impl<T: Transport> HttpConversionGateway<T> {
    /// Creates a gateway for `base_url` (e.g. `https://rates.example.com`).
    pub fn new(base_url: &str, transport: T) -> Result<Self> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed)
            .map_err(|err| FxError::config(format!("invalid backend URL '{base_url}': {err}")))?;

        Ok(Self {
            base_url: trimmed.to_string(),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|err| FxError::config(format!("invalid endpoint '{path}': {err}")))
    }

    async fn get<P: DeserializeOwned>(&self, url: Url) -> Result<P> {
        tracing::debug!("[Gateway] GET {}", url.path());

        let response = self
            .transport
            .send(Request::new(Method::GET, url))
            .await?
            .error_for_status()?;

        decode(response)
    }
}

fn decode<P: DeserializeOwned>(response: TransportResponse) -> Result<P> {
    let envelope: Envelope<P> = serde_json::from_str(&response.body)?;
    Ok(envelope.into_response())
}

#[async_trait]
impl<T: Transport> ConversionGateway for HttpConversionGateway<T> {
    async fn list_currencies(&self) -> Result<Vec<Currency>> {
        let url = self.endpoint(CURRENCIES_PATH)?;
        self.get(url).await
    }

    async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<Conversion> {
        let mut url = self.endpoint(CONVERT_PATH)?;
        // f64 Display never uses exponent notation: 50.75, -50, 0
        url.query_pairs_mut()
            .append_pair("from", from)
            .append_pair("to", to)
            .append_pair("amount", &amount.to_string());

        self.get(url).await
    }
}
