//! HTTP plumbing shared by the backend clients.
//!
//! Requests are plain `reqwest::Request` values so that the interceptor
//! layer (token attachment, error classification) can inspect and rebuild
//! them before they reach the wire.

mod authenticated;
mod classifier;
mod token;

pub use authenticated::AuthenticatedTransport;
pub use classifier::ErrorClassifier;
pub use token::attach_token;

use async_trait::async_trait;
use fxdesk_core::{FxError, Result};
use reqwest::{Client, Request, StatusCode};
use std::sync::Arc;

/// A fully read HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Turns a non-success status into `FxError::Http`, keeping the body.
    pub fn error_for_status(self) -> Result<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(FxError::http(self.status.as_u16(), self.body))
        }
    }
}

/// Sends a request and returns the response, whatever its status.
///
/// Only a missing response (connection failure and the like) is an error at
/// this level.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Result<TransportResponse> {
        (**self).send(request).await
    }
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<TransportResponse> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| FxError::transport(format!("request failed: {err}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| FxError::transport(format!("failed to read response body: {err}")))?;

        Ok(TransportResponse { status, body })
    }
}
