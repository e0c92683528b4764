//! The `{meta, response}` wrapper around every backend payload.

use serde::{Deserialize, Serialize};

/// Response metadata attached by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub code: Option<u16>,
    pub disclaimer: Option<String>,
}

/// A backend response; `response` carries the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub meta: Meta,
    pub response: T,
}

impl<T> Envelope<T> {
    /// Discards the metadata and returns the payload.
    pub fn into_response(self) -> T {
        self.response
    }
}
