//! Session-lifetime conversion history.

use crate::conversion::Conversion;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Append-only, insertion-ordered list of completed conversions.
///
/// Cloning the handle shares the same underlying list, so the orchestrator
/// (writer) and any history view (reader) observe one store per session.
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    entries: Arc<RwLock<Vec<Conversion>>>,
}

impl ConversionHistory {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a conversion at the end.
    pub async fn append(&self, conversion: Conversion) {
        let mut entries = self.entries.write().await;
        entries.push(conversion);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Returns a copy of all entries in insertion order.
    pub async fn snapshot(&self) -> Vec<Conversion> {
        self.entries.read().await.clone()
    }

    /// Returns the `take` most recent entries, most recent first.
    pub async fn recent(&self, take: i64) -> Vec<Conversion> {
        let entries = self.entries.read().await;
        recent_conversions(&entries, take)
    }
}

/// Returns the last `take` entries of `entries`, most recent first.
///
/// A non-positive `take` yields nothing. The result is always a fresh
/// vector; `entries` is never modified.
pub fn recent_conversions(entries: &[Conversion], take: i64) -> Vec<Conversion> {
    if take <= 0 {
        return Vec::new();
    }
    let take = usize::try_from(take).unwrap_or(usize::MAX);
    let start = entries.len().saturating_sub(take);
    entries[start..].iter().rev().cloned().collect()
}
