//! Fault handling and user notification traits.

use crate::error::Result;
use std::fmt::Debug;
use std::time::Duration;

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Label of the dismiss action.
    pub action: String,
    /// How long the notice stays visible.
    pub duration: Duration,
}

/// Shows transient notifications to the user.
pub trait Notifier: Send + Sync {
    /// Shows `message` for `duration` with a dismiss action labelled `action`.
    fn open(&self, message: &str, action: &str, duration: Duration) -> Result<()>;
}

/// Top-level sink for failures nobody handled locally.
///
/// Any value with a `Debug` rendering is accepted: error values, strings,
/// `None`, `()`, JSON objects. Implementations must not interpret the
/// fault's shape to decide whether to report it.
pub trait FaultHandler: Send + Sync {
    /// Reports a fault. An `Err` means the reporting itself failed.
    fn handle_fault(&self, fault: &dyn Debug) -> Result<()>;
}
