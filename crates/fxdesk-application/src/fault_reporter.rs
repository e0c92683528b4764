//! Process-wide reporter for failures nobody handled locally.

use fxdesk_core::Result;
use fxdesk_core::fault::{FaultHandler, Notifier};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;

pub const FAULT_LOG_PREFIX: &str = "[GlobalErrorHandler]";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const CLOSE_LABEL: &str = "Close";
pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

/// Logs every fault and shows the fixed error notice.
///
/// Created once in the composition root and shared by `Arc` with every
/// component that can fail. The fault type is not inspected:
/// HTTP failures, transport failures and anything else get the same log
/// line and the same notice. Differentiating by kind belongs here when it
/// is needed.
pub struct GlobalFaultReporter {
    notifier: Arc<dyn Notifier>,
}

impl GlobalFaultReporter {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

impl FaultHandler for GlobalFaultReporter {
    fn handle_fault(&self, fault: &dyn Debug) -> Result<()> {
        tracing::error!(target: "fxdesk::fault", "{} {:?}", FAULT_LOG_PREFIX, fault);
        self.notifier.open(ERROR_MESSAGE, CLOSE_LABEL, NOTICE_DURATION)
    }
}
