use fxdesk_core::conversion::Conversion;
use fxdesk_core::history::ConversionHistory;

/// Read-only view over the most recent conversions.
pub struct LastConversions {
    history: ConversionHistory,
    take: i64,
}

impl LastConversions {
    pub fn new(history: ConversionHistory, take: i64) -> Self {
        Self { history, take }
    }

    pub fn take(&self) -> i64 {
        self.take
    }

    pub fn set_take(&mut self, take: i64) {
        self.take = take;
    }

    /// The last `take` conversions, most recent first.
    pub async fn last_conversions(&self) -> Vec<Conversion> {
        self.history.recent(self.take).await
    }
}
