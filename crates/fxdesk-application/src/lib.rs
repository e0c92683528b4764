pub mod fault_reporter;
pub mod history_view;
pub mod notice_board;
pub mod orchestrator;

pub use fault_reporter::GlobalFaultReporter;
pub use history_view::LastConversions;
pub use notice_board::NoticeBoard;
pub use orchestrator::{ConversionOrchestrator, DEFAULT_QUIET_PERIOD, OrchestratorState};
