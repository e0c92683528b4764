pub mod config;
pub mod conversion;
pub mod currency;
pub mod envelope;
pub mod error;
pub mod fault;
pub mod history;

// Re-export common error type
pub use error::{FxError, Result};
