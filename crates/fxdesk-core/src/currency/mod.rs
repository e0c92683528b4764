//! Currency domain module.
//!
//! # Module Structure
//!
//! - `model`: The `Currency` record as served by the backend, plus display
//!   formatting of amounts in that currency
//!
//! # Usage
//!
//! ```ignore
//! use fxdesk_core::currency::Currency;
//! ```

mod model;

// Re-export public API
pub use model::Currency;
