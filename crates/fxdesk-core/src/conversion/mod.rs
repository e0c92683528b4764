//! Conversion domain module.
//!
//! # Module Structure
//!
//! - `model`: Completed `Conversion` results and the `ConversionRequest` built
//!   from a valid form
//! - `form`: The editable `ConversionForm` and its validation policy
//! - `gateway`: The `ConversionGateway` trait the backend client implements
//!
//! # Usage
//!
//! ```ignore
//! use fxdesk_core::conversion::{Conversion, ConversionForm, FormChange, ConversionGateway};
//! ```

mod form;
mod gateway;
mod model;

// Re-export public API
pub use form::{ConversionForm, FormChange};
pub use gateway::ConversionGateway;
pub use model::{Conversion, ConversionRequest};
