//! HTTP support subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → middleware/info_headers.rs (stamp request id)
//!     → middleware/domain_rewrite.rs (inject tenant domain into the path)
//!     → [route matching and handlers, owned by the host application]
//!     → error.rs (structured error payloads on rejection)
//! ```

pub mod error;
pub mod middleware;

pub use error::{ApiError, ErrorBody};
