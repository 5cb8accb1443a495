//! Query-parameter binding subsystem.
//!
//! # Data Flow
//! ```text
//! ?api:page=2&api:query=... (raw, multi-valued)
//!     → extract.rs (decode, type raw values)
//!     → params.rs parser trait (validate into QueryParameters)
//!     → handler argument, or a structured 400 on rejection
//! ```
//!
//! # Design Decisions
//! - Defaults and bounds live in an immutable config struct handed to
//!   the extractor state, never in module-level statics
//! - The expression grammar behind api:query/api:aggregation is owned
//!   by the parser implementation, not this crate

pub mod extract;
pub mod params;

pub use extract::QueryParametersProviderState;
pub use params::{
    BasicQueryParametersParser, InvalidParameterError, QueryParameter, QueryParameters,
    QueryParametersParser, RawQueryParameters,
};
