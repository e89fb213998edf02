//! Transport-free building blocks for the VVV backend.
//!
//! Everything here is usable without a database or HTTP server: the response
//! envelope every endpoint returns, the timing/logging wrapper applied to
//! handler bodies, the domain error type, and shared type aliases.

pub mod envelope;
pub mod error;
pub mod instrument;
pub mod types;
