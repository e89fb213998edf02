use crate::types::DbId;

/// Expected, business-level failures.
///
/// Raised by handlers and repositories when a request fails a rule the
/// system understands, as opposed to defects (database faults, panics).
/// Each variant is a stable discriminator; the HTTP layer owns the mapping
/// from variant to wire status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A lookup came back absent.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a business rule.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An expected failure with no more specific variant.
    #[error("Internal error: {0}")]
    Internal(String),
}
