use thiserror::Error;

/// The common error type used by this crate.
#[derive(Debug, Error)]
pub enum TrellisCredentialsError {
    /// Authentication material was recognized but could not be interpreted
    /// or verified. Propagates unchanged through extractor unions.
    #[error("Failed to interpret authorization material: {0}")]
    Unverifiable(String),
}
