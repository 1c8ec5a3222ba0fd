use thiserror::Error;
use trellis_credentials::TrellisCredentialsError;

use crate::ResourceIdentifier;

/// The common error type used by this crate.
///
/// Every variant corresponds to an HTTP response class at the (external)
/// request boundary; see [`TrellisAccessError::status_code`]. Denials never
/// reveal whether the resource exists or which rules apply beyond the
/// 401/403 distinction.
#[derive(Debug, Error)]
pub enum TrellisAccessError {
    /// An unauthenticated requester lacks a required mode (HTTP 401 class).
    /// Authenticating may provide access.
    #[error("Access denied: credentials are required")]
    AnonymousDenied,

    /// An authenticated requester lacks a required mode, or access could not
    /// be granted at all (HTTP 403 class).
    #[error("Access denied: {0}")]
    AuthenticatedDenied(String),

    /// An ACL document fetch failed for a reason other than "not found"
    /// (HTTP 500 class).
    #[error("Error reading ACL for {identifier}: {source}")]
    StoreRead {
        /// The resource whose ACL document was being read.
        identifier: ResourceIdentifier,
        /// The underlying storage failure.
        source: StoreError,
    },

    /// A chain was exhausted without any member applying, or an internal
    /// contract was violated (HTTP 500 class). This signals a configuration
    /// mistake, never a denial.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Credential extraction failed.
    #[error(transparent)]
    Credentials(#[from] TrellisCredentialsError),
}

impl TrellisAccessError {
    /// The HTTP status code class this error maps to at the request boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            TrellisAccessError::AnonymousDenied => 401,
            TrellisAccessError::AuthenticatedDenied(_) => 403,
            TrellisAccessError::StoreRead { .. }
            | TrellisAccessError::Internal(_)
            | TrellisAccessError::Credentials(_) => 500,
        }
    }
}

/// Failures reported by a [`ResourceStore`](crate::ResourceStore) or
/// [`AccountStore`](crate::AccountStore).
///
/// `NotFound` is a distinct condition because the ACL resolution algorithm
/// reacts to it by walking up the container hierarchy; it is never surfaced
/// past that walk.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested resource does not exist.
    #[error("Resource not found: {0}")]
    NotFound(ResourceIdentifier),

    /// Any other storage failure.
    #[error("{0}")]
    Backend(String),
}
