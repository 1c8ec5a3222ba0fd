use async_trait::async_trait;
use trellis_common::Applicability;

use crate::{CredentialSet, Request, TrellisCredentialsError};

mod empty;
pub use empty::*;

mod unsecure;
pub use unsecure::*;

mod union;
pub use union::*;

/// Pulls a [`CredentialSet`] out of an inbound request.
///
/// An extractor that cannot interpret the request's authentication material
/// reports [`Applicability::NotApplicable`] so the caller can try the next
/// extractor in its chain; errors are reserved for material that was
/// recognized but turned out to be bad.
#[async_trait]
pub trait CredentialsExtractor: Send + Sync {
    /// Attempt to interpret the request's authentication material.
    async fn extract(
        &self,
        request: &Request,
    ) -> Result<Applicability<CredentialSet>, TrellisCredentialsError>;
}
