use async_trait::async_trait;
use trellis_common::Applicability;
use trellis_credentials::CredentialSet;

use crate::{PermissionSet, ResourceIdentifier, TrellisAccessError};

mod all_static;
pub use all_static::*;

mod union;
pub use union::*;

mod web_acl;
pub use web_acl::*;

/// Computes the available [`PermissionSet`] for one target resource and one
/// set of credentials.
///
/// Readers form a chain: a reader that has nothing to say about an input
/// reports [`Applicability::NotApplicable`] and the dispatcher (typically a
/// [`UnionReader`]) moves on. A permission set is computed fresh per
/// (identifier, credentials) pair and never cached here.
#[async_trait]
pub trait PermissionReader: Send + Sync {
    /// Determine the permissions available on `identifier` for `credentials`.
    async fn read(
        &self,
        identifier: &ResourceIdentifier,
        credentials: &CredentialSet,
    ) -> Result<Applicability<PermissionSet>, TrellisAccessError>;
}
