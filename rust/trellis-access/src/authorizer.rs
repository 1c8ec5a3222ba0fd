use async_trait::async_trait;
use trellis_common::Applicability;
use trellis_credentials::CredentialSet;

use crate::{
    Metadata, PermissionMetadataWriter, PermissionSet, Permissions, ResourceIdentifier,
    TrellisAccessError, WacMetadataWriter,
};

mod ownership;
pub use ownership::*;

mod permission_based;
pub use permission_based::*;

/// The positive outcome of an authorization: the request may proceed.
///
/// Carries the permissions that were established for the requesting agent
/// and for the public audience, so that handlers further along can expose
/// them as response metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorization {
    /// Permissions established for the requesting agent.
    pub user: Permissions,
    /// Permissions established for the public audience.
    pub public: Permissions,
}

impl Authorization {
    pub fn new(user: Permissions, public: Permissions) -> Self {
        Self { user, public }
    }

    /// Expose the established permissions as resource metadata, using the
    /// default metadata writer.
    pub fn add_metadata(&self, metadata: &mut Metadata) {
        let set = PermissionSet {
            agent: Some(self.user),
            everyone: Some(self.public),
        };
        WacMetadataWriter.annotate(metadata, &set);
    }
}

/// Makes the final access decision for a request.
///
/// Authorizers form a chain: one that cannot judge the input reports
/// [`Applicability::NotApplicable`] and the next one is consulted. An
/// applicable authorizer either returns an [`Authorization`] or denies the
/// request with a [`TrellisAccessError`].
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Judge whether `credentials` may perform the `required` modes on
    /// `identifier`, given the `available` permissions.
    async fn authorize(
        &self,
        credentials: &CredentialSet,
        identifier: &ResourceIdentifier,
        required: &Permissions,
        available: &PermissionSet,
    ) -> Result<Applicability<Authorization>, TrellisAccessError>;
}
