use async_trait::async_trait;
use tracing::debug;
use trellis_common::Applicability;
use trellis_credentials::CredentialSet;

use crate::{
    AccessMode, AccountStore, Authorization, Authorizer, PermissionSet, Permissions,
    ResourceIdentifier, TrellisAccessError,
};

/// Grants pod owners control access over the resources in their own pod,
/// whatever the ACL documents say.
///
/// Only steps in for requests that ask for nothing but control access; all
/// other requests, and requests it cannot tie to an owned pod, are left to
/// the next authorizer in the chain. Account lookups that fail are treated
/// the same way rather than aborting the chain.
pub struct OwnershipAuthorizer<A: AccountStore> {
    account_store: A,
}

impl<A: AccountStore> OwnershipAuthorizer<A> {
    pub fn new(account_store: A) -> Self {
        Self { account_store }
    }
}

#[async_trait]
impl<A: AccountStore> Authorizer for OwnershipAuthorizer<A> {
    async fn authorize(
        &self,
        credentials: &CredentialSet,
        identifier: &ResourceIdentifier,
        required: &Permissions,
        _available: &PermissionSet,
    ) -> Result<Applicability<Authorization>, TrellisAccessError> {
        let non_control = [AccessMode::Read, AccessMode::Write, AccessMode::Append];
        if required.get(AccessMode::Control) != Some(true)
            || non_control.iter().any(|mode| required.get(*mode) == Some(true))
        {
            debug!("Ownership only applies to requests for control access alone");
            return Ok(Applicability::NotApplicable);
        }

        let Some(web_id) = credentials.web_id() else {
            debug!("Ownership of {identifier} cannot be established without a WebID");
            return Ok(Applicability::NotApplicable);
        };

        let settings = match self.account_store.get_settings(web_id).await {
            Ok(Some(settings)) => settings,
            Ok(None) | Err(_) => {
                debug!("No account found for {web_id}");
                return Ok(Applicability::NotApplicable);
            }
        };

        let Some(pod) = settings.pod_base_url else {
            debug!("Account of {web_id} has no pod");
            return Ok(Applicability::NotApplicable);
        };

        if !identifier.path().starts_with(&pod) {
            debug!("{identifier} is not part of the pod at {pod}");
            return Ok(Applicability::NotApplicable);
        }

        debug!("Granting {web_id} control access to {identifier} as pod owner");
        Ok(Applicability::Applicable(Authorization::default()))
    }
}
