use async_trait::async_trait;
use tracing::{debug, warn};
use trellis_common::Applicability;
use trellis_credentials::{CredentialKind, CredentialSet};

use crate::{
    Authorization, Authorizer, PermissionSet, Permissions, ResourceIdentifier, TrellisAccessError,
};

/// Grants a request exactly when every required mode is available.
///
/// Denials distinguish between missing and insufficient credentials, so that
/// an unauthenticated requester is invited to authenticate while an
/// authenticated one is refused outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionBasedAuthorizer;

#[async_trait]
impl Authorizer for PermissionBasedAuthorizer {
    async fn authorize(
        &self,
        credentials: &CredentialSet,
        identifier: &ResourceIdentifier,
        required: &Permissions,
        available: &PermissionSet,
    ) -> Result<Applicability<Authorization>, TrellisAccessError> {
        for mode in required.granted() {
            if !available.grants(mode) {
                warn!("Permission {mode} requested on {identifier}, but not granted");
                return Err(if credentials.is_authenticated() {
                    TrellisAccessError::AuthenticatedDenied(format!(
                        "Missing {mode} permission on {identifier}"
                    ))
                } else {
                    TrellisAccessError::AnonymousDenied
                });
            }
        }

        debug!("Authorization succeeded for {identifier}");
        let user = available
            .get(CredentialKind::Agent)
            .copied()
            .unwrap_or_default();
        let public = available
            .get(CredentialKind::Everyone)
            .copied()
            .unwrap_or_default();
        Ok(Applicability::Applicable(Authorization::new(user, public)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::AccessMode;

    fn available(agent: Permissions, everyone: Permissions) -> PermissionSet {
        PermissionSet {
            agent: Some(agent),
            everyone: Some(everyone),
        }
    }

    fn required(modes: &[AccessMode]) -> Permissions {
        let mut permissions = Permissions::default();
        for mode in modes {
            permissions.grant(*mode);
        }
        permissions
    }

    #[tokio::test]
    async fn allows_a_request_with_sufficient_permissions() -> anyhow::Result<()> {
        let authorizer = PermissionBasedAuthorizer;
        let mut agent = Permissions::default();
        agent.grant(AccessMode::Read);
        agent.grant(AccessMode::Write);

        let result = authorizer
            .authorize(
                &CredentialSet::authenticated("http://test.com/#me"),
                &ResourceIdentifier::from("http://test.com/foo"),
                &required(&[AccessMode::Read]),
                &available(agent, Permissions::default()),
            )
            .await?
            .into_option()
            .unwrap();

        assert_eq!(result.user, agent);
        assert_eq!(result.public, Permissions::default());
        Ok(())
    }

    #[tokio::test]
    async fn allows_a_request_requiring_nothing() -> anyhow::Result<()> {
        let authorizer = PermissionBasedAuthorizer;
        let result = authorizer
            .authorize(
                &CredentialSet::public(),
                &ResourceIdentifier::from("http://test.com/foo"),
                &Permissions::default(),
                &PermissionSet::default(),
            )
            .await?;
        assert!(result.is_applicable());
        Ok(())
    }

    #[tokio::test]
    async fn denies_anonymous_requests_with_a_credentials_prompt() {
        let authorizer = PermissionBasedAuthorizer;
        let result = authorizer
            .authorize(
                &CredentialSet::public(),
                &ResourceIdentifier::from("http://test.com/foo"),
                &required(&[AccessMode::Read]),
                &PermissionSet::default(),
            )
            .await;
        assert!(matches!(result, Err(TrellisAccessError::AnonymousDenied)));
    }

    #[tokio::test]
    async fn denies_authenticated_requests_outright() {
        let authorizer = PermissionBasedAuthorizer;
        let mut agent = Permissions::default();
        agent.grant(AccessMode::Read);

        let result = authorizer
            .authorize(
                &CredentialSet::authenticated("http://test.com/#me"),
                &ResourceIdentifier::from("http://test.com/foo"),
                &required(&[AccessMode::Read, AccessMode::Write]),
                &available(agent, Permissions::default()),
            )
            .await;
        match result {
            Err(TrellisAccessError::AuthenticatedDenied(reason)) => {
                assert!(reason.contains("write"));
            }
            other => panic!("expected a denial, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_public_grant_satisfies_an_authenticated_request() -> anyhow::Result<()> {
        let authorizer = PermissionBasedAuthorizer;
        let mut everyone = Permissions::default();
        everyone.grant(AccessMode::Read);

        let result = authorizer
            .authorize(
                &CredentialSet::authenticated("http://test.com/#me"),
                &ResourceIdentifier::from("http://test.com/foo"),
                &required(&[AccessMode::Read]),
                &available(Permissions::default(), everyone),
            )
            .await?;
        assert!(result.is_applicable());
        Ok(())
    }
}
