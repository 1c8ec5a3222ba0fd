use tracing::debug;
use trellis_common::Applicability;
use trellis_credentials::{CredentialSet, CredentialsExtractor, Request};

use crate::{
    Authorization, Authorizer, Metadata, PermissionReader, PermissionSet, Permissions,
    ResourceIdentifier, TrellisAccessError,
};

/// Everything established while deciding one request.
///
/// The surrounding operation handler receives this after a successful
/// authorization and can use it to annotate its response; it is discarded
/// when the request ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Who asked.
    pub credentials: CredentialSet,
    /// The permissions that were available for the target.
    pub permissions: PermissionSet,
    /// The positive outcome rendered by the deciding authorizer.
    pub authorization: Authorization,
}

impl Decision {
    /// Expose the granted modes as response metadata.
    pub fn annotate(&self, metadata: &mut Metadata) {
        self.authorization.add_metadata(metadata);
    }
}

/// Per-request orchestration of the three chains: extract credentials, read
/// the available permissions, then let the first applicable authorizer
/// decide.
///
/// The extractor and reader handed in are usually unions over several
/// members; the authorizers are tried here in the configured order, so an
/// override like [`OwnershipAuthorizer`](crate::OwnershipAuthorizer) must be
/// listed before the generic [`PermissionBasedAuthorizer`](crate::PermissionBasedAuthorizer)
/// it shadows. A chain that runs out of members signals a configuration
/// mistake, never a denial.
pub struct AccessEngine<E, R>
where
    E: CredentialsExtractor,
    R: PermissionReader,
{
    extractor: E,
    reader: R,
    authorizers: Vec<Box<dyn Authorizer>>,
}

impl<E, R> AccessEngine<E, R>
where
    E: CredentialsExtractor,
    R: PermissionReader,
{
    pub fn new(extractor: E, reader: R, authorizers: Vec<Box<dyn Authorizer>>) -> Self {
        Self {
            extractor,
            reader,
            authorizers,
        }
    }

    /// Decide whether `request` may perform the `required` modes on
    /// `identifier`.
    pub async fn authorize(
        &self,
        request: &Request,
        identifier: &ResourceIdentifier,
        required: &Permissions,
    ) -> Result<Decision, TrellisAccessError> {
        let credentials = match self.extractor.extract(request).await? {
            Applicability::Applicable(credentials) => credentials,
            Applicability::NotApplicable => {
                return Err(TrellisAccessError::Internal(
                    "No extractor can handle the request's credentials".into(),
                ));
            }
        };
        debug!("Extracted credentials: {credentials:?}");

        let permissions = match self.reader.read(identifier, &credentials).await? {
            Applicability::Applicable(permissions) => permissions,
            Applicability::NotApplicable => {
                return Err(TrellisAccessError::Internal(format!(
                    "No permission reader can handle {identifier}"
                )));
            }
        };
        debug!("Available permissions for {identifier}: {permissions:?}");

        for authorizer in &self.authorizers {
            if let Applicability::Applicable(authorization) = authorizer
                .authorize(&credentials, identifier, required, &permissions)
                .await?
            {
                return Ok(Decision {
                    credentials,
                    permissions,
                    authorization,
                });
            }
        }
        Err(TrellisAccessError::Internal(format!(
            "No authorizer can decide the request for {identifier}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use trellis_credentials::{Credentials, EmptyCredentialsExtractor, TrellisCredentialsError};

    use super::*;
    use crate::{AccessMode, AllStaticReader, PermissionBasedAuthorizer, vocab::auth};

    /// Claims an authenticated agent on top of the public audience.
    struct Claimed;

    #[async_trait]
    impl CredentialsExtractor for Claimed {
        async fn extract(
            &self,
            _request: &Request,
        ) -> Result<Applicability<CredentialSet>, TrellisCredentialsError> {
            let mut credentials = CredentialSet::authenticated("http://test.com/#me");
            credentials.everyone = Some(Credentials::default());
            Ok(Applicability::Applicable(credentials))
        }
    }

    struct Refusing;

    #[async_trait]
    impl CredentialsExtractor for Refusing {
        async fn extract(
            &self,
            _request: &Request,
        ) -> Result<Applicability<CredentialSet>, TrellisCredentialsError> {
            Ok(Applicability::NotApplicable)
        }
    }

    fn read_required() -> Permissions {
        let mut required = Permissions::default();
        required.grant(AccessMode::Read);
        required
    }

    #[tokio::test]
    async fn it_runs_the_full_pipeline() -> anyhow::Result<()> {
        let engine = AccessEngine::new(
            Claimed,
            AllStaticReader::new(true),
            vec![Box::new(PermissionBasedAuthorizer)],
        );

        let decision = engine
            .authorize(
                &Request::default(),
                &ResourceIdentifier::from("http://test.com/foo"),
                &read_required(),
            )
            .await?;

        assert_eq!(decision.credentials.web_id(), Some("http://test.com/#me"));
        assert_eq!(decision.permissions.agent, Some(Permissions::all(true)));
        assert_eq!(decision.permissions.everyone, Some(Permissions::all(true)));

        let mut metadata = Metadata::new();
        decision.annotate(&mut metadata);
        assert!(metadata.all(auth::USER_MODE).next().is_some());
        assert!(metadata.all(auth::PUBLIC_MODE).next().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn denials_pass_through_unchanged() {
        let engine = AccessEngine::new(
            EmptyCredentialsExtractor,
            AllStaticReader::new(false),
            vec![Box::new(PermissionBasedAuthorizer)],
        );

        let result = engine
            .authorize(
                &Request::default(),
                &ResourceIdentifier::from("http://test.com/foo"),
                &read_required(),
            )
            .await;
        assert!(matches!(result, Err(TrellisAccessError::AnonymousDenied)));
    }

    #[tokio::test]
    async fn an_exhausted_extractor_chain_is_a_configuration_error() {
        let engine = AccessEngine::new(
            Refusing,
            AllStaticReader::new(true),
            vec![Box::new(PermissionBasedAuthorizer)],
        );

        let result = engine
            .authorize(
                &Request::default(),
                &ResourceIdentifier::from("http://test.com/foo"),
                &read_required(),
            )
            .await;
        match result {
            Err(error @ TrellisAccessError::Internal(_)) => {
                assert_eq!(error.status_code(), 500);
            }
            other => panic!("expected an internal error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn an_empty_authorizer_list_is_a_configuration_error() {
        let engine = AccessEngine::new(
            EmptyCredentialsExtractor,
            AllStaticReader::new(true),
            Vec::new(),
        );

        let result = engine
            .authorize(
                &Request::default(),
                &ResourceIdentifier::from("http://test.com/foo"),
                &read_required(),
            )
            .await;
        assert!(matches!(result, Err(TrellisAccessError::Internal(_))));
    }
}
