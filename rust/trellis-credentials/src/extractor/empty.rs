use async_trait::async_trait;
use trellis_common::Applicability;

use crate::{CredentialSet, CredentialsExtractor, Request, TrellisCredentialsError};

/// Extracts the empty credentials, indicating an unauthenticated agent.
///
/// Defers to a more specific extractor whenever an `Authorization` header is
/// present.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCredentialsExtractor;

#[async_trait]
impl CredentialsExtractor for EmptyCredentialsExtractor {
    async fn extract(
        &self,
        request: &Request,
    ) -> Result<Applicability<CredentialSet>, TrellisCredentialsError> {
        if request.authorization.is_some() {
            return Ok(Applicability::NotApplicable);
        }
        Ok(Applicability::Applicable(CredentialSet::public()))
    }
}
