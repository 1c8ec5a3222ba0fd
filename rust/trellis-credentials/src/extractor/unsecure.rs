use async_trait::async_trait;
use tracing::info;
use trellis_common::Applicability;

use crate::{CredentialSet, Credentials, CredentialsExtractor, Request, TrellisCredentialsError};

/// Credentials extractor that authenticates a constant agent.
///
/// Useful for development or debugging purposes; the claimed identity is not
/// verified in any way, which is why every extraction logs it.
#[derive(Debug, Clone)]
pub struct UnsecureConstantCredentialsExtractor {
    credentials: CredentialSet,
}

impl UnsecureConstantCredentialsExtractor {
    /// Always claim the agent with the given WebID.
    pub fn new(web_id: impl Into<String>) -> Self {
        Self::from_credentials(Credentials::with_web_id(web_id))
    }

    /// Always claim the given agent credentials.
    pub fn from_credentials(agent: Credentials) -> Self {
        Self {
            credentials: CredentialSet {
                agent: Some(agent),
                everyone: None,
            },
        }
    }
}

#[async_trait]
impl CredentialsExtractor for UnsecureConstantCredentialsExtractor {
    async fn extract(
        &self,
        _request: &Request,
    ) -> Result<Applicability<CredentialSet>, TrellisCredentialsError> {
        if let Some(web_id) = self.credentials.web_id() {
            info!("Agent unsecurely claims to be {web_id}");
        }
        Ok(Applicability::Applicable(self.credentials.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn it_ignores_the_request_and_returns_the_configured_agent() {
        let extractor = UnsecureConstantCredentialsExtractor::new("http://test.com/#me");
        let request = Request::with_authorization("Bearer whatever");
        let extracted = extractor.extract(&request).await.unwrap();
        assert_eq!(
            extracted,
            Applicability::Applicable(CredentialSet::authenticated("http://test.com/#me"))
        );
    }

    #[tokio::test]
    async fn it_accepts_prebuilt_credentials() {
        let extractor =
            UnsecureConstantCredentialsExtractor::from_credentials(Credentials::default());
        let extracted = extractor.extract(&Request::default()).await.unwrap();
        assert_eq!(
            extracted,
            Applicability::Applicable(CredentialSet {
                agent: Some(Credentials::default()),
                everyone: None,
            })
        );
    }
}
