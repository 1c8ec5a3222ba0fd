use async_trait::async_trait;
use trellis_common::Applicability;

use crate::{CredentialSet, CredentialsExtractor, Request, TrellisCredentialsError};

/// Combines the results of several extractors into one [`CredentialSet`].
///
/// Extractors that report [`Applicability::NotApplicable`] are skipped. When
/// several extractors populate the same credential kind, the last successful
/// one wins wholesale; an extractor that leaves a kind absent never erases an
/// earlier value. If every extractor declines, the union declines too.
pub struct UnionCredentialsExtractor {
    extractors: Vec<Box<dyn CredentialsExtractor>>,
}

impl UnionCredentialsExtractor {
    /// Combine the given extractors, in order.
    pub fn new(extractors: Vec<Box<dyn CredentialsExtractor>>) -> Self {
        Self { extractors }
    }
}

#[async_trait]
impl CredentialsExtractor for UnionCredentialsExtractor {
    async fn extract(
        &self,
        request: &Request,
    ) -> Result<Applicability<CredentialSet>, TrellisCredentialsError> {
        let mut combined: Option<CredentialSet> = None;
        // Order matters here: later extractors override earlier ones.
        for extractor in &self.extractors {
            if let Applicability::Applicable(credentials) = extractor.extract(request).await? {
                combined
                    .get_or_insert_with(CredentialSet::default)
                    .overlay(credentials);
            }
        }
        Ok(match combined {
            Some(credentials) => Applicability::Applicable(credentials),
            None => Applicability::NotApplicable,
        })
    }
}
