use async_trait::async_trait;
use trellis_common::Applicability;
use trellis_credentials::CredentialSet;

use crate::{PermissionReader, PermissionSet, ResourceIdentifier, TrellisAccessError};

/// Combines the results of several readers into a single permission set.
///
/// Readers that report [`Applicability::NotApplicable`] are skipped; errors
/// from an applicable reader abort the whole read. When results are merged an
/// explicit `false` always wins over `true`, and `true` wins over an
/// undetermined mode.
pub struct UnionReader {
    readers: Vec<Box<dyn PermissionReader>>,
}

impl UnionReader {
    pub fn new(readers: Vec<Box<dyn PermissionReader>>) -> Self {
        Self { readers }
    }
}

#[async_trait]
impl PermissionReader for UnionReader {
    async fn read(
        &self,
        identifier: &ResourceIdentifier,
        credentials: &CredentialSet,
    ) -> Result<Applicability<PermissionSet>, TrellisAccessError> {
        let mut merged: Option<PermissionSet> = None;

        for reader in &self.readers {
            match reader.read(identifier, credentials).await? {
                Applicability::Applicable(set) => match merged.as_mut() {
                    Some(current) => current.combine(&set),
                    None => merged = Some(set),
                },
                Applicability::NotApplicable => continue,
            }
        }

        Ok(match merged {
            Some(set) => Applicability::Applicable(set),
            None => Applicability::NotApplicable,
        })
    }
}
