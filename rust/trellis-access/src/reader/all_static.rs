use async_trait::async_trait;
use trellis_common::Applicability;
use trellis_credentials::{CredentialKind, CredentialSet};

use crate::{PermissionReader, Permissions, PermissionSet, ResourceIdentifier, TrellisAccessError};

/// Grants (or denies) the same constant permissions to every credential that
/// is present on the input, regardless of the resource being accessed.
///
/// Useful for fully open or fully locked-down deployments, and as a building
/// block in tests.
#[derive(Debug, Clone)]
pub struct AllStaticReader {
    permissions: Permissions,
}

impl AllStaticReader {
    /// Every access mode is set to `allow` for every present credential kind.
    pub fn new(allow: bool) -> Self {
        Self {
            permissions: Permissions::all(allow),
        }
    }
}

#[async_trait]
impl PermissionReader for AllStaticReader {
    async fn read(
        &self,
        _identifier: &ResourceIdentifier,
        credentials: &CredentialSet,
    ) -> Result<Applicability<PermissionSet>, TrellisAccessError> {
        let mut set = PermissionSet::default();
        for kind in CredentialKind::ALL {
            if credentials.get(kind).is_some() {
                set.set(kind, self.permissions);
            }
        }
        Ok(Applicability::Applicable(set))
    }
}
