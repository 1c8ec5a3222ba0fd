use crate::ResourceIdentifier;

/// Maps a resource identifier to its ACL companion identifier and back.
///
/// The ACL document of a resource is an auxiliary resource with its own
/// identifier; permission readers use this mapping to locate it and to
/// recognize requests that target an ACL document itself.
pub trait AuxiliaryIdentifierStrategy: Send + Sync {
    /// The identifier of the ACL companion of `identifier`.
    fn auxiliary_identifier(&self, identifier: &ResourceIdentifier) -> ResourceIdentifier;

    /// Whether `identifier` already names an ACL companion.
    fn is_auxiliary_identifier(&self, identifier: &ResourceIdentifier) -> bool;

    /// The resource an ACL companion belongs to. Non-auxiliary identifiers
    /// are returned unchanged.
    fn associated_identifier(&self, identifier: &ResourceIdentifier) -> ResourceIdentifier;
}

/// Auxiliary strategy appending a fixed suffix to the resource path.
#[derive(Debug, Clone)]
pub struct SuffixAuxiliaryStrategy {
    suffix: String,
}

impl SuffixAuxiliaryStrategy {
    /// Use the given suffix (e.g. `.acl`).
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixAuxiliaryStrategy {
    fn default() -> Self {
        Self::new(".acl")
    }
}

impl AuxiliaryIdentifierStrategy for SuffixAuxiliaryStrategy {
    fn auxiliary_identifier(&self, identifier: &ResourceIdentifier) -> ResourceIdentifier {
        ResourceIdentifier::new(format!("{}{}", identifier.path(), self.suffix))
    }

    fn is_auxiliary_identifier(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path().ends_with(&self.suffix)
    }

    fn associated_identifier(&self, identifier: &ResourceIdentifier) -> ResourceIdentifier {
        match identifier.path().strip_suffix(&self.suffix) {
            Some(path) => ResourceIdentifier::new(path),
            None => identifier.clone(),
        }
    }
}
