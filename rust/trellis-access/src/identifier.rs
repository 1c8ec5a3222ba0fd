use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::TrellisAccessError;

/// An opaque hierarchical resource path.
///
/// Identifiers form a tree: every identifier has a parent container, up to a
/// single root. How the hierarchy is laid out is the business of an
/// [`IdentifierStrategy`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    path: String,
}

impl ResourceIdentifier {
    /// Wrap the given path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The raw path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl From<&str> for ResourceIdentifier {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl Display for ResourceIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// Knows the container hierarchy of resource identifiers.
pub trait IdentifierStrategy: Send + Sync {
    /// Whether the identifier is the root container.
    fn is_root(&self, identifier: &ResourceIdentifier) -> bool;

    /// The parent container of the identifier.
    ///
    /// Asking for the parent of the root, or of an identifier outside this
    /// strategy's scope, is a caller bug and yields an internal error.
    fn parent_container(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, TrellisAccessError>;
}

/// Hierarchy strategy where all resources live under one root container and
/// containers end in a slash.
#[derive(Debug, Clone)]
pub struct SingleRootIdentifierStrategy {
    root: String,
}

impl SingleRootIdentifierStrategy {
    /// Use the given root container path (e.g. `http://test.com/`).
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        Self { root }
    }
}

impl IdentifierStrategy for SingleRootIdentifierStrategy {
    fn is_root(&self, identifier: &ResourceIdentifier) -> bool {
        identifier.path() == self.root
    }

    fn parent_container(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<ResourceIdentifier, TrellisAccessError> {
        if self.is_root(identifier) {
            return Err(TrellisAccessError::Internal(format!(
                "Root container {identifier} has no parent"
            )));
        }
        let path = identifier.path();
        if !path.starts_with(&self.root) {
            return Err(TrellisAccessError::Internal(format!(
                "{identifier} is not part of the hierarchy rooted at {}",
                self.root
            )));
        }
        // Containers end in a slash, so strip it before cutting the last step.
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let cut = trimmed.rfind('/').ok_or_else(|| {
            TrellisAccessError::Internal(format!("{identifier} has no parent container"))
        })?;
        Ok(ResourceIdentifier::new(&trimmed[..=cut]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_recognizes_the_root() {
        let strategy = SingleRootIdentifierStrategy::new("http://test.com/");
        assert!(strategy.is_root(&ResourceIdentifier::from("http://test.com/")));
        assert!(!strategy.is_root(&ResourceIdentifier::from("http://test.com/foo")));
    }

    #[test]
    fn it_steps_up_to_the_parent_container() {
        let strategy = SingleRootIdentifierStrategy::new("http://test.com/");
        assert_eq!(
            strategy
                .parent_container(&ResourceIdentifier::from("http://test.com/foo"))
                .unwrap(),
            ResourceIdentifier::from("http://test.com/")
        );
        assert_eq!(
            strategy
                .parent_container(&ResourceIdentifier::from("http://test.com/container/child/"))
                .unwrap(),
            ResourceIdentifier::from("http://test.com/container/")
        );
    }

    #[test]
    fn the_root_has_no_parent() {
        let strategy = SingleRootIdentifierStrategy::new("http://test.com/");
        let result = strategy.parent_container(&ResourceIdentifier::from("http://test.com/"));
        assert!(matches!(result, Err(TrellisAccessError::Internal(_))));
    }

    #[test]
    fn foreign_identifiers_are_rejected() {
        let strategy = SingleRootIdentifierStrategy::new("http://test.com/");
        let result = strategy.parent_container(&ResourceIdentifier::from("http://other.org/foo"));
        assert!(matches!(result, Err(TrellisAccessError::Internal(_))));
    }
}
