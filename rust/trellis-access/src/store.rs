use async_trait::async_trait;
use std::collections::HashMap;

use crate::{Graph, Metadata, ResourceIdentifier, StoreError};

/// A stored resource as handed over by the resource store: its metadata and
/// its data as a queryable graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Representation {
    /// Metadata describing the resource.
    pub metadata: Metadata,
    /// The resource content, interpreted as triples.
    pub data: Graph,
}

impl Representation {
    /// A representation wrapping the given graph, without metadata.
    pub fn from_graph(data: Graph) -> Self {
        Self {
            metadata: Metadata::new(),
            data,
        }
    }
}

/// Retrieves stored resources.
///
/// The access-control core only ever fetches ACL documents through this
/// trait; the actual storage layer lives outside it. Implementations must
/// report a missing resource as [`StoreError::NotFound`], distinct from any
/// other failure, because the ACL resolution algorithm reacts to the two
/// cases differently.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Fetch the representation stored for `identifier`.
    async fn get_representation(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<Representation, StoreError>;
}

/// In-memory resource store, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceStore {
    resources: HashMap<ResourceIdentifier, Representation>,
}

impl InMemoryResourceStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a representation under the given identifier.
    pub fn insert(&mut self, identifier: ResourceIdentifier, representation: Representation) {
        self.resources.insert(identifier, representation);
    }
}

#[async_trait]
impl ResourceStore for InMemoryResourceStore {
    async fn get_representation(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<Representation, StoreError> {
        self.resources
            .get(identifier)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(identifier.clone()))
    }
}
