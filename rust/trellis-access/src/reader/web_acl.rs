use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::debug;
use trellis_common::Applicability;
use trellis_credentials::{CredentialKind, CredentialSet, Credentials};

use crate::{
    AccessChecker, AccessRule, AuxiliaryIdentifierStrategy, Graph, IdentifierStrategy,
    PermissionReader, PermissionSet, Permissions, ResourceIdentifier, ResourceStore, StoreError,
    TrellisAccessError,
};

/// Reads permissions from Web Access Control documents.
///
/// Every resource may have an ACL companion document; when a resource has
/// none, the nearest ancestor container that does supplies the rules through
/// `acl:default`. Rules on a resource's own ACL document apply through
/// `acl:accessTo` instead. Which credentials a rule covers is delegated to
/// an [`AccessChecker`].
pub struct WebAclReader<S, X, I, C>
where
    S: ResourceStore,
    X: AuxiliaryIdentifierStrategy,
    I: IdentifierStrategy,
    C: AccessChecker,
{
    store: S,
    auxiliary: X,
    identifiers: I,
    checker: C,
}

/// The ACL document found for a lookup, together with the resource it
/// belongs to. When `owner` differs from the lookup target the document was
/// inherited from an ancestor container.
struct AclLookup {
    graph: Graph,
    owner: ResourceIdentifier,
}

impl<S, X, I, C> WebAclReader<S, X, I, C>
where
    S: ResourceStore,
    X: AuxiliaryIdentifierStrategy,
    I: IdentifierStrategy,
    C: AccessChecker,
{
    pub fn new(store: S, auxiliary: X, identifiers: I, checker: C) -> Self {
        Self {
            store,
            auxiliary,
            identifiers,
            checker,
        }
    }

    /// Walk up the container hierarchy until a stored ACL document turns up.
    async fn fetch_acl(
        &self,
        identifier: &ResourceIdentifier,
    ) -> Result<AclLookup, TrellisAccessError> {
        let mut current = identifier.clone();
        loop {
            let acl = self.auxiliary.auxiliary_identifier(&current);
            match self.store.get_representation(&acl).await {
                Ok(representation) => {
                    debug!("Found applicable ACL document {acl}");
                    return Ok(AclLookup {
                        graph: representation.data,
                        owner: current,
                    });
                }
                Err(StoreError::NotFound(_)) => {
                    if self.identifiers.is_root(&current) {
                        return Err(TrellisAccessError::AuthenticatedDenied(
                            "No ACL document found for root container".into(),
                        ));
                    }
                    debug!("No ACL document found for {current}, checking parent container");
                    current = self.identifiers.parent_container(&current)?;
                }
                Err(source) => {
                    return Err(TrellisAccessError::StoreRead {
                        identifier: current,
                        source,
                    });
                }
            }
        }
    }

    /// Union the modes granted by the rules that cover `credentials`.
    async fn determine(
        &self,
        rules: &[AccessRule],
        credentials: &Credentials,
    ) -> Result<Permissions, TrellisAccessError> {
        let checks = try_join_all(
            rules
                .iter()
                .map(|rule| self.checker.applies(rule, credentials)),
        )
        .await?;

        let mut permissions = Permissions::default();
        for (rule, applies) in rules.iter().zip(checks) {
            if applies {
                for mode in &rule.modes {
                    permissions.grant(*mode);
                }
            }
        }
        Ok(permissions)
    }
}

#[async_trait]
impl<S, X, I, C> PermissionReader for WebAclReader<S, X, I, C>
where
    S: ResourceStore,
    X: AuxiliaryIdentifierStrategy,
    I: IdentifierStrategy,
    C: AccessChecker,
{
    async fn read(
        &self,
        identifier: &ResourceIdentifier,
        credentials: &CredentialSet,
    ) -> Result<Applicability<PermissionSet>, TrellisAccessError> {
        // ACL documents are governed by the resource they belong to, not by
        // an ACL of their own; their permissions are determined elsewhere.
        if self.auxiliary.is_auxiliary_identifier(identifier) {
            return Ok(Applicability::NotApplicable);
        }

        debug!("Determining WebACL permissions for {identifier}");
        let lookup = self.fetch_acl(identifier).await?;

        // Rules on the resource's own ACL apply through acl:accessTo; rules
        // inherited from an ancestor apply through acl:default only.
        let direct = lookup.owner == *identifier;
        let rules: Vec<AccessRule> = AccessRule::parse_all(&lookup.graph)
            .into_iter()
            .filter(|rule| {
                if direct {
                    rule.access_to
                        .iter()
                        .any(|target| target.as_str() == identifier.path())
                } else {
                    rule.default
                        .iter()
                        .any(|target| target.as_str() == lookup.owner.path())
                }
            })
            .collect();

        let mut set = PermissionSet::default();
        for kind in CredentialKind::ALL {
            let mut permissions = match credentials.get(kind) {
                Some(credentials) => self.determine(&rules, credentials).await?,
                None => Permissions::default(),
            };
            if permissions.write == Some(true) {
                permissions.append = Some(true);
            }
            set.set(kind, permissions);
        }

        // What everyone may do, the authenticated agent may do as well.
        if let Some(everyone) = set.everyone {
            let agent = set.agent.get_or_insert_with(Permissions::default);
            for mode in everyone.granted() {
                agent.grant(mode);
            }
        }

        Ok(Applicability::Applicable(set))
    }
}
