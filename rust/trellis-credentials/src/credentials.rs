use serde::{Deserialize, Serialize};

/// The closed set of credential kinds that can be extracted from a request.
///
/// Every request carries the implicit public audience; the agent kind is only
/// populated once a requester has authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialKind {
    /// The authenticated requester.
    Agent,
    /// The public audience every request belongs to.
    Everyone,
}

impl CredentialKind {
    /// Both kinds, in a fixed order.
    pub const ALL: [CredentialKind; 2] = [CredentialKind::Agent, CredentialKind::Everyone];
}

/// Credentials identifying an entity accessing or owning data.
///
/// An absent `web_id` means the entity is anonymous for this kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The WebID of an authenticated identity.
    pub web_id: Option<String>,
}

impl Credentials {
    /// Credentials for the given authenticated identity.
    pub fn with_web_id(web_id: impl Into<String>) -> Self {
        Self {
            web_id: Some(web_id.into()),
        }
    }
}

/// The credentials presented with one request, keyed by kind.
///
/// A kind that is present but empty still signals "this kind applies": every
/// request has `everyone: Some(..)` once extracted, while `agent` is only
/// populated for authenticated requests. The set is built once per request
/// and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    /// Credentials of the authenticated requester, if any.
    pub agent: Option<Credentials>,
    /// Credentials of the public audience.
    pub everyone: Option<Credentials>,
}

impl CredentialSet {
    /// The credentials of an unauthenticated request: only the public
    /// audience applies.
    pub fn public() -> Self {
        Self {
            everyone: Some(Credentials::default()),
            ..Self::default()
        }
    }

    /// A set containing only the given authenticated agent.
    pub fn authenticated(web_id: impl Into<String>) -> Self {
        Self {
            agent: Some(Credentials::with_web_id(web_id)),
            ..Self::default()
        }
    }

    /// The credentials stored for the given kind.
    pub fn get(&self, kind: CredentialKind) -> Option<&Credentials> {
        match kind {
            CredentialKind::Agent => self.agent.as_ref(),
            CredentialKind::Everyone => self.everyone.as_ref(),
        }
    }

    /// Whether an authenticated identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.agent.as_ref().is_some_and(|agent| agent.web_id.is_some())
    }

    /// The authenticated WebID, if any.
    pub fn web_id(&self) -> Option<&str> {
        self.agent.as_ref().and_then(|agent| agent.web_id.as_deref())
    }

    /// Overlay another set kind by kind: a kind populated in `other` replaces
    /// the value stored here wholesale, while an absent kind never overwrites
    /// an earlier value.
    pub fn overlay(&mut self, other: CredentialSet) {
        if let Some(agent) = other.agent {
            self.agent = Some(agent);
        }
        if let Some(everyone) = other.everyone {
            self.everyone = Some(everyone);
        }
    }
}
