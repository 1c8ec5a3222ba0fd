//! The vocabulary terms this crate interprets.
//!
//! Only the permission-relevant slices of the RDF, WAC and FOAF vocabularies
//! appear here, plus the annotation terms used to report granted modes back
//! to clients.

/// RDF core terms.
pub mod rdf {
    /// `rdf:type`.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// Web Access Control terms.
pub mod acl {
    /// The class of authorization rules.
    pub const AUTHORIZATION: &str = "http://www.w3.org/ns/auth/acl#Authorization";
    /// Grants a rule directly to a resource.
    pub const ACCESS_TO: &str = "http://www.w3.org/ns/auth/acl#accessTo";
    /// Makes a rule inheritable by the descendants of a container.
    pub const DEFAULT: &str = "http://www.w3.org/ns/auth/acl#default";
    /// Relates a rule to the modes it grants.
    pub const MODE: &str = "http://www.w3.org/ns/auth/acl#mode";
    /// Names a specific agent a rule applies to.
    pub const AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
    /// Names a class of agents a rule applies to.
    pub const AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";

    /// The read mode.
    pub const READ: &str = "http://www.w3.org/ns/auth/acl#Read";
    /// The write mode.
    pub const WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";
    /// The append mode.
    pub const APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
    /// The control mode.
    pub const CONTROL: &str = "http://www.w3.org/ns/auth/acl#Control";

    /// The agent class of all authenticated agents.
    pub const AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";
}

/// FOAF terms.
pub mod foaf {
    /// The agent class covering everyone, authenticated or not.
    pub const AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";
}

/// Annotation terms for reporting granted modes in response metadata.
pub mod auth {
    /// Relates a resource to a mode the requesting user holds on it.
    pub const USER_MODE: &str = "urn:solid:auth:userMode";
    /// Relates a resource to a mode the public holds on it.
    pub const PUBLIC_MODE: &str = "urn:solid:auth:publicMode";
}
