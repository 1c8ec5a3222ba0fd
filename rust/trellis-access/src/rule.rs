use crate::{
    AccessMode, Graph, Term,
    vocab::{acl, rdf},
};

/// One `acl:Authorization` entry lifted out of an ACL document.
///
/// Rules are ephemeral: they are parsed fresh from the document graph on
/// every permission read and discarded afterwards. A rule grants its modes
/// either directly (`acl:accessTo`) or as an inheritable default
/// (`acl:default`); whether a given rule is eligible for a given lookup is
/// decided by the reader, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    /// The node naming this rule in the source document.
    pub node: Term,
    /// The modes this rule grants. Unrecognized mode terms are dropped
    /// during parsing.
    pub modes: Vec<AccessMode>,
    /// Resources this rule applies to directly.
    pub access_to: Vec<Term>,
    /// Containers whose descendants inherit this rule.
    pub default: Vec<Term>,
    /// WebIDs named by `acl:agent`.
    pub agents: Vec<Term>,
    /// Agent classes named by `acl:agentClass`.
    pub agent_classes: Vec<Term>,
}

impl AccessRule {
    /// Parse the rule rooted at `node` from the document graph.
    pub fn parse(graph: &Graph, node: &Term) -> Self {
        Self {
            node: node.clone(),
            modes: graph
                .objects(node, acl::MODE)
                .filter_map(AccessMode::from_term)
                .collect(),
            access_to: graph.objects(node, acl::ACCESS_TO).cloned().collect(),
            default: graph.objects(node, acl::DEFAULT).cloned().collect(),
            agents: graph.objects(node, acl::AGENT).cloned().collect(),
            agent_classes: graph.objects(node, acl::AGENT_CLASS).cloned().collect(),
        }
    }

    /// Parse every `acl:Authorization` entry in the document graph.
    pub fn parse_all(graph: &Graph) -> Vec<Self> {
        graph
            .subjects_with(rdf::TYPE, acl::AUTHORIZATION)
            .map(|node| Self::parse(graph, node))
            .collect()
    }
}
