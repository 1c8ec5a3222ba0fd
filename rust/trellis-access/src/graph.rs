use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single term in its IRI (or literal) string form.
///
/// Real RDF parsing and serialization happen outside this crate; permission
/// evaluation only ever compares terms for equality, so a thin string
/// wrapper is all that is needed here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Term(String);

impl Term {
    /// Wrap the given IRI or literal value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One subject–predicate–object statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    /// The described node.
    pub subject: Term,
    /// The relation.
    pub predicate: Term,
    /// The related node or value.
    pub object: Term,
}

impl Triple {
    /// Build a triple from anything term-like.
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A queryable set of triples, as handed over by the resource store when an
/// ACL document is fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    /// An empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement.
    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// All objects related to `subject` through `predicate`.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |triple| {
                triple.subject == *subject && triple.predicate.as_str() == predicate
            })
            .map(|triple| &triple.object)
    }

    /// All subjects related to `object` through `predicate`.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: &'a str,
    ) -> impl Iterator<Item = &'a Term> {
        self.triples
            .iter()
            .filter(move |triple| {
                triple.predicate.as_str() == predicate && triple.object.as_str() == object
            })
            .map(|triple| &triple.subject)
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether the graph holds no statements.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

/// Additive sink for response metadata about one resource.
///
/// Writers only ever append predicate–object pairs; nothing in this crate
/// clears previously added metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    entries: Vec<(Term, Term)>,
}

impl Metadata {
    /// An empty metadata record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate–object pair.
    pub fn add(&mut self, predicate: impl Into<Term>, object: impl Into<Term>) {
        self.entries.push((predicate.into(), object.into()));
    }

    /// All objects recorded for the given predicate, in insertion order.
    pub fn all<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Term> {
        self.entries
            .iter()
            .filter(move |(recorded, _)| recorded.as_str() == predicate)
            .map(|(_, object)| object)
    }

    /// Number of recorded pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
