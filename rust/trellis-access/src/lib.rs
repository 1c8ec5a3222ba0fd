//! Access-control core for a linked-data resource server.
//!
//! Given a requested resource and the credentials presented with a request,
//! this crate determines which access modes (read, write, append, control)
//! are granted and renders a binary authorize/deny decision, with a specific
//! HTTP-class failure when denied.
//!
//! # Pipeline
//!
//! Each request flows through three chains, orchestrated by [`AccessEngine`]:
//!
//! 1. a [`CredentialsExtractor`](trellis_credentials::CredentialsExtractor)
//!    establishes who is asking,
//! 2. a [`PermissionReader`] computes the available [`PermissionSet`] for the
//!    target — most notably [`WebAclReader`], which resolves Web Access
//!    Control documents with container-hierarchy inheritance,
//! 3. an ordered list of [`Authorizer`]s renders the decision; the first
//!    applicable one wins (so an ownership override can shadow the generic
//!    permission matcher).
//!
//! On success, [`WacMetadataWriter`] can annotate the response metadata with
//! the granted modes for client introspection. On failure, a
//! [`TrellisAccessError`] distinguishes the anonymous (401-class) from the
//! authenticated (403-class) denial.
//!
//! Storage, account lookup and rule applicability are consumed through the
//! narrow [`ResourceStore`], [`AccountStore`] and [`AccessChecker`] traits;
//! everything in this crate is per-request and stateless across requests.

mod error;
pub use error::*;

mod graph;
pub use graph::*;

pub mod vocab;

mod mode;
pub use mode::*;

mod identifier;
pub use identifier::*;

mod auxiliary;
pub use auxiliary::*;

mod store;
pub use store::*;

mod account;
pub use account::*;

mod rule;
pub use rule::*;

mod checker;
pub use checker::*;

mod reader;
pub use reader::*;

mod authorizer;
pub use authorizer::*;

mod metadata;
pub use metadata::*;

mod engine;
pub use engine::*;
