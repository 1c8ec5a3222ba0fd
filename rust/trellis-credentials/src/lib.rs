//! Request credential model and extractor chain.
//!
//! This crate answers the first question of every access decision: who is
//! asking? A [`CredentialSet`] carries the answer for a fixed, closed set of
//! credential kinds — the authenticated agent and the implicit public
//! audience — and [`CredentialsExtractor`] implementations pull that set out
//! of an inbound request.
//!
//! Extractors compose: [`UnionCredentialsExtractor`] runs several extractors
//! and overlays their results, while each individual extractor can report
//! that a request is simply not its business (see
//! [`trellis_common::Applicability`]).
//!
//! ```
//! use trellis_common::Applicability;
//! use trellis_credentials::{CredentialSet, CredentialsExtractor, EmptyCredentialsExtractor, Request};
//!
//! # async fn example() {
//! let extractor = EmptyCredentialsExtractor;
//! let request = Request::default();
//! let extracted = extractor.extract(&request).await.unwrap();
//! assert_eq!(extracted, Applicability::Applicable(CredentialSet::public()));
//! # }
//! ```

mod error;
pub use error::*;

mod credentials;
pub use credentials::*;

mod request;
pub use request::*;

mod extractor;
pub use extractor::*;
