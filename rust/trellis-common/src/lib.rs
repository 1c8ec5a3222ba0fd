//! Shared plumbing for the trellis access-control crates.
//!
//! The credential extractors, permission readers and authorizers of this
//! workspace are all organized as ordered chains of independent handlers.
//! [`Applicability`] is the two-case result those handlers use to tell their
//! dispatcher whether they interpreted an input at all, keeping "try the next
//! one" separate from genuine failures.

mod applicability;
pub use applicability::*;
