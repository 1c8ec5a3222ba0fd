/// The narrow slice of an inbound request that credential extraction
/// inspects.
///
/// Routing, bodies and content negotiation are handled elsewhere; extractors
/// only ever look at the authentication material.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The raw `Authorization` header value, if one was sent.
    pub authorization: Option<String>,
}

impl Request {
    /// A request carrying the given `Authorization` header value.
    pub fn with_authorization(authorization: impl Into<String>) -> Self {
        Self {
            authorization: Some(authorization.into()),
        }
    }
}
