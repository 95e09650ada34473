//! Error taxonomy shared by all resolvers and both transports.

/// Domain-level errors produced by resolvers.
///
/// The dispatcher layers map each variant to a transport-appropriate
/// status/envelope without changing its kind: 400 for validation, 404 for
/// not-found, 500 for upstream failures, 405 for a wrong verb.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream call failed: {0}")]
    Upstream(String),

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl CoreError {
    /// Stable machine-readable code, identical on both transports.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Upstream(_) => "UPSTREAM_ERROR",
            CoreError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Human-readable message without the variant prefix, for error bodies.
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation(msg)
            | CoreError::NotFound(msg)
            | CoreError::Upstream(msg) => msg,
            CoreError::MethodNotAllowed => "method not allowed",
        }
    }
}

/// Errors from an upstream gateway call (datastore or third-party API).
///
/// Kept separate from [`CoreError`] so gateway implementations do not decide
/// HTTP semantics; resolvers convert these to [`CoreError::Upstream`].
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The call itself failed: network, DNS, TLS, timeout, or an
    /// undecodable response body.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<GatewayError> for CoreError {
    fn from(err: GatewayError) -> Self {
        CoreError::Upstream(err.to_string())
    }
}
