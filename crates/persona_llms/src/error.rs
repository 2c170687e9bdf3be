//! Error types for completion services.

use thiserror::Error;

/// Errors surfaced by completion services and the registry.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Requested model or endpoint does not exist upstream.
    #[error("model or endpoint not found: {0}")]
    NotFound(String),

    /// Upstream rejected the request for quota reasons.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Credential or permission problem; fatal to the current request.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Transient upstream outage (cold start, overload).
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// No API key configured for the service.
    #[error("missing API key for service '{0}'")]
    MissingApiKey(String),

    /// Registry lookup failed.
    #[error("service not found: {0}")]
    ServiceNotFound(String),

    /// The stream could not be established.
    #[error("stream error: {0}")]
    Stream(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Catch-all for unclassified upstream failures, surfaced verbatim.
    #[error("{0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

impl ServiceError {
    /// Classify an upstream HTTP status into a service error. The body is
    /// carried verbatim as the message.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        use reqwest::StatusCode;
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimited(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(body),
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => Self::Unavailable(body),
            _ => Self::Unknown(format!("{status}: {body}")),
        }
    }

    /// Create a stream error
    pub fn stream_error(message: impl Into<String>) -> Self {
        Self::Stream(message.into())
    }

    /// Suggestion shown to the user alongside the error, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => Some("try a different model"),
            Self::RateLimited(_) => Some("wait a moment and retry"),
            Self::Unavailable(_) => Some("the backend may be cold-starting; retry shortly"),
            Self::MissingApiKey(_) => Some("set the service API key in the environment"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_classification() {
        assert!(matches!(
            ServiceError::from_status(StatusCode::NOT_FOUND, "gone".into()),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down".into()),
            ServiceError::RateLimited(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::UNAUTHORIZED, "bad token".into()),
            ServiceError::Unauthorized(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::FORBIDDEN, "no access".into()),
            ServiceError::Unauthorized(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::SERVICE_UNAVAILABLE, "loading".into()),
            ServiceError::Unavailable(_)
        ));
        assert!(matches!(
            ServiceError::from_status(StatusCode::IM_A_TEAPOT, "???".into()),
            ServiceError::Unknown(_)
        ));
    }

    #[test]
    fn test_unknown_keeps_body_verbatim() {
        let err = ServiceError::Unknown("upstream exploded".to_string());
        assert_eq!(err.to_string(), "upstream exploded");
    }

    #[test]
    fn test_hints() {
        assert!(ServiceError::NotFound(String::new()).hint().is_some());
        assert!(ServiceError::Unavailable(String::new()).hint().is_some());
        assert!(ServiceError::Unknown(String::new()).hint().is_none());
    }
}
