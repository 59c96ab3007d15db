//! Gateway error taxonomy.
//!
//! Every failure a request can hit maps to exactly one variant, and every
//! variant renders as an HTTP status plus a `{"error":"<message>"}` body.

use hyper::StatusCode;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// No configured route matches the request path.
    #[error("Route not found")]
    RouteNotFound,

    /// The route exists but does not allow the request method.
    #[error("Method {0} not allowed")]
    MethodNotAllowed(String),

    /// The route requires a credential that was missing or invalid.
    #[error("Unauthorized")]
    Unauthorized,

    /// A required query parameter was missing or empty.
    #[error("Missing {0} parameter")]
    MissingParameter(&'static str),

    /// The named player is not connected.
    #[error("Player not found")]
    PlayerNotFound,

    /// The request resolved to a static route's root, but the route
    /// declares no index file.
    #[error("Index file not defined for {0}")]
    IndexNotDefined(String),

    /// The resolved file does not exist or is a directory.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The resolved path escapes the route's base directory.
    #[error("Access denied")]
    AccessDenied,

    /// The host adapter failed while executing a command.
    #[error("Command execution failed: {0}")]
    HandlerFailure(String),
}

impl GatewayError {
    /// The HTTP status code this error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::RouteNotFound
            | Self::PlayerNotFound
            | Self::IndexNotDefined(_)
            | Self::FileNotFound(_)
            | Self::AccessDenied => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::HandlerFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(GatewayError::RouteNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            GatewayError::MethodNotAllowed("DELETE".to_string()).status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(GatewayError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            GatewayError::MissingParameter("command").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(GatewayError::AccessDenied.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            GatewayError::HandlerFailure("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(GatewayError::RouteNotFound.to_string(), "Route not found");
        assert_eq!(
            GatewayError::MethodNotAllowed("DELETE".to_string()).to_string(),
            "Method DELETE not allowed"
        );
        assert_eq!(
            GatewayError::MissingParameter("name").to_string(),
            "Missing name parameter"
        );
        assert_eq!(
            GatewayError::IndexNotDefined("/static".to_string()).to_string(),
            "Index file not defined for /static"
        );
        assert_eq!(
            GatewayError::FileNotFound("/a.css".to_string()).to_string(),
            "File not found: /a.css"
        );
        assert_eq!(GatewayError::AccessDenied.to_string(), "Access denied");
    }
}
