//! HTTP response building module
//!
//! Every response the gateway writes goes through one of these builders:
//! JSON payloads, `{"error": ...}` bodies, or raw file bytes.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::error::GatewayError;
use crate::logger;

/// Build a JSON response from any serializable body.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = match serde_json::to_string(body) {
        Ok(j) => j,
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a `{"error": "<message>"}` response.
pub fn error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({ "error": message });

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap_or_else(|e| {
            log_build_error("error", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Render a gateway error as its HTTP response.
pub fn gateway_error_response(err: &GatewayError) -> Response<Full<Bytes>> {
    error_response(err.status(), &err.to_string())
}

/// Build a 200 response carrying raw file bytes.
pub fn file_response(content: Vec<u8>, content_type: &'static str) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("file", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {kind} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(resp: Response<Full<Bytes>>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_response_shape() {
        let resp = error_response(StatusCode::NOT_FOUND, "Route not found");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()["Content-Type"],
            "application/json; charset=utf-8"
        );
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "Route not found"})
        );
    }

    #[tokio::test]
    async fn test_gateway_error_response() {
        let resp = gateway_error_response(&GatewayError::Unauthorized);
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({"error": "Unauthorized"})
        );
    }

    #[tokio::test]
    async fn test_file_response_headers() {
        let resp = file_response(b"body { }".to_vec(), "text/css; charset=utf-8");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
        assert_eq!(resp.headers()["Content-Length"], "8");
    }

    #[tokio::test]
    async fn test_json_response_serializes() {
        #[derive(serde::Serialize)]
        struct Payload {
            success: bool,
        }
        let resp = json_response(StatusCode::OK, &Payload { success: true });
        assert_eq!(body_json(resp).await, serde_json::json!({"success": true}));
    }
}
