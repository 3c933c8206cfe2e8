//! Response builders for HTTP endpoints.

use hyper::body::Bytes;
use hyper::Response;

use crate::router::RouterError;

/// Content type of plain-text bodies
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Content type of JSON bodies
pub const APPLICATION_JSON: &str = "application/json";

/// Helper to build a JSON HTTP response
pub fn build_json_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", APPLICATION_JSON)
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Helper to build a plain-text HTTP response
pub fn build_text_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", TEXT_PLAIN)
        .body(Bytes::from(message.into()))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Helper to build empty HTTP response (for 204 No Content)
pub fn build_empty_response(status: u16) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .body(Bytes::new())
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}
