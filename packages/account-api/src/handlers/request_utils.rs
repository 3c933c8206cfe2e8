//! Request utilities for HTTP endpoints.

use std::fmt::Display;

use account_core::{Account, StoreError};
use account_runtime::AccountRequest;
use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::Request;
use percent_encoding::percent_decode_str;
use tokio::sync::{mpsc, oneshot};
use tokio::time;

use crate::router::RouterError;

/// Body of a 409 for a taken first name
pub const ACCOUNT_EXISTS: &str = "Account already exist";

/// Body of a 404 for get and delete
pub const ACCOUNT_NOT_FOUND: &str = "Account not found";

/// Body of a 404 for update
pub const ACCOUNT_DOES_NOT_EXIST: &str = "Account doesnot exist";

/// Helper function to read request body with timeout
///
/// A body that fails mid-read produces an error response for this request
/// only.
pub async fn read_request_body_with_timeout<B>(
    req: Request<B>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError>
where
    B: Body,
    B::Error: Display,
{
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.into_body().collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Helper function to wait for response with timeout
pub async fn wait_for_response_with_timeout<T>(
    rx: oneshot::Receiver<T>,
    timeout_ms: u64,
) -> Result<T, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    time::timeout(timeout_duration, rx)
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Response channel closed: {}", e)))
}

/// Hands a request to the account runtime
pub async fn send_to_runtime(
    api_tx: &mpsc::Sender<AccountRequest>,
    request: AccountRequest,
) -> Result<(), RouterError> {
    api_tx
        .send(request)
        .await
        .map_err(|e| RouterError::InternalError(format!("Channel closed: {}", e)))
}

/// Decodes a JSON account body
pub fn parse_account(body: &[u8]) -> Result<Account, RouterError> {
    serde_json::from_slice(body)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse account: {}", e)))
}

/// Percent-decodes a path parameter
pub fn decode_path_param(raw: &str) -> Result<String, RouterError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| RouterError::BadRequest(format!("Invalid path parameter '{}': {}", raw, e)))
}

/// Map StoreError to appropriate RouterError
pub fn map_store_error_to_router_error(e: StoreError) -> RouterError {
    match e {
        StoreError::AlreadyExists { .. } => RouterError::Conflict(ACCOUNT_EXISTS.to_string()),
        StoreError::NotFound { .. } => RouterError::NotFound(ACCOUNT_NOT_FOUND.to_string()),
    }
}
