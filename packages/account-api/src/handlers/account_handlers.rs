//! Account CRUD handlers.

use std::fmt::Display;

use hyper::body::{Body, Bytes};
use hyper::{Request, Response};
use tokio::sync::oneshot;

use account_core::StoreError;
use account_runtime::AccountRequest;

use super::request_utils::{
    map_store_error_to_router_error, parse_account, read_request_body_with_timeout,
    send_to_runtime, wait_for_response_with_timeout, ACCOUNT_DOES_NOT_EXIST,
};
use super::response::{build_empty_response, build_json_response, build_text_response};
use crate::router::{AppState, RouterError};

/// Creates a new account.
///
/// # Endpoint
/// `POST /account`
///
/// # Request Body
/// ```json
/// {"firstname": "ann", "lastname": "lee", "mobilenumber": 555, "password": "x"}
/// ```
///
/// # Response
/// - **201 Created**: `Hello ann, welcome to our new application`
///
/// # Errors
/// - **400 Bad Request**: Body is not a complete account
/// - **408 Request Timeout**: Body or runtime reply took too long
/// - **409 Conflict**: `Account already exist`
/// - **500 Internal Server Error**: Body read failure or runtime unavailable
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:8080/account \
///   -d '{"firstname":"ann","lastname":"lee","mobilenumber":555,"password":"x"}'
/// ```
pub async fn create_account<B>(
    req: Request<B>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: Display,
{
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let account = parse_account(&body_bytes)?;

    let (tx, rx) = oneshot::channel();
    send_to_runtime(
        &state.api_tx,
        AccountRequest::Create {
            account,
            response: tx,
        },
    )
    .await?;

    let created = wait_for_response_with_timeout(rx, state.config.response_timeout_ms)
        .await?
        .map_err(map_store_error_to_router_error)?;

    tracing::info!("Created account '{}'", created.first_name);
    build_text_response(
        201,
        format!("Hello {}, welcome to our new application", created.first_name),
    )
}

/// Lists every account in creation order.
///
/// # Endpoint
/// `GET /account`
///
/// # Response
/// - **200 OK**: JSON array of accounts
pub async fn list_accounts(state: AppState) -> Result<Response<Bytes>, RouterError> {
    let (tx, rx) = oneshot::channel();
    send_to_runtime(&state.api_tx, AccountRequest::List { response: tx }).await?;

    let accounts = wait_for_response_with_timeout(rx, state.config.response_timeout_ms)
        .await?
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&accounts)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_json_response(200, json)
}

/// Reads one account.
///
/// # Endpoint
/// `GET /account/{name}`
///
/// # Response
/// - **200 OK**: JSON account
///
/// # Errors
/// - **404 Not Found**: `Account not found`
pub async fn get_account(name: String, state: AppState) -> Result<Response<Bytes>, RouterError> {
    let (tx, rx) = oneshot::channel();
    send_to_runtime(&state.api_tx, AccountRequest::Get { name, response: tx }).await?;

    let account = wait_for_response_with_timeout(rx, state.config.response_timeout_ms)
        .await?
        .map_err(map_store_error_to_router_error)?;

    let json = serde_json::to_vec(&account)
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;

    build_json_response(200, json)
}

/// Replaces every field of an account. A new first name renames it.
///
/// # Endpoint
/// `PUT /account/{name}`
///
/// # Response
/// - **200 OK**: `Hello <firstname>, your account is updated`
///
/// # Errors
/// - **400 Bad Request**: Body is not a complete account (checked before lookup)
/// - **404 Not Found**: `Account doesnot exist`
/// - **409 Conflict**: New first name belongs to another account
pub async fn update_account<B>(
    req: Request<B>,
    name: String,
    state: AppState,
) -> Result<Response<Bytes>, RouterError>
where
    B: Body,
    B::Error: Display,
{
    let body_bytes = read_request_body_with_timeout(req, state.config.request_timeout_ms).await?;
    let account = parse_account(&body_bytes)?;

    let (tx, rx) = oneshot::channel();
    send_to_runtime(
        &state.api_tx,
        AccountRequest::Update {
            name: name.clone(),
            account,
            response: tx,
        },
    )
    .await?;

    let updated = wait_for_response_with_timeout(rx, state.config.response_timeout_ms)
        .await?
        .map_err(|e| match e {
            StoreError::NotFound { .. } => {
                RouterError::NotFound(ACCOUNT_DOES_NOT_EXIST.to_string())
            }
            other => map_store_error_to_router_error(other),
        })?;

    tracing::info!("Updated account '{}' (now '{}')", name, updated.first_name);
    build_text_response(
        200,
        format!("Hello {}, your account is updated", updated.first_name),
    )
}

/// Deletes an account.
///
/// # Endpoint
/// `DELETE /account/{name}`
///
/// # Response
/// - **204 No Content**: Account removed
///
/// # Errors
/// - **404 Not Found**: `Account not found`
pub async fn delete_account(
    name: String,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let (tx, rx) = oneshot::channel();
    send_to_runtime(
        &state.api_tx,
        AccountRequest::Delete {
            name,
            response: tx,
        },
    )
    .await?;

    let removed = wait_for_response_with_timeout(rx, state.config.response_timeout_ms)
        .await?
        .map_err(map_store_error_to_router_error)?;

    tracing::info!("Deleted account '{}'", removed.first_name);
    build_empty_response(204)
}
