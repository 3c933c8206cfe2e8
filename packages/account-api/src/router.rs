//! Matchit routing configuration.

use std::fmt::Display;
use std::sync::Arc;

use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use matchit::Router as MatchitRouter;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::handlers;
use crate::handlers::request_utils::decode_path_param;
use crate::handlers::response::TEXT_PLAIN;
use account_core::ServerConfig;
use account_runtime::AccountRequest;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Request sender to the account runtime
    pub api_tx: mpsc::Sender<AccountRequest>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a new router with the account routes.
    pub fn new(config: Arc<ServerConfig>, api_tx: mpsc::Sender<AccountRequest>) -> Self {
        let mut router = MatchitRouter::new();

        router
            .insert("/account", RouteHandler::Collection)
            .expect("Failed to insert /account route");
        router
            .insert("/account/{name}", RouteHandler::Account)
            .expect("Failed to insert /account/{name} route");

        Self {
            inner: router,
            state: AppState { config, api_tx },
        }
    }

    /// Routes a request and converts any error into its HTTP response.
    pub async fn handle<B>(&self, req: Request<B>) -> Response<Bytes>
    where
        B: Body,
        B::Error: Display,
    {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        match self.route(req).await {
            Ok(response) => {
                tracing::debug!("{} {} -> {}", method, path, response.status());
                response
            }
            Err(err) => {
                let response = Response::from(err.clone());
                if response.status().is_server_error() {
                    tracing::error!("{} {} -> {}", method, path, err);
                } else {
                    tracing::debug!("{} {} -> {}", method, path, err);
                }
                response
            }
        }
    }

    /// Routes an incoming request to the appropriate handler.
    ///
    /// # Returns
    /// `Result<Response<Bytes>, RouterError>` containing the response or an error.
    pub async fn route<B>(&self, req: Request<B>) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: Display,
    {
        let path = req.uri().path().to_string();

        let (handler, name) = match self.inner.at(&path) {
            Ok(matched) => {
                let name = matched.params.get("name").map(decode_path_param).transpose()?;
                (matched.value, name)
            }
            Err(_) => return Err(RouterError::NotFound(format!("No route found for {}", path))),
        };

        handler.handle(req, name, self.state.clone()).await
    }
}

/// Route handler function.
enum RouteHandler {
    /// `/account`
    Collection,
    /// `/account/{name}`
    Account,
}

impl RouteHandler {
    /// Handles a request with the decoded `{name}` parameter, if any.
    async fn handle<B>(
        &self,
        req: Request<B>,
        name: Option<String>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError>
    where
        B: Body,
        B::Error: Display,
    {
        match (self, name) {
            (RouteHandler::Collection, _) => match *req.method() {
                Method::POST => handlers::create_account(req, state).await,
                Method::GET => handlers::list_accounts(state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
            (RouteHandler::Account, Some(name)) => match *req.method() {
                Method::GET => handlers::get_account(name, state).await,
                Method::PUT => handlers::update_account(req, name, state).await,
                Method::DELETE => handlers::delete_account(name, state).await,
                _ => Err(RouterError::MethodNotAllowed),
            },
            (RouteHandler::Account, None) => Err(RouterError::BadRequest(
                "Missing account name".to_string(),
            )),
        }
    }
}

/// Router error type.
#[derive(Debug, Clone, Error)]
pub enum RouterError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Error: {0}")]
    InternalError(String),
    #[error("Request Timeout")]
    Timeout,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl RouterError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RouterError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RouterError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RouterError::Timeout => StatusCode::REQUEST_TIMEOUT,
            RouterError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RouterError::NotFound(_) => StatusCode::NOT_FOUND,
            RouterError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    /// Plain-text body sent to the client.
    pub fn message(&self) -> &str {
        match self {
            RouterError::MethodNotAllowed => "Method Not Allowed",
            RouterError::Timeout => "Request Timeout",
            RouterError::InternalError(msg)
            | RouterError::BadRequest(msg)
            | RouterError::NotFound(msg)
            | RouterError::Conflict(msg) => msg,
        }
    }
}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let mut response = Response::new(Bytes::from(err.message().to_string()));
        *response.status_mut() = err.status();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
        response
    }
}
