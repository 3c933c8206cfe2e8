//! Runtime loop that owns the account store.

use account_core::AccountStore;
use tokio::sync::mpsc;

use crate::api_request::{AccountRequest, ResponseSender};

/// Sole owner of the account store.
///
/// Requests are applied strictly in arrival order, so check-then-act
/// sequences (duplicate check on create, lookup-then-replace on update)
/// cannot interleave.
pub struct Runtime {
    /// Account store
    store: AccountStore,
    /// API request receiver
    api_rx: mpsc::Receiver<AccountRequest>,
    /// Requests processed since startup
    processed: u64,
}

impl Runtime {
    /// Create a new runtime
    pub fn new(store: AccountStore, api_rx: mpsc::Receiver<AccountRequest>) -> Self {
        Self {
            store,
            api_rx,
            processed: 0,
        }
    }

    /// Read-only view of the store
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Number of requests processed so far
    pub fn processed_requests(&self) -> u64 {
        self.processed
    }

    /// Run the runtime loop (blocking).
    ///
    /// Returns once every request sender has been dropped. Must be called
    /// from a plain thread, not from inside an async context.
    pub fn run(&mut self) {
        tracing::info!("Account runtime started");
        while let Some(req) = self.api_rx.blocking_recv() {
            self.process(req);
        }
        tracing::info!(
            "Account runtime stopped after {} requests ({} accounts stored)",
            self.processed,
            self.store.len()
        );
    }

    /// Apply a single request and send its reply.
    pub fn process(&mut self, req: AccountRequest) {
        tracing::debug!(
            "Processing {} request (mutation: {})",
            req.operation(),
            req.is_mutation()
        );
        self.processed += 1;

        match req {
            AccountRequest::Create { account, response } => {
                let result = self.store.create(account).cloned();
                reply(response, result);
            }
            AccountRequest::List { response } => {
                reply(response, Ok(self.store.list().to_vec()));
            }
            AccountRequest::Get { name, response } => {
                let result = self.store.get(&name).cloned();
                reply(response, result);
            }
            AccountRequest::Update {
                name,
                account,
                response,
            } => {
                let result = self.store.update(&name, account).cloned();
                reply(response, result);
            }
            AccountRequest::Delete { name, response } => {
                let result = self.store.delete(&name);
                reply(response, result);
            }
        }
    }
}

fn reply<T>(response: ResponseSender<T>, result: crate::Result<T>) {
    // The handler may have timed out and dropped its receiver; the store
    // change already happened either way.
    if response.send(result).is_err() {
        tracing::warn!("Reply receiver dropped before the runtime answered");
    }
}
