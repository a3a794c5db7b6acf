//! Authenticated HTTP transport for registry requests
//!
//! Every request carries HTTP basic credentials. The transport only reports the
//! status code and raw body; interpreting them is up to the operations.

use crate::cli::config::{AuthConfig, RegistryConfig};
use crate::error::handlers::NetworkErrorHandler;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Method};
use std::time::Duration;

/// Status code plus raw response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Issues a single request against the registry
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// `operation` names the request in error messages
    async fn execute(&self, method: Method, url: &str, operation: &str)
        -> Result<TransportResponse>;
}

/// reqwest backed transport with basic authentication
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    auth: AuthConfig,
}

impl HttpTransport {
    pub fn new(registry: &RegistryConfig, auth: AuthConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if registry.skip_tls {
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        if let Some(timeout) = registry.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder
            .build()
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, "building HTTP client"))?;

        Ok(Self { client, auth })
    }
}

#[async_trait]
impl RegistryTransport for HttpTransport {
    async fn execute(
        &self,
        method: Method,
        url: &str,
        operation: &str,
    ) -> Result<TransportResponse> {
        let response = self
            .client
            .request(method, url)
            .basic_auth(&self.auth.username, Some(&self.auth.password))
            .send()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, operation))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| NetworkErrorHandler::handle_network_error(&e, operation))?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}

/// In-memory transport for unit tests
#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    #[derive(Default)]
    pub(crate) struct MockTransport {
        routes: Mutex<HashMap<(Method, String), TransportResponse>>,
        calls: Mutex<Vec<(Method, String)>>,
        gates: Mutex<HashMap<String, Arc<Notify>>>,
        signals: Mutex<HashMap<String, Arc<Notify>>>,
    }

    impl MockTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn respond(
            &self,
            method: Method,
            url: &str,
            status: u16,
            body: impl Into<Vec<u8>>,
        ) {
            self.routes
                .lock()
                .unwrap()
                .insert((method, url.to_string()), TransportResponse::new(status, body));
        }

        /// Requests to `url` wait until `notify` fires
        pub(crate) fn gate(&self, url: &str, notify: Arc<Notify>) {
            self.gates.lock().unwrap().insert(url.to_string(), notify);
        }

        /// Requests to `url` fire `notify` once issued
        pub(crate) fn signal(&self, url: &str, notify: Arc<Notify>) {
            self.signals.lock().unwrap().insert(url.to_string(), notify);
        }

        pub(crate) fn calls(&self) -> Vec<(Method, String)> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn deletes(&self) -> Vec<String> {
            self.calls()
                .into_iter()
                .filter(|(method, _)| *method == Method::DELETE)
                .map(|(_, url)| url)
                .collect()
        }
    }

    #[async_trait]
    impl RegistryTransport for MockTransport {
        async fn execute(
            &self,
            method: Method,
            url: &str,
            _operation: &str,
        ) -> Result<TransportResponse> {
            let gate = self.gates.lock().unwrap().get(url).cloned();
            if let Some(gate) = gate {
                gate.notified().await;
            }

            self.calls.lock().unwrap().push((method.clone(), url.to_string()));

            let signal = self.signals.lock().unwrap().get(url).cloned();
            if let Some(signal) = signal {
                signal.notify_one();
            }

            let response = self
                .routes
                .lock()
                .unwrap()
                .get(&(method, url.to_string()))
                .cloned();
            Ok(response.unwrap_or_else(|| TransportResponse::new(404, Vec::new())))
        }
    }
}
