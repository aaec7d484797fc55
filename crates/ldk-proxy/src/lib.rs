//! # ldk-proxy
//!
//! Development reverse proxy: forwards `/api/*` requests unmodified (method,
//! body, content type) to the backend origin and relays the backend's status
//! and body. Connection failure yields a fixed plain-text 500 so the browser
//! or CLI sees a readable message instead of a hung request. Paths outside
//! `/api` get 404.
//!
//! `tiny_http::recv` blocks, so the accept loop runs each receive in
//! `spawn_blocking`; every accepted request is then forwarded on its own
//! task, so a slow backend call delays only its own caller and independent
//! pages can keep requests in flight simultaneously.

use std::io::Read;
use std::sync::Arc;

use thiserror::Error;

/// Body of the fixed 500 response sent when the backend is unreachable.
pub const BACKEND_DOWN_BODY: &str =
    "Something went wrong while connecting to the backend server.";

/// Body of the 400 response sent when the client's request body cannot be
/// read.
pub const BAD_REQUEST_BODY: &str = "Failed to read the request body.";

/// Errors that can occur while running the proxy.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The listen address could not be bound.
    #[error("failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    /// Accepting a connection failed.
    #[error("accept failed: {0}")]
    Accept(#[from] std::io::Error),

    /// The blocking accept task was cancelled or panicked.
    #[error("accept task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A bound development proxy, ready to run.
pub struct Proxy {
    server: Arc<tiny_http::Server>,
    backend: String,
    http: reqwest::Client,
}

impl Proxy {
    /// Bind the listen address. `backend` is the origin `/api/*` requests are
    /// forwarded to, e.g. `http://localhost:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Bind`] if the address cannot be bound.
    pub fn bind(listen: &str, backend: impl Into<String>) -> Result<Self, ProxyError> {
        let server = tiny_http::Server::http(listen).map_err(|e| ProxyError::Bind {
            addr: listen.to_string(),
            reason: e.to_string(),
        })?;
        let mut backend = backend.into();
        while backend.ends_with('/') {
            backend.pop();
        }
        Ok(Self {
            server: Arc::new(server),
            backend,
            http: reqwest::Client::new(),
        })
    }

    /// The port the proxy is listening on (useful when bound to port 0).
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.server.server_addr().to_ip().map(|addr| addr.port())
    }

    /// Accept and forward requests until the task is dropped.
    ///
    /// Each accepted request is handled on its own task; the loop goes back
    /// to accepting immediately, so concurrent callers are never serialized
    /// behind one backend round-trip.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError`] if accepting a connection fails.
    pub async fn run(self) -> Result<(), ProxyError> {
        tracing::info!(backend = %self.backend, "development proxy listening");
        let proxy = Arc::new(self);
        loop {
            let accept = Arc::clone(&proxy.server);
            let request = tokio::task::spawn_blocking(move || accept.recv()).await??;
            let handler = Arc::clone(&proxy);
            tokio::spawn(async move { handler.handle(request).await });
        }
    }

    async fn handle(&self, mut request: tiny_http::Request) {
        let url = request.url().to_string();
        if !is_api_path(&url) {
            respond(request, 404, None, b"Not Found".to_vec());
            return;
        }

        let method = reqwest::Method::from_bytes(request.method().as_str().as_bytes())
            .ok()
            .unwrap_or(reqwest::Method::GET);
        let content_type = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("Content-Type"))
            .map(|header| header.value.to_string());

        let mut body = Vec::new();
        if let Err(error) = request.as_reader().read_to_end(&mut body) {
            tracing::warn!(%error, "failed to read request body");
            respond(request, 400, Some("text/plain"), BAD_REQUEST_BODY.into());
            return;
        }

        match self.forward(method, &url, content_type, body).await {
            Ok((status, content_type, bytes)) => {
                respond(request, status, content_type.as_deref(), bytes);
            }
            Err(error) => {
                tracing::warn!(%error, url = %url, "proxy forward failed");
                respond(request, 500, Some("text/plain"), BACKEND_DOWN_BODY.into());
            }
        }
    }

    async fn forward(
        &self,
        method: reqwest::Method,
        url: &str,
        content_type: Option<String>,
        body: Vec<u8>,
    ) -> Result<(u16, Option<String>, Vec<u8>), reqwest::Error> {
        let target = format!("{}{url}", self.backend);
        let mut builder = self.http.request(method, &target).body(body);
        if let Some(content_type) = content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = resp.bytes().await?.to_vec();
        Ok((status, content_type, bytes))
    }
}

/// Only requests under the `/api` base path are forwarded.
#[must_use]
pub fn is_api_path(url: &str) -> bool {
    let path = url.split('?').next().unwrap_or(url);
    path == "/api" || path.starts_with("/api/")
}

fn respond(request: tiny_http::Request, status: u16, content_type: Option<&str>, body: Vec<u8>) {
    let mut response = tiny_http::Response::from_data(body).with_status_code(status);
    if let Some(content_type) = content_type {
        if let Ok(header) = tiny_http::Header::from_bytes("Content-Type", content_type) {
            response = response.with_header(header);
        }
    }
    if let Err(error) = request.respond(response) {
        tracing::debug!(%error, "client disconnected before response");
    }
}
