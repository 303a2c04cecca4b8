//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the segment router in an Axum service
//! - Wire up middleware (tracing, write timeout)
//! - Accept connections and serve HTTP/1.1 and HTTP/2
//! - Apply the read timeout (HTTP/1 headers per connection, bodies per request)
//! - Stop accepting on shutdown

use std::sync::Arc;

use axum::{body::Body, extract::State, http::Request, response::Response, Router};
use hyper::body::Incoming;
use hyper_util::{
    rt::{TokioExecutor, TokioIo, TokioTimer},
    server::conn::auto,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Service;
use tower_http::{
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

use crate::config::ServerSettings;
use crate::routing::Router as SegmentRouter;

/// Error type for server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to accept connection.
    #[error("Failed to accept: {0}")]
    Accept(#[source] std::io::Error),
}

/// HTTP server dispatching every request through a [`SegmentRouter`].
#[derive(Debug)]
pub struct HttpServer {
    router: Arc<SegmentRouter>,
    settings: ServerSettings,
}

impl HttpServer {
    /// Create a server. The router is frozen from here on.
    pub fn new(router: Arc<SegmentRouter>, settings: ServerSettings) -> Self {
        Self { router, settings }
    }

    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    pub fn router(&self) -> &Arc<SegmentRouter> {
        &self.router
    }

    /// The Axum service with all middleware layers.
    ///
    /// Every path and method falls through to the segment router, which
    /// answers 404 itself.
    #[allow(deprecated)]
    pub fn app(&self) -> Router {
        let mut app = Router::new()
            .fallback(dispatch_handler)
            .with_state(Arc::clone(&self.router));

        if let Some(timeout) = self.settings.write_timeout {
            app = app.layer(TimeoutLayer::new(timeout));
        }

        // Header reads are bounded per connection (HTTP/1 only); this bounds
        // body reads on every protocol.
        if let Some(timeout) = self.settings.read_timeout {
            app = app.layer(RequestBodyTimeoutLayer::new(timeout));
        }

        app.layer(TraceLayer::new_for_http())
    }

    /// Bind the configured listen address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = self.settings.bind_address();
        TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })
    }

    /// Bind the configured address and serve until `shutdown` fires.
    pub async fn serve(self, shutdown: broadcast::Receiver<()>) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        self.run(listener, shutdown).await
    }

    /// Serve connections from `listener` until `shutdown` fires.
    ///
    /// In-flight connections are left to finish on their own tasks.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(
                address = %addr,
                routes = self.router.table().len(),
                read_timeout = ?self.settings.read_timeout,
                write_timeout = ?self.settings.write_timeout,
                "HTTP server starting"
            );
        }

        let app = self.app();
        let read_timeout = self.settings.read_timeout;

        loop {
            let (stream, peer) = tokio::select! {
                accepted = listener.accept() => accepted.map_err(ServerError::Accept)?,
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received");
                    break;
                }
            };

            let service = app.clone();
            tokio::spawn(async move {
                let hyper_service = hyper::service::service_fn(move |request: Request<Incoming>| {
                    service.clone().call(request)
                });

                let mut builder = auto::Builder::new(TokioExecutor::new());
                if let Some(timeout) = read_timeout {
                    builder
                        .http1()
                        .timer(TokioTimer::new())
                        .header_read_timeout(timeout);
                }

                if let Err(err) = builder
                    .serve_connection(TokioIo::new(stream), hyper_service)
                    .await
                {
                    tracing::debug!(peer_addr = %peer, error = %err, "Connection closed with error");
                }
            });
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn dispatch_handler(
    State(router): State<Arc<SegmentRouter>>,
    request: Request<Body>,
) -> Response {
    router.dispatch(request).await
}
