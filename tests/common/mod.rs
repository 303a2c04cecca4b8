//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::Response;
use segment_router::config::ServerSettings;
use segment_router::{HttpServer, RequestContext, Router, Shutdown};
use tokio::net::TcpListener;

/// Status, headers and body of a dispatched request.
#[allow(dead_code)]
pub struct Outcome {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Handler answering `routePath:<pattern>|pathParam:<k:v ...>`.
pub async fn describe(_req: Request<Body>, ctx: RequestContext) -> String {
    let params: Vec<String> = ctx
        .params()
        .iter()
        .map(|(k, v)| format!("{k}:{v}"))
        .collect();
    format!("routePath:{}|pathParam:{}", ctx.route().path(), params.join(" "))
}

/// Handler answering 204 with no body.
#[allow(dead_code)]
pub async fn no_content(_req: Request<Body>, _ctx: RequestContext) -> StatusCode {
    StatusCode::NO_CONTENT
}

#[allow(dead_code)]
pub async fn into_outcome(response: Response) -> Outcome {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Outcome {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Dispatch `method uri` through `router` in-process.
#[allow(dead_code)]
pub async fn dispatch(router: &Router, method: &str, uri: &str, body: &'static str) -> Outcome {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    into_outcome(router.dispatch(req).await).await
}

/// Serve `router` on an ephemeral local port. Drop or trigger the returned
/// [`Shutdown`] to stop accepting.
#[allow(dead_code)]
pub async fn start_server(router: Router, settings: ServerSettings) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(Arc::new(router), settings);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}
