//! Handler abstraction invoked on a successful match.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};

use crate::routing::context::RequestContext;

/// Boxed future returned by [`Handler::call`].
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// Request handler attached to a route.
///
/// Any `Fn(Request<Body>, RequestContext) -> impl Future` whose output
/// implements [`IntoResponse`] is a handler, so plain `async fn`s work:
///
/// ```
/// use axum::{body::Body, http::Request};
/// use segment_router::routing::RequestContext;
///
/// async fn get_item(_req: Request<Body>, ctx: RequestContext) -> String {
///     format!("item {}", ctx.param("id").unwrap_or_default())
/// }
/// # let mut router = segment_router::Router::new();
/// # router.get("/items/:id", get_item);
/// ```
pub trait Handler: Send + Sync + 'static {
    fn call(&self, req: Request<Body>, ctx: RequestContext) -> BoxFuture<Response>;
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request<Body>, RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse,
{
    fn call(&self, req: Request<Body>, ctx: RequestContext) -> BoxFuture<Response> {
        let fut = (self)(req, ctx);
        Box::pin(async move { fut.await.into_response() })
    }
}

/// Shared, type-erased handler as stored in the route table.
pub type BoxedHandler = Arc<dyn Handler>;
