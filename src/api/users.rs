use axum::body::Body;
use axum::http::Request;

use crate::routing::RequestContext;

/// `GET /users/:id`
pub async fn get_user(_req: Request<Body>, ctx: RequestContext) -> String {
    tracing::debug!(trace_id = %ctx.trace_id(), route = %ctx.route(), "get_user");
    format!("getuser: {}", ctx.param("id").unwrap_or_default())
}
