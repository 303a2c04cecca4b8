use axum::body::Body;
use axum::http::Request;
use axum::Json;
use serde::Serialize;

use crate::routing::RequestContext;

#[derive(Serialize)]
pub struct SystemStatus {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub request: RequestContext,
}

/// `GET /`
pub async fn get_status(_req: Request<Body>, ctx: RequestContext) -> Json<SystemStatus> {
    Json(SystemStatus {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        request: ctx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::request::X_TRACE_ID;
    use crate::routing::Router;

    #[tokio::test]
    async fn test_status_reports_route_and_trace_id() {
        let mut router = Router::new();
        router.get("/", get_status);

        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = router.dispatch(req).await;
        let header = response.headers()[X_TRACE_ID].to_str().unwrap().to_string();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "operational");
        assert_eq!(value["request"]["route"]["path"], "/");
        assert_eq!(value["request"]["trace_id"], header.as_str());
    }
}
