//! End-to-end tests over a real listener.

use std::time::Duration;

use segment_router::config::{ServerConfig, ServerSettings};
use segment_router::{api, Router};

mod common;

use common::{describe, start_server};

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

fn test_settings() -> ServerSettings {
    ServerSettings {
        listen_address: "127.0.0.1:0".to_string(),
        read_timeout: Some(Duration::from_secs(5)),
        write_timeout: Some(Duration::from_secs(5)),
    }
}

#[tokio::test]
async fn test_sample_api_over_http() {
    let mut router = Router::new();
    api::register(&mut router);
    let (addr, shutdown) = start_server(router, test_settings()).await;

    let res = client()
        .get(format!("http://{addr}/users/U-42"))
        .send()
        .await
        .expect("server unreachable");
    assert_eq!(res.status(), 200);
    let trace_id = res.headers()["x-trace-id"].to_str().unwrap().to_string();
    assert!(!trace_id.is_empty());
    assert_eq!(res.text().await.unwrap(), "getuser: U-42");

    let res = client()
        .get(format!("http://{addr}/missing/path"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert!(res.headers().get("x-trace-id").is_none());
    assert_eq!(res.text().await.unwrap(), "");

    shutdown.trigger();
}

#[tokio::test]
async fn test_method_mismatch_over_http() {
    let mut router = Router::new();
    router.get("/data", describe).post("/data", describe);
    let (addr, shutdown) = start_server(router, test_settings()).await;

    let res = client()
        .put(format!("http://{addr}/data"))
        .body("put body")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let res = client()
        .post(format!("http://{addr}/data/"))
        .body("req body")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "routePath:/data|pathParam:");

    shutdown.trigger();
}

#[tokio::test]
async fn test_stops_accepting_after_shutdown() {
    let (addr, shutdown) = start_server(Router::new(), test_settings()).await;
    shutdown.trigger();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let result = client().get(format!("http://{addr}/")).send().await;
    assert!(result.is_err());
}

#[test]
fn test_into_server_defaults() {
    let server = Router::new().into_server(&ServerConfig::default()).unwrap();
    assert_eq!(server.settings().listen_address, ":8080");
    assert_eq!(server.settings().read_timeout, Some(Duration::from_secs(60)));
    assert_eq!(server.settings().write_timeout, Some(Duration::from_secs(60)));
}

#[test]
fn test_into_server_custom() {
    let config = ServerConfig {
        port: ":9000".to_string(),
        read_timeout: "5m".to_string(),
        write_timeout: "10m".to_string(),
    };
    let server = Router::new().into_server(&config).unwrap();
    assert_eq!(server.settings().listen_address, ":9000");
    assert_eq!(server.settings().read_timeout, Some(Duration::from_secs(300)));
    assert_eq!(server.settings().write_timeout, Some(Duration::from_secs(600)));
}

#[test]
fn test_into_server_invalid_timeouts() {
    for (read, write, key) in [
        ("fiveMinute", "10m", "server.readTimeout"),
        ("5m", "tenMinutes", "server.writeTimeout"),
    ] {
        let config = ServerConfig {
            port: ":9000".to_string(),
            read_timeout: read.to_string(),
            write_timeout: write.to_string(),
        };
        let err = Router::new().into_server(&config).unwrap_err();
        assert!(err.to_string().contains(key), "{err}");
    }
}
