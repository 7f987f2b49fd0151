use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use epyl_kernel::domain::config::SiteConfig;
use http_body_util::BodyExt;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!DOCTYPE html><html lang=\"es\"><body>EPYL</body></html>";

fn site() -> (TempDir, SiteConfig) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), INDEX).unwrap();
    fs::write(dir.path().join("placeholder.svg"), "<svg></svg>").unwrap();

    let mut cfg = SiteConfig::default();
    cfg.server.static_dir = dir.path().to_path_buf();
    (dir, cfg)
}

async fn get(cfg: &SiteConfig, uri: &str) -> axum::response::Response {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    epyl_server::router(cfg).oneshot(req).await.unwrap()
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let (_dir, cfg) = site();

    let resp = get(&cfg, "/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate"
    );
    assert_eq!(resp.headers().get(header::PRAGMA).unwrap(), "no-cache");

    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    let uptime = json["uptime"].as_u64().unwrap();
    assert!(uptime < 60, "clock starts when the router is built, got {uptime}s");
}

#[tokio::test]
async fn root_serves_the_exported_index() {
    let (_dir, cfg) = site();

    let resp = get(&cfg, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, INDEX);
}

#[tokio::test]
async fn assets_are_served_from_the_static_dir() {
    let (_dir, cfg) = site();

    let resp = get(&cfg, "/placeholder.svg?height=32&width=32").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "<svg></svg>");
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_index() {
    let (_dir, cfg) = site();

    let resp = get(&cfg, "/eventos/retiro").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, INDEX);
}

#[test]
fn build_rejects_a_missing_static_dir() {
    let dir = tempfile::tempdir().unwrap();

    let err = epyl_server::Server::builder()
        .static_dir(dir.path().join("missing"))
        .build()
        .unwrap_err();

    assert!(err.to_string().contains("Static directory not found"));
}

#[test]
fn build_accepts_an_existing_static_dir() {
    let (_dir, cfg) = site();

    let server = epyl_server::Server::builder().config(cfg.clone()).port(9000).build().unwrap();

    assert_eq!(server.config().server.port, 9000);
    assert_eq!(server.config().server.static_dir, cfg.server.static_dir);
}
