use crate::health;
use axum::Router;
use axum::routing::get;
use epyl_kernel::domain::config::SiteConfig;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// `/health` plus the static directory; unknown paths fall back to the index page.
pub fn init(cfg: &SiteConfig) -> Router {
    health::start_clock();

    let static_dir = &cfg.server.static_dir;
    let index = ServeFile::new(static_dir.join(&cfg.export.file_name));
    let files = ServeDir::new(static_dir).fallback(index);

    Router::new()
        .route("/health", get(health::health_handler))
        .fallback_service(files)
        .layer(TraceLayer::new_for_http())
}
