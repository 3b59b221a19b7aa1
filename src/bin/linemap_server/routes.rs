//! HTTP route registration for the linemap server.

use super::*;

pub(super) fn app_router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/compare", post(compare))
        .route("/download/:filename", get(download_report))
        .route("/view/:filename", get(view_report))
        .layer(axum::extract::DefaultBodyLimit::max(max_upload_bytes))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
