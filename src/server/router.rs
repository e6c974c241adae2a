use super::{app_state::AppState, handlers::*};
use axum::{handler::HandlerWithoutStateExt, http::StatusCode, routing::get, Router};

use std::sync::Arc;

use tower_http::{services::ServeDir, trace::TraceLayer};

async fn handle_404() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

#[rustfmt::skip]
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/", get(page_handler))
        .route("/api/status", get(status_handler))
        .route("/api/provinces", get(province_list_handler))
        .route("/api/provinces/:name", get(province_get_handler))
        .route("/api/map", get(map_render_handler))
        .route("/api/graph", get(graph_generate_handler))
        .route("/api/graph/figure.svg", get(graph_figure_handler))
        .route("/api/team", get(team_list_handler));

    let service_404 = handle_404.into_service();
    router
        .fallback_service(
            ServeDir::new("assets")
                .precompressed_gzip()
                .not_found_service(service_404))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
