use axum::http::header::CONTENT_TYPE;

use super::{common::*, graph_generate::GraphOptions};
use crate::graph::figure::render_svg;

pub async fn graph_figure_handler(
    opts: Result<Query<GraphOptions>, QueryRejection>,
    State(app_data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    let Query(opts) = match opts {
        Ok(opts) => opts,
        Err(err) => return bad_request_json!(err.body_text()),
    };

    let graph = app_data
        .generator()
        .generate_seeded(opts.request(), opts.seed)
        .map_err(invalid_input_response)?;

    let settings = app_data.settings();
    let svg = render_svg(&graph, settings.figure_width, settings.figure_height)
        .map_err(debug_to_err_response)?;

    Ok(([(CONTENT_TYPE, "image/svg+xml")], svg))
}
