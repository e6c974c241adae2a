use axum::response::Html;

use super::common::*;
use crate::{
    server::html::render_page,
    views::{route, PageQuery},
};

/// Single entry point of the HTML frontend; `?page=` selects the view.
/// Malformed query strings are treated like an empty one.
pub async fn page_handler(
    query: Option<Query<PageQuery>>,
    State(app_data): State<Arc<AppState>>,
) -> HandlerResult<Html<String>> {
    let Query(query) = query.unwrap_or_default();

    let view = route(&query, app_data.dataset(), app_data.settings());
    let document = render_page(&view).map_err(debug_to_err_response)?;

    Ok(Html(document))
}
