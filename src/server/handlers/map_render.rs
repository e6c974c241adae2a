use super::common::*;
use crate::views::map;

#[derive(Debug, Deserialize)]
pub struct MapOptions {
    pub province: Option<String>,
}

pub async fn map_render_handler(
    opts: Result<Query<MapOptions>, QueryRejection>,
    State(app_data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    let Query(opts) = match opts {
        Ok(opts) => opts,
        Err(err) => return bad_request_json!(err.body_text()),
    };
    let dataset = app_data.dataset();

    let province = match opts.province {
        Some(name) => dataset.get_province(&name).map_err(not_found_response)?,
        None => dataset
            .provinces()
            .first()
            .ok_or_else(|| debug_to_err_response("No provinces available"))?,
    };

    Ok(Json(map::render(province, app_data.settings())))
}
