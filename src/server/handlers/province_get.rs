use axum::extract::Path;

use super::common::*;

pub async fn province_get_handler(
    Path(name): Path<String>,
    State(app_data): State<Arc<AppState>>,
) -> HandlerResult<impl IntoResponse> {
    let province = app_data
        .dataset()
        .get_province(&name)
        .map_err(not_found_response)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "province": province,
    })))
}
