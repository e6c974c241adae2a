use super::common::*;

pub async fn province_list_handler(State(app_data): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "provinces": app_data.dataset().list_provinces(),
    }))
}
