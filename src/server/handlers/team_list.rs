use super::common::*;
use crate::views::team;

pub async fn team_list_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "members": team::render().members,
    }))
}
