use super::common::*;
use crate::views::team::TEAM_MEMBERS;

#[derive(Serialize)]
struct Response {
    status: &'static str,
    num_provinces: usize,
    num_cities: usize,
    num_connections: usize,
    num_team_members: usize,
    max_nodes: u32,
}

pub async fn status_handler(State(app_data): State<Arc<AppState>>) -> impl IntoResponse {
    let dataset = app_data.dataset();

    Json(Response {
        status: "ok",
        num_provinces: dataset.provinces().len(),
        num_cities: dataset.num_cities(),
        num_connections: dataset.num_connections(),
        num_team_members: TEAM_MEMBERS.len(),
        max_nodes: app_data.settings().max_nodes,
    })
}
