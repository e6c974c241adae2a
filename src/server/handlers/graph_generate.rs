use super::common::*;
use crate::graph::{GraphRequest, NumEdges, NumNodes};

#[derive(Debug, Clone, Deserialize)]
pub struct GraphOptions {
    pub nodes: NumNodes,
    pub edges: NumEdges,
    pub seed: Option<u64>,
}

impl GraphOptions {
    pub fn request(&self) -> GraphRequest {
        GraphRequest::new(self.nodes, self.edges)
    }
}

pub async fn graph_generate_handler(
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

    Ok(Json(serde_json::json!({
        "status": "ok",
        "nodes": graph.num_nodes,
        "edges": graph.edges,
    })))
}
