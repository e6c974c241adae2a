use serde::Serialize;

use super::ViewSettings;
use crate::graph::{
    figure::{render_svg, FigureError},
    GeneratedGraph, GraphError, GraphRequest, NumEdges, NumNodes, RandomGraphGenerator,
};

#[derive(Debug, thiserror::Error)]
pub enum GraphViewError {
    #[error(transparent)]
    InvalidInput(#[from] GraphError),
    #[error(transparent)]
    Figure(#[from] FigureError),
}

#[derive(Debug, Serialize)]
pub struct GraphRender {
    pub graph: GeneratedGraph,
    #[serde(skip)]
    pub figure_svg: String,
}

#[derive(Debug)]
pub struct GraphPage {
    pub request: GraphRequest,
    pub max_nodes: NumNodes,
    pub outcome: Option<Result<GraphRender, GraphViewError>>,
}

impl GraphPage {
    /// Upper bound of the edge count widget for the current node count.
    pub fn max_edges(&self) -> NumEdges {
        self.request.max_edges()
    }
}

pub fn render(
    generator: &RandomGraphGenerator,
    request: GraphRequest,
    seed: Option<u64>,
    settings: &ViewSettings,
) -> Result<GraphRender, GraphViewError> {
    let graph = generator.generate_seeded(request, seed)?;
    let figure_svg = render_svg(&graph, settings.figure_width, settings.figure_height)?;

    Ok(GraphRender { graph, figure_svg })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_figure() {
        let settings = ViewSettings::default();
        let generator = RandomGraphGenerator::new(settings.max_nodes);

        let render = render(&generator, GraphRequest::new(7, 6), Some(7), &settings).unwrap();
        assert_eq!(render.graph.num_edges(), 6);
        assert_eq!(render.figure_svg.matches("<circle").count(), 7);
    }

    #[test]
    fn invalid_input_is_not_drawn() {
        let settings = ViewSettings::default();
        let generator = RandomGraphGenerator::new(settings.max_nodes);

        let err = render(&generator, GraphRequest::new(4, 7), None, &settings).unwrap_err();
        assert!(matches!(
            err,
            GraphViewError::InvalidInput(GraphError::TooManyEdges { max: 6, .. })
        ));
    }
}
