use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{generator::GeneratedGraph, layout::*};

pub const NODE_COLOR: RGBColor = RGBColor(135, 206, 235);
pub const EDGE_COLOR: RGBColor = RGBColor(128, 128, 128);
pub const NODE_RADIUS: i32 = 14;
pub const LABEL_FONT_FAMILY: &str = "sans-serif";
pub const LABEL_SIZE_PX: f64 = 12.0;

// plotters' svg backend writes `font-size` as the requested size / 1.24
const SVG_FONT_SCALE: f64 = 1.24;

const MARGIN: u32 = 30;

#[derive(Debug, thiserror::Error)]
#[error("Failed to draw graph figure: {0}")]
pub struct FigureError(String);

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for FigureError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Self(err.to_string())
    }
}

/// Draws `graph` with a circular layout into an SVG document of the given
/// size.
pub fn render_svg(graph: &GeneratedGraph, width: u32, height: u32) -> Result<String, FigureError> {
    let positions = to_canvas(&circular_layout(graph.num_nodes), width, height, MARGIN);
    let position_of = |node: u32| positions[(node - 1) as usize];

    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;

        // edges first so that nodes are painted on top
        for edge in &graph.edges {
            root.draw(&PathElement::new(
                vec![position_of(edge.0), position_of(edge.1)],
                EDGE_COLOR.stroke_width(1),
            ))?;
        }

        let label_style = (LABEL_FONT_FAMILY, LABEL_SIZE_PX * SVG_FONT_SCALE)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));

        for node in graph.nodes() {
            let center = position_of(node);
            root.draw(&Circle::new(center, NODE_RADIUS, NODE_COLOR.filled()))?;
            root.draw(&Text::new(node.to_string(), center, label_style.clone()))?;
        }

        root.present()?;
    }

    Ok(document)
}
