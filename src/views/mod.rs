//! The three pages of the application and the controller choosing between
//! them. Views produce render instructions only; turning them into HTML is
//! left to the server.

pub mod graph;
pub mod map;
pub mod team;

use std::str::FromStr;

use serde::Deserialize;
use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, warn};

use crate::{
    dataset::Dataset,
    graph::{GraphError, GraphRequest, NumEdges, NumNodes, RandomGraphGenerator},
};

pub const DEFAULT_NODES: NumNodes = 10;
pub const DEFAULT_EDGES: NumEdges = 15;

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub max_nodes: NumNodes,
    pub map_zoom: u8,
    pub map_width: u32,
    pub map_height: u32,
    pub figure_width: u32,
    pub figure_height: u32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            max_nodes: 100,
            map_zoom: 8,
            map_width: 700,
            map_height: 500,
            figure_width: 700,
            figure_height: 500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Map,
    Graph,
    Team,
}

impl Page {
    /// Unknown or missing keys resolve to the map page.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            None => Self::default(),
            Some(key) => key.parse().unwrap_or_else(|_| {
                debug!("Unknown page key {key:?}; falling back to the map page");
                Self::default()
            }),
        }
    }

    pub fn key(self) -> &'static str {
        self.into()
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Map => "Map",
            Page::Graph => "Graph Generator",
            Page::Team => "Team",
        }
    }
}

/// Everything a page load may carry in its query string. Widget values stay
/// raw so that a malformed number cannot affect the page selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub province: Option<String>,
    pub nodes: Option<String>,
    pub edges: Option<String>,
    pub generate: Option<String>,
    pub seed: Option<String>,
}

impl PageQuery {
    /// Counts and seed of the graph form; absent counts take the defaults.
    pub fn graph_inputs(&self) -> Result<(GraphRequest, Option<u64>), GraphError> {
        let nodes = parse_input("nodes", self.nodes.as_deref())?.unwrap_or(DEFAULT_NODES);
        let edges = parse_input("edges", self.edges.as_deref())?.unwrap_or(DEFAULT_EDGES);
        let seed = parse_input("seed", self.seed.as_deref())?;

        Ok((GraphRequest::new(nodes, edges), seed))
    }
}

fn parse_input<T: FromStr>(field: &'static str, value: Option<&str>) -> Result<Option<T>, GraphError> {
    value
        .map(|v| {
            v.trim().parse().map_err(|_| GraphError::NotANumber {
                field,
                value: v.to_owned(),
            })
        })
        .transpose()
}

#[derive(Debug)]
pub enum PageView {
    Map(map::MapPage),
    Graph(graph::GraphPage),
    Team(team::TeamRender),
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Map(_) => Page::Map,
            PageView::Graph(_) => Page::Graph,
            PageView::Team(_) => Page::Team,
        }
    }
}

pub fn route(query: &PageQuery, dataset: &Dataset, settings: &ViewSettings) -> PageView {
    match Page::from_key(query.page.as_deref()) {
        Page::Map => PageView::Map(map_page(query, dataset, settings)),
        Page::Graph => PageView::Graph(graph_page(query, settings)),
        Page::Team => PageView::Team(team::render()),
    }
}

fn map_page(query: &PageQuery, dataset: &Dataset, settings: &ViewSettings) -> map::MapPage {
    let requested = query
        .province
        .as_deref()
        .and_then(|name| match dataset.get_province(name) {
            Ok(province) => Some(province),
            Err(err) => {
                warn!("{err}; showing the first province instead");
                None
            }
        });

    let province = requested.or_else(|| dataset.provinces().first());

    map::MapPage {
        provinces: dataset.list_provinces(),
        render: province.map(|p| map::render(p, settings)),
    }
}

fn graph_page(query: &PageQuery, settings: &ViewSettings) -> graph::GraphPage {
    let inputs = query.graph_inputs();
    let request = match &inputs {
        Ok((request, _)) => *request,
        Err(_) => GraphRequest::new(DEFAULT_NODES, DEFAULT_EDGES),
    };

    let outcome = query.generate.is_some().then(|| -> Result<_, graph::GraphViewError> {
        let (request, seed) = inputs?;
        let generator = RandomGraphGenerator::new(settings.max_nodes);
        graph::render(&generator, request, seed, settings)
    });

    graph::GraphPage {
        request,
        max_nodes: settings.max_nodes,
        outcome,
    }
}
