use std::collections::BTreeSet;

use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::edge::*;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("A graph needs at least 2 nodes, got {0}")]
    TooFewNodes(NumNodes),
    #[error("At most {max} nodes are supported, got {requested}")]
    TooManyNodes { requested: NumNodes, max: NumNodes },
    #[error("At least one edge must be requested")]
    NoEdges,
    #[error("{nodes} nodes allow at most {max} edges, got {requested}")]
    TooManyEdges {
        nodes: NumNodes,
        requested: NumEdges,
        max: NumEdges,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct GraphRequest {
    pub nodes: NumNodes,
    pub edges: NumEdges,
}

impl GraphRequest {
    pub fn new(nodes: NumNodes, edges: NumEdges) -> Self {
        Self { nodes, edges }
    }

    pub fn max_edges(&self) -> NumEdges {
        max_edges(self.nodes)
    }

    /// Rejects requests that cannot be satisfied before any sampling starts.
    pub fn validate(&self, max_nodes: NumNodes) -> Result<(), GraphError> {
        if self.nodes < 2 {
            return Err(GraphError::TooFewNodes(self.nodes));
        }

        if self.nodes > max_nodes {
            return Err(GraphError::TooManyNodes {
                requested: self.nodes,
                max: max_nodes,
            });
        }

        if self.edges == 0 {
            return Err(GraphError::NoEdges);
        }

        if self.edges > self.max_edges() {
            return Err(GraphError::TooManyEdges {
                nodes: self.nodes,
                requested: self.edges,
                max: self.max_edges(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedGraph {
    pub num_nodes: NumNodes,
    pub edges: BTreeSet<Edge>,
}

impl GeneratedGraph {
    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        1..=self.num_nodes
    }

    pub fn num_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

pub struct RandomGraphGenerator {
    max_nodes: NumNodes,
}

impl RandomGraphGenerator {
    pub fn new(max_nodes: NumNodes) -> Self {
        Self { max_nodes }
    }

    /// Generates with a `StdRng` seeded from `seed` if given, and with the
    /// thread rng otherwise.
    pub fn generate_seeded(
        &self,
        request: GraphRequest,
        seed: Option<u64>,
    ) -> Result<GeneratedGraph, GraphError> {
        match seed {
            Some(seed) => self.generate(&mut StdRng::seed_from_u64(seed), request),
            None => self.generate(&mut rand::rng(), request),
        }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: GraphRequest,
    ) -> Result<GeneratedGraph, GraphError> {
        request.validate(self.max_nodes)?;

        // once more than half of all pairs are requested, collisions dominate
        // the rejection sampler; shuffling the pair space is bounded instead
        let edges = if 2 * request.edges > request.max_edges() {
            sample_by_shuffle(rng, request)
        } else {
            sample_by_rejection(rng, request)
        };

        debug_assert_eq!(edges.len() as NumEdges, request.edges);
        debug!(
            "Generated graph with {} nodes and {} edges",
            request.nodes,
            edges.len()
        );

        Ok(GeneratedGraph {
            num_nodes: request.nodes,
            edges,
        })
    }
}

fn sample_by_rejection<R: Rng + ?Sized>(rng: &mut R, request: GraphRequest) -> BTreeSet<Edge> {
    let mut edges = BTreeSet::new();
    let mut draws: u64 = 0;

    while (edges.len() as NumEdges) < request.edges {
        draws += 1;
        let edge = Edge(
            rng.random_range(1..=request.nodes),
            rng.random_range(1..=request.nodes),
        );

        if edge.is_loop() {
            continue;
        }

        edges.insert(edge.normalized());
    }

    debug!("Rejection sampling took {draws} draws");
    edges
}

fn sample_by_shuffle<R: Rng + ?Sized>(rng: &mut R, request: GraphRequest) -> BTreeSet<Edge> {
    let mut pairs: Vec<Edge> = (1..=request.nodes)
        .tuple_combinations::<(Node, Node)>()
        .map(|(u, v)| Edge(u, v))
        .collect();

    let (chosen, _) = pairs.partial_shuffle(rng, request.edges as usize);
    chosen.iter().copied().collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn assert_simple_graph(graph: &GeneratedGraph, request: GraphRequest) {
        assert_eq!(graph.num_nodes, request.nodes);
        assert_eq!(graph.num_edges(), request.edges);
        for Edge(u, v) in &graph.edges {
            assert!(u < v);
            assert!((1..=request.nodes).contains(u));
            assert!((1..=request.nodes).contains(v));
        }
    }

    #[test]
    fn single_edge() {
        let generator = RandomGraphGenerator::new(100);
        let graph = generator.generate_seeded(GraphRequest::new(2, 1), None).unwrap();

        assert_eq!(graph.edges.into_iter().collect::<Vec<_>>(), vec![Edge(1, 2)]);
    }

    #[test]
    fn seven_nodes_six_edges() {
        let generator = RandomGraphGenerator::new(100);
        let request = GraphRequest::new(7, 6);

        for seed in 0..20 {
            let graph = generator.generate_seeded(request, Some(seed)).unwrap();
            assert_simple_graph(&graph, request);
        }
    }

    #[test]
    fn complete_graph() {
        let generator = RandomGraphGenerator::new(100);
        let request = GraphRequest::new(100, max_edges(100));

        let graph = generator.generate_seeded(request, Some(1)).unwrap();
        assert_simple_graph(&graph, request);
        assert_eq!(graph.num_edges(), 4950);
    }

    #[test]
    fn seed_is_reproducible() {
        let generator = RandomGraphGenerator::new(100);
        let request = GraphRequest::new(30, 40);

        let a = generator.generate_seeded(request, Some(42)).unwrap();
        let b = generator.generate_seeded(request, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_requests() {
        let generator = RandomGraphGenerator::new(100);

        assert_eq!(
            generator.generate_seeded(GraphRequest::new(1, 1), None),
            Err(GraphError::TooFewNodes(1))
        );
        assert_eq!(
            generator.generate_seeded(GraphRequest::new(101, 1), None),
            Err(GraphError::TooManyNodes {
                requested: 101,
                max: 100
            })
        );
        assert_eq!(
            generator.generate_seeded(GraphRequest::new(5, 0), None),
            Err(GraphError::NoEdges)
        );
        assert_eq!(
            generator.generate_seeded(GraphRequest::new(5, 11), None),
            Err(GraphError::TooManyEdges {
                nodes: 5,
                requested: 11,
                max: 10
            })
        );
    }

    fn request_strategy() -> impl Strategy<Value = GraphRequest> {
        (2u32..=40).prop_flat_map(|nodes| {
            (1..=max_edges(nodes)).prop_map(move |edges| GraphRequest::new(nodes, edges))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generates_exact_simple_graph(request in request_strategy(), seed in any::<u64>()) {
            let graph = RandomGraphGenerator::new(40).generate_seeded(request, Some(seed)).unwrap();

            prop_assert_eq!(graph.num_edges(), request.edges);
            for Edge(u, v) in &graph.edges {
                prop_assert!(u < v);
                prop_assert!(*u >= 1 && *v <= request.nodes);
            }
        }
    }
}
