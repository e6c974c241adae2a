use serde::Serialize;

/// Node labels of generated graphs are 1-based.
pub type Node = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    pub fn normalized(&self) -> Self {
        if self.0 < self.1 {
            *self
        } else {
            Self(self.1, self.0)
        }
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

pub type NumNodes = Node;
pub type NumEdges = u64;

/// Number of distinct unordered pairs over `n` nodes.
pub fn max_edges(n: NumNodes) -> NumEdges {
    let n = n as NumEdges;
    n * n.saturating_sub(1) / 2
}
