//! Serializable graph descriptions.

use algotrace_common::types::VertexId;
use algotrace_common::utils::error::GraphError;
use serde::{Deserialize, Serialize};

use super::{Graph, GraphConfig};

/// A graph as written in input files.
///
/// ```json
/// {
///   "vertices": ["A", "B", "C"],
///   "edges": [
///     { "from": "A", "to": "B", "weight": 4 },
///     { "from": "B", "to": "C", "directed": true }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    /// Vertices in insertion order.
    #[serde(default)]
    pub vertices: Vec<VertexId>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// One edge of a [`GraphSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    /// Source endpoint.
    pub from: VertexId,
    /// Target endpoint.
    pub to: VertexId,
    /// Edge weight (defaults to 1 for unweighted graphs).
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Whether the edge is one-way.
    #[serde(default)]
    pub directed: bool,
}

fn default_weight() -> f64 {
    1.0
}

impl EdgeSpec {
    /// An undirected edge.
    pub fn new(from: impl Into<VertexId>, to: impl Into<VertexId>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
            directed: false,
        }
    }

    /// Makes this edge one-way.
    #[must_use]
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }
}

impl Graph {
    /// Builds a graph from a spec, validating every edge.
    ///
    /// Duplicate vertices in the description are ignored; edges go through
    /// [`Graph::add_edge`], so the first invalid edge is reported.
    pub fn from_spec(spec: &GraphSpec, config: GraphConfig) -> Result<Self, GraphError> {
        let mut graph = Self::with_config(config);
        for vertex in &spec.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &spec.edges {
            graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight, edge.directed)?;
        }
        Ok(graph)
    }

    /// Describes this graph as a spec.
    #[must_use]
    pub fn to_spec(&self) -> GraphSpec {
        GraphSpec {
            vertices: self.vertices().cloned().collect(),
            edges: self
                .edges()
                .iter()
                .map(|e| EdgeSpec {
                    from: e.from.clone(),
                    to: e.to.clone(),
                    weight: e.weight,
                    directed: e.directed,
                })
                .collect(),
        }
    }
}
