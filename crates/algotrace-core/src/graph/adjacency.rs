//! Insertion-ordered weighted adjacency lists.
//!
//! This is the only graph structure the engines read. It is optimized for:
//! - Deterministic iteration (vertices, neighbors, and edges in insertion order)
//! - O(1) vertex lookup by id, and by dense index for per-vertex engine state
//! - Validation at the mutators, so engines can assume well-formed input

use algotrace_common::types::VertexId;
use algotrace_common::utils::error::GraphError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum number of edges the graph accepts (`None` = unbounded).
    pub max_edges: Option<usize>,
}

impl GraphConfig {
    /// Caps the number of edges.
    #[must_use]
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = Some(max_edges);
        self
    }
}

/// An edge as it was added to the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source endpoint.
    pub from: VertexId,
    /// Target endpoint.
    pub to: VertexId,
    /// Positive, finite weight.
    pub weight: f64,
    /// Whether the edge only runs `from -> to`.
    pub directed: bool,
}

impl Edge {
    /// Returns whether `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: &VertexId) -> bool {
        &self.from == vertex || &self.to == vertex
    }

    /// Returns the endpoint opposite `vertex`, if `vertex` is an endpoint.
    #[must_use]
    pub fn other(&self, vertex: &VertexId) -> Option<&VertexId> {
        if &self.from == vertex {
            Some(&self.to)
        } else if &self.to == vertex {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Returns whether this edge joins the ordered pair `from -> to`,
    /// taking direction into account.
    fn joins(&self, from: &VertexId, to: &VertexId) -> bool {
        (&self.from == from && &self.to == to)
            || (!self.directed && &self.from == to && &self.to == from)
    }
}

/// One adjacency entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The vertex this entry leads to.
    pub vertex: VertexId,
    /// Weight of the edge.
    pub weight: f64,
}

/// A weighted graph with per-edge direction.
///
/// Vertices are added with [`Graph::add_vertex`]; edges with
/// [`Graph::add_edge`], which rejects unknown endpoints rather than creating
/// them.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Configuration.
    config: GraphConfig,
    /// Vertex -> outgoing adjacency entries, in vertex insertion order.
    adjacency: IndexMap<VertexId, Vec<Neighbor>>,
    /// Edges in insertion order.
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Creates an empty graph with custom configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            adjacency: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the graph configuration.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    // === Vertex Operations ===

    /// Adds a vertex. Returns `false` (and changes nothing) if it already exists.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Returns whether the vertex exists.
    #[must_use]
    pub fn contains_vertex(&self, id: &VertexId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Returns the dense index of a vertex (its insertion position).
    #[must_use]
    pub fn vertex_index(&self, id: &VertexId) -> Option<usize> {
        self.adjacency.get_index_of(id)
    }

    /// Returns the vertex at a dense index.
    #[must_use]
    pub fn vertex_at(&self, index: usize) -> Option<&VertexId> {
        self.adjacency.get_index(index).map(|(id, _)| id)
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> + '_ {
        self.adjacency.keys()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    // === Edge Operations ===

    /// Adds an edge.
    ///
    /// Undirected edges are stored in both endpoints' adjacency lists.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`GraphError::UnknownVertex`] if either endpoint was never added
    /// - [`GraphError::SelfLoop`] if `from == to`
    /// - [`GraphError::DuplicateEdge`] if an edge already joins the endpoints
    ///   in this direction (an undirected edge joins both directions)
    /// - [`GraphError::NonPositiveWeight`] if `weight` is not positive and finite
    /// - [`GraphError::EdgeLimitExceeded`] if the configured limit is reached
    pub fn add_edge(
        &mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
        weight: f64,
        directed: bool,
    ) -> Result<(), GraphError> {
        let from = from.into();
        let to = to.into();

        for endpoint in [&from, &to] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::UnknownVertex(endpoint.clone()));
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        if self.find_edge(&from, &to, directed).is_some() {
            return Err(GraphError::DuplicateEdge { from, to });
        }
        if !(weight > 0.0 && weight.is_finite()) {
            return Err(GraphError::NonPositiveWeight { from, to, weight });
        }
        if let Some(max) = self.config.max_edges {
            if self.edges.len() >= max {
                return Err(GraphError::EdgeLimitExceeded(max));
            }
        }

        self.push_neighbor(&from, &to, weight);
        if !directed {
            self.push_neighbor(&to, &from, weight);
        }
        self.edges.push(Edge {
            from,
            to,
            weight,
            directed,
        });
        Ok(())
    }

    /// Adds an undirected edge of weight 1, for unweighted traversal demos.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::add_edge`].
    pub fn add_unweighted_edge(
        &mut self,
        from: impl Into<VertexId>,
        to: impl Into<VertexId>,
    ) -> Result<(), GraphError> {
        self.add_edge(from, to, 1.0, false)
    }

    /// Removes the edge joining `from -> to`. An undirected edge is matched in
    /// either orientation. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, from: &VertexId, to: &VertexId) -> bool {
        let Some(position) = self.edges.iter().position(|e| e.joins(from, to)) else {
            return false;
        };
        let edge = self.edges.remove(position);

        self.remove_neighbor(&edge.from, &edge.to);
        if !edge.directed {
            self.remove_neighbor(&edge.to, &edge.from);
        }
        true
    }

    /// Returns the adjacency list of a vertex in insertion order.
    ///
    /// Unknown vertices have no neighbors.
    #[must_use]
    pub fn neighbors(&self, id: &VertexId) -> &[Neighbor] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Returns the adjacency list of the vertex at a dense index.
    #[must_use]
    pub fn neighbors_at(&self, index: usize) -> &[Neighbor] {
        self.adjacency
            .get_index(index)
            .map_or(&[], |(_, list)| list.as_slice())
    }

    /// Returns the weight of the edge `from -> to`, if one exists.
    #[must_use]
    pub fn weight(&self, from: &VertexId, to: &VertexId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|n| &n.vertex == to)
            .map(|n| n.weight)
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of edges (an undirected edge counts once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether any edge is directed.
    #[must_use]
    pub fn has_directed_edges(&self) -> bool {
        self.edges.iter().any(|e| e.directed)
    }

    /// Returns whether `a` and `b` share an edge in either direction.
    #[must_use]
    pub fn are_adjacent(&self, a: &VertexId, b: &VertexId) -> bool {
        self.edges.iter().any(|e| e.other(a) == Some(b))
    }

    /// Finds an existing edge that a new `from -> to` edge would duplicate.
    fn find_edge(&self, from: &VertexId, to: &VertexId, directed: bool) -> Option<&Edge> {
        self.edges
            .iter()
            .find(|e| e.joins(from, to) || (!directed && e.joins(to, from)))
    }

    fn push_neighbor(&mut self, from: &VertexId, to: &VertexId, weight: f64) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(Neighbor {
                vertex: to.clone(),
                weight,
            });
        }
    }

    fn remove_neighbor(&mut self, from: &VertexId, to: &VertexId) {
        if let Some(list) = self.adjacency.get_mut(from) {
            if let Some(position) = list.iter().position(|n| &n.vertex == to) {
                list.remove(position);
            }
        }
    }
}
