//! Algorithm requests, inputs, and outcomes.
//!
//! A request names an algorithm and its parameters; an input is the data it
//! runs on. The pairing is checked at dispatch time: asking for Dijkstra on
//! an array is an [`EngineError::InvalidParameter`].

use std::fmt;

use algotrace_adapters::plugins::algorithms::{
    BfsAlgorithm, ColoringSolution, DfsAlgorithm, DijkstraAlgorithm, GraphColoringAlgorithm,
    KruskalAlgorithm, NQueensAlgorithm, PrimAlgorithm, QueensSolution, ShortestPath,
    SortAlgorithm, SortKind, SpanningTree, TracedAlgorithm, Traversal, TreeOrder,
    TreeTraversalAlgorithm,
};
use algotrace_common::types::VertexId;
use algotrace_common::utils::error::EngineError;
use algotrace_core::{AlgorithmKind, BinaryTree, Graph, TraceRecorder, Traced};
use serde::Serialize;

/// Which algorithm to run, with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmRequest {
    /// Shortest path from `start` to `end`.
    Dijkstra {
        /// Source vertex.
        start: VertexId,
        /// Target vertex.
        end: VertexId,
    },
    /// Kruskal spanning tree.
    Kruskal,
    /// Prim spanning tree.
    Prim,
    /// Breadth-first search.
    Bfs {
        /// Start vertex.
        start: VertexId,
    },
    /// Depth-first search; every component when `start` is `None`.
    Dfs {
        /// Start vertex.
        start: Option<VertexId>,
    },
    /// N-Queens on an `n`x`n` board.
    NQueens {
        /// Board size.
        n: usize,
    },
    /// Graph coloring with at most `palette_size` colors.
    GraphColoring {
        /// Number of colors.
        palette_size: usize,
    },
    /// Sorting.
    Sort {
        /// Which sort.
        kind: SortKind,
    },
    /// Binary tree traversal.
    TreeTraversal {
        /// Visit order.
        order: TreeOrder,
    },
}

impl AlgorithmRequest {
    /// Returns the algorithm this request runs.
    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Dijkstra { .. } => AlgorithmKind::Dijkstra,
            Self::Kruskal => AlgorithmKind::Kruskal,
            Self::Prim => AlgorithmKind::Prim,
            Self::Bfs { .. } => AlgorithmKind::Bfs,
            Self::Dfs { .. } => AlgorithmKind::Dfs,
            Self::NQueens { .. } => AlgorithmKind::NQueens,
            Self::GraphColoring { .. } => AlgorithmKind::GraphColoring,
            Self::Sort { kind } => kind.algorithm(),
            Self::TreeTraversal { .. } => AlgorithmKind::TreeTraversal,
        }
    }

    /// Returns the kind of input this request needs.
    #[must_use]
    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Dijkstra { .. }
            | Self::Kruskal
            | Self::Prim
            | Self::Bfs { .. }
            | Self::Dfs { .. }
            | Self::GraphColoring { .. } => InputKind::Graph,
            Self::NQueens { .. } => InputKind::None,
            Self::Sort { .. } => InputKind::Array,
            Self::TreeTraversal { .. } => InputKind::Tree,
        }
    }

    /// Runs the request against `input`, recording into `recorder`.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidParameter`] if the input does not fit the
    /// request, otherwise whatever the algorithm reports.
    pub fn execute(
        &self,
        input: AlgorithmInput<'_>,
        recorder: TraceRecorder,
    ) -> Result<Traced<Outcome>, EngineError> {
        match (self, input) {
            (Self::Dijkstra { start, end }, AlgorithmInput::Graph(graph)) => {
                run(&DijkstraAlgorithm::new(start.clone(), end.clone()), graph, recorder)
            }
            (Self::Kruskal, AlgorithmInput::Graph(graph)) => run(&KruskalAlgorithm, graph, recorder),
            (Self::Prim, AlgorithmInput::Graph(graph)) => run(&PrimAlgorithm, graph, recorder),
            (Self::Bfs { start }, AlgorithmInput::Graph(graph)) => {
                run(&BfsAlgorithm::new(start.clone()), graph, recorder)
            }
            (Self::Dfs { start }, AlgorithmInput::Graph(graph)) => {
                let algorithm = match start {
                    Some(start) => DfsAlgorithm::new(start.clone()),
                    None => DfsAlgorithm::all(),
                };
                run(&algorithm, graph, recorder)
            }
            (Self::GraphColoring { palette_size }, AlgorithmInput::Graph(graph)) => run(
                &GraphColoringAlgorithm::new(*palette_size),
                graph,
                recorder,
            ),
            (Self::NQueens { n }, _) => run(&NQueensAlgorithm, n, recorder),
            (Self::Sort { kind }, AlgorithmInput::Array(values)) => {
                run(&SortAlgorithm::new(*kind), values, recorder)
            }
            (Self::TreeTraversal { order }, AlgorithmInput::Tree(tree)) => {
                run(&TreeTraversalAlgorithm::new(*order), tree, recorder)
            }
            (request, input) => Err(EngineError::InvalidParameter(format!(
                "{} needs {} input, got {}",
                request.kind(),
                request.input_kind(),
                input.kind()
            ))),
        }
    }
}

fn run<A>(
    algorithm: &A,
    input: &A::Input,
    recorder: TraceRecorder,
) -> Result<Traced<Outcome>, EngineError>
where
    A: TracedAlgorithm,
    A::Output: Into<Outcome>,
{
    let traced = algorithm.run_with(input, recorder)?;
    Ok(Traced {
        output: traced.output.into(),
        trace: traced.trace,
    })
}

/// The data an algorithm runs on.
#[derive(Debug, Clone, Copy)]
pub enum AlgorithmInput<'a> {
    /// A graph.
    Graph(&'a Graph),
    /// An array.
    Array(&'a [i64]),
    /// A binary tree.
    Tree(&'a BinaryTree),
    /// No input (N-Queens).
    None,
}

impl AlgorithmInput<'_> {
    /// Returns the kind of this input.
    #[must_use]
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Graph(_) => InputKind::Graph,
            Self::Array(_) => InputKind::Array,
            Self::Tree(_) => InputKind::Tree,
            Self::None => InputKind::None,
        }
    }
}

/// Input shape, for error messages and CLI validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A graph.
    Graph,
    /// An array.
    Array,
    /// A binary tree.
    Tree,
    /// Nothing.
    None,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Graph => "a graph",
            Self::Array => "an array",
            Self::Tree => "a tree",
            Self::None => "no",
        })
    }
}

/// What an algorithm computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    /// Dijkstra result.
    ShortestPath(ShortestPath),
    /// Kruskal/Prim result.
    SpanningTree(SpanningTree),
    /// BFS/DFS result.
    Traversal(Traversal),
    /// N-Queens result.
    Queens(QueensSolution),
    /// Graph coloring result.
    Coloring(ColoringSolution),
    /// Sorted values or tree values in visit order.
    Values {
        /// The values.
        values: Vec<i64>,
    },
}

impl Outcome {
    /// One-line human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let join = |items: &[VertexId]| {
            items
                .iter()
                .map(VertexId::as_str)
                .collect::<Vec<_>>()
                .join(" -> ")
        };
        match self {
            Self::ShortestPath(result) if result.is_reachable() => {
                format!("path {} (distance {})", join(&result.path), result.distance)
            }
            Self::ShortestPath(_) => "target unreachable".to_string(),
            Self::SpanningTree(tree) => format!(
                "{} edges, total weight {}{}",
                tree.edges.len(),
                tree.total_weight,
                if tree.spanning { "" } else { " (spanning forest)" }
            ),
            Self::Traversal(traversal) => format!("visit order {}", join(&traversal.order)),
            Self::Queens(QueensSolution {
                rows: Some(rows), ..
            }) => format!("rows by column {rows:?}"),
            Self::Queens(solution) => format!("no solution for {} queens", solution.n),
            Self::Coloring(ColoringSolution {
                assignment: Some(assignment),
                ..
            }) => assignment
                .iter()
                .map(|(v, c)| format!("{v}={c}"))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Coloring(solution) => {
                format!("no coloring with {} colors", solution.palette_size)
            }
            Self::Values { values } => format!("{values:?}"),
        }
    }
}

macro_rules! impl_into_outcome {
    ($($output:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$output> for Outcome {
                fn from(output: $output) -> Self {
                    Self::$variant(output)
                }
            }
        )*
    };
}

impl_into_outcome! {
    ShortestPath => ShortestPath,
    SpanningTree => SpanningTree,
    Traversal => Traversal,
    QueensSolution => Queens,
    ColoringSolution => Coloring,
}

impl From<Vec<i64>> for Outcome {
    fn from(values: Vec<i64>) -> Self {
        Self::Values { values }
    }
}
