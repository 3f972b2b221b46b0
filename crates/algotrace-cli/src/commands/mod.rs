//! CLI command implementations.

pub mod play;
pub mod run;
pub mod validate;

use std::path::PathBuf;
use std::time::Duration;

use algotrace_adapters::plugins::algorithms::{SortKind, TreeOrder};
use algotrace_common::VertexId;
use algotrace_core::{BinaryTree, Graph, Traced};
use algotrace_engine::request::InputKind;
use algotrace_engine::{AlgorithmInput, AlgorithmRequest, Config, Outcome, Visualizer};
use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};

/// Algorithms the CLI can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmName {
    /// Shortest path (needs --graph, --start, --end)
    Dijkstra,
    /// Minimum spanning tree by edge order (needs --graph)
    Kruskal,
    /// Minimum spanning tree by growth (needs --graph)
    Prim,
    /// Breadth-first search (needs --graph, --start)
    Bfs,
    /// Depth-first search (needs --graph; every component without --start)
    Dfs,
    /// N-Queens (uses --queens)
    #[value(alias = "queens")]
    NQueens,
    /// Graph coloring (needs --graph, uses --colors)
    #[value(alias = "coloring")]
    GraphColoring,
    /// Bubble sort (needs --array)
    BubbleSort,
    /// Selection sort (needs --array)
    SelectionSort,
    /// Merge sort (needs --array)
    MergeSort,
    /// Quick sort (needs --array)
    QuickSort,
    /// Binary tree traversal (needs --tree, uses --order)
    #[value(alias = "tree")]
    TreeTraversal,
}

/// Algorithm selection and its inputs, shared by `run` and `play`.
#[derive(Args, Debug, Clone)]
pub struct AlgorithmArgs {
    /// Algorithm to run
    #[arg(value_enum)]
    pub algorithm: AlgorithmName,

    /// Path to a graph JSON file
    #[arg(long)]
    pub graph: Option<PathBuf>,

    /// Start vertex
    #[arg(long)]
    pub start: Option<String>,

    /// Target vertex
    #[arg(long)]
    pub end: Option<String>,

    /// Board size for N-Queens
    #[arg(long, default_value_t = 8)]
    pub queens: usize,

    /// Number of colors for graph coloring
    #[arg(long, default_value_t = 3)]
    pub colors: usize,

    /// Values to sort, comma separated (e.g. 5,3,1)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub array: Vec<i64>,

    /// Level-order tree, comma separated with null holes (e.g. 1,2,3,null,4)
    #[arg(long)]
    pub tree: Option<String>,

    /// Tree traversal order (preorder, inorder, postorder, level-order)
    #[arg(long, default_value = "inorder")]
    pub order: String,

    /// Stop the run after this many steps
    #[arg(long)]
    pub step_limit: Option<usize>,
}

impl AlgorithmArgs {
    /// Builds the engine request from the arguments.
    pub fn request(&self) -> Result<AlgorithmRequest> {
        let sort = |kind| AlgorithmRequest::Sort { kind };
        Ok(match self.algorithm {
            AlgorithmName::Dijkstra => AlgorithmRequest::Dijkstra {
                start: required(self.start.as_deref(), "--start")?,
                end: required(self.end.as_deref(), "--end")?,
            },
            AlgorithmName::Kruskal => AlgorithmRequest::Kruskal,
            AlgorithmName::Prim => AlgorithmRequest::Prim,
            AlgorithmName::Bfs => AlgorithmRequest::Bfs {
                start: required(self.start.as_deref(), "--start")?,
            },
            AlgorithmName::Dfs => AlgorithmRequest::Dfs {
                start: self.start.as_deref().map(VertexId::from),
            },
            AlgorithmName::NQueens => AlgorithmRequest::NQueens { n: self.queens },
            AlgorithmName::GraphColoring => AlgorithmRequest::GraphColoring {
                palette_size: self.colors,
            },
            AlgorithmName::BubbleSort => sort(SortKind::Bubble),
            AlgorithmName::SelectionSort => sort(SortKind::Selection),
            AlgorithmName::MergeSort => sort(SortKind::Merge),
            AlgorithmName::QuickSort => sort(SortKind::Quick),
            AlgorithmName::TreeTraversal => AlgorithmRequest::TreeTraversal {
                order: self.order.parse::<TreeOrder>()?,
            },
        })
    }

    /// Builds a visualizer honoring `--step-limit` and the playback interval.
    pub fn visualizer(&self, interval: Option<Duration>) -> Visualizer {
        let mut config = Config {
            step_limit: self.step_limit,
            ..Config::default()
        };
        if let Some(interval) = interval {
            config = config.with_playback_interval(interval);
        }
        Visualizer::with_config(config)
    }

    /// Loads the input `kind` calls for.
    pub fn load_input(&self, visualizer: &Visualizer, kind: InputKind) -> Result<LoadedInput> {
        Ok(match kind {
            InputKind::Graph => {
                let Some(path) = &self.graph else {
                    bail!("{} needs --graph", self.algorithm_label());
                };
                let graph = visualizer
                    .load_graph(path)
                    .with_context(|| format!("failed to load graph from {}", path.display()))?;
                LoadedInput::Graph(graph)
            }
            InputKind::Array => {
                if self.array.is_empty() {
                    bail!("{} needs --array", self.algorithm_label());
                }
                LoadedInput::Array(self.array.clone())
            }
            InputKind::Tree => {
                let Some(tree) = &self.tree else {
                    bail!("{} needs --tree", self.algorithm_label());
                };
                LoadedInput::Tree(tree.parse()?)
            }
            InputKind::None => LoadedInput::None,
        })
    }

    fn algorithm_label(&self) -> String {
        self.algorithm
            .to_possible_value()
            .map_or_else(|| format!("{:?}", self.algorithm), |v| v.get_name().to_string())
    }
}

/// Owned input data for one run.
#[derive(Debug)]
pub enum LoadedInput {
    Graph(Graph),
    Array(Vec<i64>),
    Tree(BinaryTree),
    None,
}

impl LoadedInput {
    /// Borrows the data as an engine input.
    pub fn as_input(&self) -> AlgorithmInput<'_> {
        match self {
            Self::Graph(graph) => AlgorithmInput::Graph(graph),
            Self::Array(values) => AlgorithmInput::Array(values),
            Self::Tree(tree) => AlgorithmInput::Tree(tree),
            Self::None => AlgorithmInput::None,
        }
    }
}

fn required(value: Option<&str>, flag: &str) -> Result<VertexId> {
    value
        .map(VertexId::from)
        .with_context(|| format!("{flag} is required for this algorithm"))
}

/// Builds the request, loads its input, and runs it.
pub fn execute(args: &AlgorithmArgs, visualizer: &Visualizer) -> Result<Traced<Outcome>> {
    let request = args.request()?;
    let input = args.load_input(visualizer, request.input_kind())?;
    Ok(visualizer.run(&request, input.as_input())?)
}
