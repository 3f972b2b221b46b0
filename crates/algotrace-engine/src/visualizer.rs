//! The `Visualizer` facade.

use std::path::Path;

use algotrace_common::utils::error::Result;
use algotrace_core::{Graph, GraphSpec, Trace, Traced};

use crate::config::Config;
use crate::playback::{PlaybackController, Player};
use crate::request::{AlgorithmInput, AlgorithmRequest, Outcome};

/// Builds inputs, runs algorithms, and hands traces to playback.
///
/// # Examples
///
/// ```
/// use algotrace_engine::{AlgorithmInput, AlgorithmRequest, Visualizer};
///
/// let visualizer = Visualizer::new();
/// let traced = visualizer
///     .run(&AlgorithmRequest::NQueens { n: 4 }, AlgorithmInput::None)
///     .unwrap();
/// assert!(!traced.trace.is_empty());
///
/// let mut controller = visualizer.controller(traced.trace);
/// controller.step_forward().unwrap();
/// assert_eq!(controller.current_index(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Visualizer {
    config: Config,
}

impl Visualizer {
    /// Creates a visualizer with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a visualizer with the given settings.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Returns the settings.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a graph from a declarative description.
    ///
    /// # Errors
    ///
    /// Any [`GraphError`](algotrace_common::GraphError) the description
    /// triggers.
    pub fn graph_from_spec(&self, spec: &GraphSpec) -> Result<Graph> {
        Ok(Graph::from_spec(spec, self.config.graph_config())?)
    }

    /// Loads a graph from a JSON file.
    ///
    /// # Errors
    ///
    /// I/O errors, malformed JSON, or an invalid graph.
    pub fn load_graph(&self, path: impl AsRef<Path>) -> Result<Graph> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let spec: GraphSpec = serde_json::from_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            vertices = spec.vertices.len(),
            edges = spec.edges.len(),
            "loaded graph"
        );
        self.graph_from_spec(&spec)
    }

    /// Runs an algorithm and returns its outcome with the recorded trace.
    ///
    /// # Errors
    ///
    /// [`EngineError`](algotrace_common::EngineError) from dispatch or the
    /// algorithm itself.
    pub fn run(&self, request: &AlgorithmRequest, input: AlgorithmInput<'_>) -> Result<Traced<Outcome>> {
        let traced = request.execute(input, self.config.recorder(request.kind()))?;
        tracing::info!(
            algorithm = %request.kind(),
            steps = traced.trace.len(),
            "algorithm finished"
        );
        Ok(traced)
    }

    /// Returns a controller with `trace` loaded, ticking at the configured
    /// interval.
    #[must_use]
    pub fn controller(&self, trace: Trace) -> PlaybackController {
        let mut controller = PlaybackController::new(self.config.playback_interval);
        controller.load(trace);
        controller
    }

    /// Returns a real-time player with `trace` loaded.
    #[must_use]
    pub fn player(&self, trace: Trace) -> Player {
        Player::new(self.controller(trace))
    }
}
