//! Configuration options.

use std::time::Duration;

use algotrace_core::{AlgorithmKind, GraphConfig, TraceRecorder};

/// Default auto-play interval.
pub const DEFAULT_PLAYBACK_INTERVAL: Duration = Duration::from_millis(1000);

/// Visualizer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Delay between auto-play ticks.
    pub playback_interval: Duration,
    /// Maximum number of steps per trace.
    pub step_limit: Option<usize>,
    /// Maximum number of edges per graph.
    pub max_edges: Option<usize>,
    /// Emit a `trace`-level event for every recorded step.
    pub trace_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playback_interval: DEFAULT_PLAYBACK_INTERVAL,
            step_limit: None,
            max_edges: None,
            trace_logging: false,
        }
    }
}

impl Config {
    /// Sets the auto-play interval.
    #[must_use]
    pub fn with_playback_interval(mut self, interval: Duration) -> Self {
        self.playback_interval = interval;
        self
    }

    /// Caps the number of steps per trace.
    #[must_use]
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Caps the number of edges per graph.
    #[must_use]
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = Some(max_edges);
        self
    }

    /// Enables per-step trace logging.
    #[must_use]
    pub fn with_trace_logging(mut self, enabled: bool) -> Self {
        self.trace_logging = enabled;
        self
    }

    /// Returns the graph-level subset of this configuration.
    #[must_use]
    pub fn graph_config(&self) -> GraphConfig {
        GraphConfig {
            max_edges: self.max_edges,
        }
    }

    /// Creates a recorder honoring the step limit and logging settings.
    #[must_use]
    pub fn recorder(&self, algorithm: AlgorithmKind) -> TraceRecorder {
        TraceRecorder::new(algorithm)
            .with_limit(self.step_limit)
            .with_step_logging(self.trace_logging)
    }
}
