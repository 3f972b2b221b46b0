//! The trait every traced algorithm implements.

use algotrace_common::utils::error::EngineError;
use algotrace_core::{AlgorithmKind, Trace, TraceRecorder, Traced};

/// An algorithm that records its execution as a [`Trace`].
///
/// Parameters (start vertex, palette size, ...) live on the implementing
/// struct; the input is borrowed for the duration of one run and never
/// retained.
pub trait TracedAlgorithm {
    /// What the algorithm runs on.
    type Input: ?Sized;
    /// What it computes.
    type Output;

    /// Which algorithm this is.
    fn kind(&self) -> AlgorithmKind;

    /// Runs the algorithm, appending steps to `recorder`.
    fn execute(
        &self,
        input: &Self::Input,
        recorder: &mut TraceRecorder,
    ) -> Result<Self::Output, EngineError>;

    /// Runs the algorithm with a caller-configured recorder.
    fn run_with(
        &self,
        input: &Self::Input,
        mut recorder: TraceRecorder,
    ) -> Result<Traced<Self::Output>, EngineError> {
        tracing::debug!(algorithm = %self.kind(), "running algorithm");
        let output = self.execute(input, &mut recorder)?;
        Ok(recorder.finish_with(output))
    }

    /// Runs the algorithm with an unbounded recorder.
    fn run(&self, input: &Self::Input) -> Result<Traced<Self::Output>, EngineError> {
        self.run_with(input, TraceRecorder::new(self.kind()))
    }

    /// Runs the algorithm and keeps only the trace.
    fn run_trace(&self, input: &Self::Input) -> Result<Trace, EngineError> {
        self.run(input).map(|traced| traced.trace)
    }
}
