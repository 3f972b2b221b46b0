//! Backtracking search: N-Queens and graph m-coloring.
//!
//! Both searches recurse over an owned state struct and append to the
//! recorder as they go. An exhausted search is not an error: the trace ends
//! in a `NoSolution` step and the output carries no assignment.

use algotrace_common::types::{Color, PALETTE, VertexId};
use algotrace_common::utils::error::EngineError;
use algotrace_core::trace::{ColoringState, QueensState};
use algotrace_core::{AlgorithmKind, Graph, Highlight, Step, StepKind, TraceRecorder};
use indexmap::IndexMap;
use serde::Serialize;

use super::traits::TracedAlgorithm;

// === N-Queens ===

/// Result of an N-Queens search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueensSolution {
    /// Board size.
    pub n: usize,
    /// Row of the queen in each column, or `None` if no solution exists.
    pub rows: Option<Vec<usize>>,
}

/// Whether a queen at `(row, col)` is safe from the queens in columns `< col`.
fn queen_is_safe(queens: &[Option<usize>], row: usize, col: usize) -> bool {
    queens[..col].iter().enumerate().all(|(c, placed)| match placed {
        Some(r) => *r != row && r.abs_diff(row) != col - c,
        None => true,
    })
}

/// Places queens column by column from `col`, trying rows top to bottom.
///
/// With no recorder the search runs untraced.
fn place_queens(
    state: &mut QueensState,
    col: usize,
    recorder: &mut Option<&mut TraceRecorder>,
) -> Result<bool, EngineError> {
    if col >= state.n {
        return Ok(true);
    }
    for row in 0..state.n {
        if !queen_is_safe(&state.queens, row, col) {
            continue;
        }
        state.queens[col] = Some(row);
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(
                Step::new(
                    StepKind::Try,
                    format!("Trying queen at row {}, column {}", row + 1, col + 1),
                )
                .highlight(Highlight::Cell { row, col })
                .with_payload(state.clone()),
            )?;
        }

        if place_queens(state, col + 1, recorder)? {
            return Ok(true);
        }

        state.queens[col] = None;
        if let Some(recorder) = recorder.as_deref_mut() {
            recorder.record(
                Step::new(
                    StepKind::Backtrack,
                    format!("Backtracking from row {}, column {}", row + 1, col + 1),
                )
                .highlight(Highlight::Cell { row, col })
                .with_payload(state.clone()),
            )?;
        }
    }
    Ok(false)
}

fn check_board_size(n: usize) -> Result<(), EngineError> {
    if n == 0 {
        Err(EngineError::InvalidParameter(
            "board size must be at least 1".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Solves N-Queens, recording every placement and backtrack.
///
/// Returns the first solution in row-then-column order. Boards of size 2 and
/// 3 have none; the trace then ends in a `NoSolution` step.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] if `n == 0`.
pub fn n_queens(n: usize, recorder: &mut TraceRecorder) -> Result<QueensSolution, EngineError> {
    check_board_size(n)?;
    let mut state = QueensState {
        n,
        queens: vec![None; n],
    };
    recorder.record(
        Step::new(StepKind::Init, format!("Empty {n}x{n} board")).with_payload(state.clone()),
    )?;

    let solved = place_queens(&mut state, 0, &mut Some(&mut *recorder))?;
    if solved {
        let cells = state
            .queens
            .iter()
            .enumerate()
            .filter_map(|(col, row)| row.map(|row| Highlight::Cell { row, col }));
        let step = cells.fold(
            Step::new(StepKind::Solved, format!("Placed all {n} queens")),
            Step::highlight,
        );
        recorder.record(step.with_payload(state.clone()))?;
        Ok(QueensSolution {
            n,
            rows: Some(state.queens.iter().flatten().copied().collect()),
        })
    } else {
        recorder.record(
            Step::new(
                StepKind::NoSolution,
                format!("No solution exists for {n} queens"),
            )
            .with_payload(state),
        )?;
        Ok(QueensSolution { n, rows: None })
    }
}

/// Solves N-Queens without recording a trace.
///
/// Same search order as [`n_queens`]; meant for board sizes whose traces
/// would be impractically long.
#[must_use]
pub fn solve_n_queens(n: usize) -> Option<Vec<usize>> {
    if n == 0 {
        return None;
    }
    let mut state = QueensState {
        n,
        queens: vec![None; n],
    };
    match place_queens(&mut state, 0, &mut None) {
        Ok(true) => Some(state.queens.iter().flatten().copied().collect()),
        _ => None,
    }
}

// === Graph coloring ===

/// Result of a graph coloring search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoringSolution {
    /// Number of palette colors allowed.
    pub palette_size: usize,
    /// Color of every vertex, or `None` if no coloring exists.
    pub assignment: Option<IndexMap<VertexId, Color>>,
}

/// Search state for coloring: vertices by dense index, adjacency by index
/// (built from the edge list, direction ignored).
struct Coloring<'g> {
    vertices: Vec<&'g VertexId>,
    adjacent: Vec<Vec<usize>>,
    colors: Vec<Option<Color>>,
    palette_size: usize,
}

impl<'g> Coloring<'g> {
    fn new(graph: &'g Graph, palette_size: usize) -> Self {
        let vertices: Vec<_> = graph.vertices().collect();
        let mut adjacent = vec![Vec::new(); vertices.len()];
        for edge in graph.edges() {
            if let (Some(a), Some(b)) = (graph.vertex_index(&edge.from), graph.vertex_index(&edge.to))
            {
                adjacent[a].push(b);
                adjacent[b].push(a);
            }
        }
        Self {
            colors: vec![None; vertices.len()],
            vertices,
            adjacent,
            palette_size,
        }
    }

    fn is_safe(&self, vertex: usize, color: Color) -> bool {
        self.adjacent[vertex]
            .iter()
            .all(|&n| self.colors[n] != Some(color))
    }

    fn snapshot(&self) -> ColoringState {
        ColoringState {
            assignment: self.assignment(),
        }
    }

    fn assignment(&self) -> IndexMap<VertexId, Color> {
        self.vertices
            .iter()
            .zip(&self.colors)
            .filter_map(|(v, c)| c.map(|c| ((*v).clone(), c)))
            .collect()
    }

    fn color_from(&mut self, index: usize, recorder: &mut TraceRecorder) -> Result<bool, EngineError> {
        if index >= self.vertices.len() {
            return Ok(true);
        }
        let vertex = self.vertices[index];

        for color in Color::palette(self.palette_size) {
            if !self.is_safe(index, color) {
                recorder.record(
                    Step::new(
                        StepKind::Conflict,
                        format!("Cannot color {vertex} {color}: a neighbor already has it"),
                    )
                    .vertex(vertex)
                    .with_payload(self.snapshot()),
                )?;
                continue;
            }

            self.colors[index] = Some(color);
            recorder.record(
                Step::new(StepKind::Try, format!("Coloring {vertex} {color}"))
                    .vertex(vertex)
                    .with_payload(self.snapshot()),
            )?;

            if self.color_from(index + 1, recorder)? {
                return Ok(true);
            }

            self.colors[index] = None;
            recorder.record(
                Step::new(
                    StepKind::Backtrack,
                    format!("Backtracking: removing {color} from {vertex}"),
                )
                .vertex(vertex)
                .with_payload(self.snapshot()),
            )?;
        }
        Ok(false)
    }
}

/// Colors the graph with at most `palette_size` colors so that no edge joins
/// two vertices of the same color.
///
/// Vertices are colored in insertion order and colors tried in palette
/// order. Every trial is recorded: `Try` for a safe color, `Conflict` for
/// one a neighbor already holds.
///
/// # Errors
///
/// [`EngineError::InvalidParameter`] if `palette_size` is outside
/// `1..=20`.
pub fn graph_coloring(
    graph: &Graph,
    palette_size: usize,
    recorder: &mut TraceRecorder,
) -> Result<ColoringSolution, EngineError> {
    if !(1..=PALETTE.len()).contains(&palette_size) {
        return Err(EngineError::InvalidParameter(format!(
            "palette size must be between 1 and {}, got {palette_size}",
            PALETTE.len()
        )));
    }

    let mut search = Coloring::new(graph, palette_size);
    recorder.record(
        Step::new(
            StepKind::Init,
            format!(
                "Coloring {} vertices with {palette_size} colors",
                search.vertices.len()
            ),
        )
        .with_payload(search.snapshot()),
    )?;

    if search.color_from(0, recorder)? {
        recorder.record(
            Step::new(StepKind::Solved, "All vertices colored").with_payload(search.snapshot()),
        )?;
        Ok(ColoringSolution {
            palette_size,
            assignment: Some(search.assignment()),
        })
    } else {
        recorder.record(
            Step::new(
                StepKind::NoSolution,
                format!("No valid coloring with {palette_size} colors"),
            )
            .with_payload(search.snapshot()),
        )?;
        Ok(ColoringSolution {
            palette_size,
            assignment: None,
        })
    }
}

/// N-Queens as a [`TracedAlgorithm`]; the input is the board size.
#[derive(Debug, Clone, Copy, Default)]
pub struct NQueensAlgorithm;

impl TracedAlgorithm for NQueensAlgorithm {
    type Input = usize;
    type Output = QueensSolution;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::NQueens
    }

    fn execute(
        &self,
        input: &usize,
        recorder: &mut TraceRecorder,
    ) -> Result<QueensSolution, EngineError> {
        n_queens(*input, recorder)
    }
}

/// Graph coloring as a [`TracedAlgorithm`].
#[derive(Debug, Clone, Copy)]
pub struct GraphColoringAlgorithm {
    palette_size: usize,
}

impl GraphColoringAlgorithm {
    /// Creates a search allowing `palette_size` colors.
    #[must_use]
    pub fn new(palette_size: usize) -> Self {
        Self { palette_size }
    }
}

impl TracedAlgorithm for GraphColoringAlgorithm {
    type Input = Graph;
    type Output = ColoringSolution;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::GraphColoring
    }

    fn execute(
        &self,
        input: &Graph,
        recorder: &mut TraceRecorder,
    ) -> Result<ColoringSolution, EngineError> {
        graph_coloring(input, self.palette_size, recorder)
    }
}
