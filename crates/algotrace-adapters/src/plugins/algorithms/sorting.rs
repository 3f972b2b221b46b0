//! Sorting with recorded comparisons.
//!
//! Bubble and selection sort work in place and record a full array snapshot
//! with every comparison and swap. Merge and quick sort record one step per
//! split, comparison and merge/partition, tagged with the call that made it,
//! so a renderer can rebuild the recursion tree.

use std::fmt;
use std::str::FromStr;

use algotrace_common::utils::error::EngineError;
use algotrace_core::trace::{ArrayState, Bucket, CallDetail, CallNode, CallTreeState, Side};
use algotrace_core::{AlgorithmKind, Highlight, Step, StepKind, TraceRecorder};
use serde::{Deserialize, Serialize};

use super::traits::TracedAlgorithm;

fn fmt_values(values: &[i64]) -> String {
    let items: Vec<_> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

// === In-place sorts ===

fn array_step(
    kind: StepKind,
    message: String,
    values: &[i64],
    compared: Option<(usize, usize)>,
    sorted: &[usize],
) -> Step {
    let step = Step::new(kind, message);
    let step = match compared {
        Some((i, j)) => step.indices([i, j]),
        None => step,
    };
    step.with_payload(ArrayState {
        values: values.to_vec(),
        compared,
        sorted: sorted.to_vec(),
    })
}

/// Bubble sort.
///
/// Pass `i` bubbles the largest remaining value to index `n - 1 - i`. Every
/// pass runs in full; there is no early exit on a sorted pass.
pub fn bubble_sort(values: &[i64], recorder: &mut TraceRecorder) -> Result<Vec<i64>, EngineError> {
    let mut array = values.to_vec();
    let n = array.len();
    let mut sorted = Vec::with_capacity(n);
    recorder.record(array_step(
        StepKind::Init,
        format!("Sorting {}", fmt_values(&array)),
        &array,
        None,
        &sorted,
    ))?;

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            recorder.record(array_step(
                StepKind::Compare,
                format!("Comparing {} and {}", array[j], array[j + 1]),
                &array,
                Some((j, j + 1)),
                &sorted,
            ))?;
            if array[j] > array[j + 1] {
                array.swap(j, j + 1);
                recorder.record(array_step(
                    StepKind::Swap,
                    format!("Swapped {} and {}", array[j + 1], array[j]),
                    &array,
                    Some((j, j + 1)),
                    &sorted,
                ))?;
            }
        }
        sorted.push(n - 1 - i);
    }

    sorted.extend((0..n).filter(|i| !sorted.contains(i)).collect::<Vec<_>>());
    recorder.record(array_step(
        StepKind::Done,
        format!("Sorted: {}", fmt_values(&array)),
        &array,
        None,
        &sorted,
    ))?;
    Ok(array)
}

/// Selection sort.
///
/// Pass `i` scans the unsorted suffix for its minimum and swaps it into
/// index `i` (no swap when it is already there).
pub fn selection_sort(
    values: &[i64],
    recorder: &mut TraceRecorder,
) -> Result<Vec<i64>, EngineError> {
    let mut array = values.to_vec();
    let n = array.len();
    let mut sorted = Vec::with_capacity(n);
    recorder.record(array_step(
        StepKind::Init,
        format!("Sorting {}", fmt_values(&array)),
        &array,
        None,
        &sorted,
    ))?;

    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            recorder.record(array_step(
                StepKind::Compare,
                format!(
                    "Comparing {} with current minimum {}",
                    array[j], array[min_index]
                ),
                &array,
                Some((min_index, j)),
                &sorted,
            ))?;
            if array[j] < array[min_index] {
                min_index = j;
                recorder.record(
                    array_step(
                        StepKind::Select,
                        format!("New minimum {}", array[j]),
                        &array,
                        None,
                        &sorted,
                    )
                    .highlight(Highlight::Index(j)),
                )?;
            }
        }
        if min_index != i {
            array.swap(i, min_index);
            recorder.record(array_step(
                StepKind::Swap,
                format!("Swapped {} into position {i}", array[i]),
                &array,
                Some((i, min_index)),
                &sorted,
            ))?;
        }
        sorted.push(i);
    }

    sorted.extend((0..n).filter(|i| !sorted.contains(i)).collect::<Vec<_>>());
    recorder.record(array_step(
        StepKind::Done,
        format!("Sorted: {}", fmt_values(&array)),
        &array,
        None,
        &sorted,
    ))?;
    Ok(array)
}

// === Divide and conquer ===

/// Hands out call ids and records call-tree steps.
struct CallTree<'r> {
    recorder: &'r mut TraceRecorder,
    next_id: usize,
}

impl<'r> CallTree<'r> {
    fn new(recorder: &'r mut TraceRecorder) -> Self {
        Self {
            recorder,
            next_id: 0,
        }
    }

    fn open(&mut self, input: &[i64], parent: Option<&CallNode>) -> CallNode {
        let id = self.next_id;
        self.next_id += 1;
        CallNode {
            id,
            parent: parent.map(|p| p.id),
            depth: parent.map_or(0, |p| p.depth + 1),
            input: input.to_vec(),
        }
    }

    fn record(
        &mut self,
        call: &CallNode,
        kind: StepKind,
        message: String,
        detail: CallDetail,
    ) -> Result<(), EngineError> {
        self.recorder.record(
            Step::new(kind, message)
                .highlight(Highlight::Node(call.id))
                .with_payload(CallTreeState {
                    call: call.clone(),
                    detail,
                }),
        )
    }

    fn merge_sort(
        &mut self,
        values: &[i64],
        parent: Option<&CallNode>,
    ) -> Result<Vec<i64>, EngineError> {
        let call = self.open(values, parent);
        if values.len() <= 1 {
            self.record(
                &call,
                StepKind::Base,
                format!("{} is already sorted", fmt_values(values)),
                CallDetail::Base,
            )?;
            return Ok(values.to_vec());
        }

        let mid = values.len() / 2;
        let (left, right) = values.split_at(mid);
        self.record(
            &call,
            StepKind::Split,
            format!(
                "Splitting {} into {} and {}",
                fmt_values(values),
                fmt_values(left),
                fmt_values(right)
            ),
            CallDetail::Split {
                left: left.to_vec(),
                right: right.to_vec(),
            },
        )?;

        let left = self.merge_sort(left, Some(&call))?;
        let right = self.merge_sort(right, Some(&call))?;

        let mut merged = Vec::with_capacity(values.len());
        let (mut i, mut j) = (0, 0);
        while i < left.len() && j < right.len() {
            let taken = if left[i] <= right[j] {
                Side::Left
            } else {
                Side::Right
            };
            self.record(
                &call,
                StepKind::Compare,
                format!(
                    "Comparing {} and {}: taking {}",
                    left[i],
                    right[j],
                    if taken == Side::Left { left[i] } else { right[j] }
                ),
                CallDetail::Compare {
                    left: left[i],
                    right: right[j],
                    taken,
                },
            )?;
            match taken {
                Side::Left => {
                    merged.push(left[i]);
                    i += 1;
                }
                Side::Right => {
                    merged.push(right[j]);
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);

        self.record(
            &call,
            StepKind::Merge,
            format!(
                "Merged {} and {} into {}",
                fmt_values(&left),
                fmt_values(&right),
                fmt_values(&merged)
            ),
            CallDetail::Combined {
                result: merged.clone(),
            },
        )?;
        Ok(merged)
    }

    fn quick_sort(
        &mut self,
        values: &[i64],
        parent: Option<&CallNode>,
    ) -> Result<Vec<i64>, EngineError> {
        let call = self.open(values, parent);
        let Some((&pivot, rest)) = values.split_last().filter(|_| values.len() > 1) else {
            self.record(
                &call,
                StepKind::Base,
                format!("{} is already sorted", fmt_values(values)),
                CallDetail::Base,
            )?;
            return Ok(values.to_vec());
        };

        let (mut less, mut equal, mut greater) = (Vec::new(), vec![pivot], Vec::new());
        for &value in rest {
            let bucket = match value.cmp(&pivot) {
                std::cmp::Ordering::Less => Bucket::Less,
                std::cmp::Ordering::Equal => Bucket::Equal,
                std::cmp::Ordering::Greater => Bucket::Greater,
            };
            self.record(
                &call,
                StepKind::Compare,
                format!("Comparing {value} with pivot {pivot}"),
                CallDetail::Classify {
                    value,
                    pivot,
                    bucket,
                },
            )?;
            match bucket {
                Bucket::Less => less.push(value),
                Bucket::Equal => equal.push(value),
                Bucket::Greater => greater.push(value),
            }
        }

        self.record(
            &call,
            StepKind::Partition,
            format!(
                "Partitioned around pivot {pivot}: {} {} {}",
                fmt_values(&less),
                fmt_values(&equal),
                fmt_values(&greater)
            ),
            CallDetail::Partition {
                pivot,
                less: less.clone(),
                equal: equal.clone(),
                greater: greater.clone(),
            },
        )?;

        let mut result = self.quick_sort(&less, Some(&call))?;
        result.extend_from_slice(&equal);
        result.extend(self.quick_sort(&greater, Some(&call))?);

        self.record(
            &call,
            StepKind::Merge,
            format!("Combined into {}", fmt_values(&result)),
            CallDetail::Combined {
                result: result.clone(),
            },
        )?;
        Ok(result)
    }
}

/// Merge sort.
///
/// Splits at `len / 2` and merges taking the left element on ties, so equal
/// values keep their relative order.
pub fn merge_sort(values: &[i64], recorder: &mut TraceRecorder) -> Result<Vec<i64>, EngineError> {
    let sorted = CallTree::new(recorder).merge_sort(values, None)?;
    recorder.record(Step::new(
        StepKind::Done,
        format!("Sorted: {}", fmt_values(&sorted)),
    ))?;
    Ok(sorted)
}

/// Quick sort.
///
/// The last element is the pivot; the rest is split three ways into less,
/// equal and greater, and only less and greater recurse.
pub fn quick_sort(values: &[i64], recorder: &mut TraceRecorder) -> Result<Vec<i64>, EngineError> {
    let sorted = CallTree::new(recorder).quick_sort(values, None)?;
    recorder.record(Step::new(
        StepKind::Done,
        format!("Sorted: {}", fmt_values(&sorted)),
    ))?;
    Ok(sorted)
}

/// Which sort to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKind {
    /// Bubble sort.
    Bubble,
    /// Selection sort.
    Selection,
    /// Merge sort.
    Merge,
    /// Quick sort.
    Quick,
}

impl SortKind {
    /// All sorts, in display order.
    pub const ALL: [Self; 4] = [Self::Bubble, Self::Selection, Self::Merge, Self::Quick];

    /// Returns the matching algorithm kind.
    #[must_use]
    pub fn algorithm(self) -> AlgorithmKind {
        match self {
            Self::Bubble => AlgorithmKind::BubbleSort,
            Self::Selection => AlgorithmKind::SelectionSort,
            Self::Merge => AlgorithmKind::MergeSort,
            Self::Quick => AlgorithmKind::QuickSort,
        }
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm().name())
    }
}

impl FromStr for SortKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            other => Err(EngineError::InvalidParameter(format!(
                "unknown sort '{other}'"
            ))),
        }
    }
}

/// Any of the sorts as a [`TracedAlgorithm`].
#[derive(Debug, Clone, Copy)]
pub struct SortAlgorithm {
    kind: SortKind,
}

impl SortAlgorithm {
    /// Creates a sort of the given kind.
    #[must_use]
    pub fn new(kind: SortKind) -> Self {
        Self { kind }
    }
}

impl TracedAlgorithm for SortAlgorithm {
    type Input = [i64];
    type Output = Vec<i64>;

    fn kind(&self) -> AlgorithmKind {
        self.kind.algorithm()
    }

    fn execute(
        &self,
        input: &[i64],
        recorder: &mut TraceRecorder,
    ) -> Result<Vec<i64>, EngineError> {
        match self.kind {
            SortKind::Bubble => bubble_sort(input, recorder),
            SortKind::Selection => selection_sort(input, recorder),
            SortKind::Merge => merge_sort(input, recorder),
            SortKind::Quick => quick_sort(input, recorder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::Payload;

    const INPUT: [i64; 6] = [5, 3, 8, 1, 9, 2];

    #[test]
    fn test_all_sorts_sort() {
        for kind in SortKind::ALL {
            let traced = SortAlgorithm::new(kind).run(&INPUT).unwrap();
            assert_eq!(traced.output, vec![1, 2, 3, 5, 8, 9], "{kind}");
            assert_eq!(traced.trace.algorithm(), kind.algorithm());
            assert_eq!(traced.trace.last().unwrap().kind, StepKind::Done);
        }
    }

    #[test]
    fn test_bubble_sort_compares_every_pair_every_pass() {
        let trace = SortAlgorithm::new(SortKind::Bubble)
            .run_trace(&[1, 2, 3, 4])
            .unwrap();
        // 3 + 2 + 1 comparisons, no swaps on sorted input.
        assert_eq!(trace.count(StepKind::Compare), 6);
        assert_eq!(trace.count(StepKind::Swap), 0);
    }

    #[test]
    fn test_bubble_sort_snapshots() {
        let trace = SortAlgorithm::new(SortKind::Bubble)
            .run_trace(&[2, 1])
            .unwrap();
        let kinds: Vec<_> = trace.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![StepKind::Init, StepKind::Compare, StepKind::Swap, StepKind::Done]
        );
        let Payload::Array(state) = &trace.get(2).unwrap().payload else {
            panic!("expected array payload");
        };
        assert_eq!(state.values, vec![1, 2]);
        assert_eq!(state.compared, Some((0, 1)));
    }

    #[test]
    fn test_selection_sort_skips_self_swap() {
        let trace = SortAlgorithm::new(SortKind::Selection)
            .run_trace(&[1, 3, 2])
            .unwrap();
        assert_eq!(trace.count(StepKind::Swap), 1);
        assert_eq!(trace.count(StepKind::Compare), 3);
    }

    #[test]
    fn test_merge_sort_call_tree() {
        let trace = SortAlgorithm::new(SortKind::Merge)
            .run_trace(&[4, 3, 2, 1])
            .unwrap();

        let calls: Vec<_> = trace
            .iter()
            .filter_map(|s| match &s.payload {
                Payload::CallTree(state) => Some(&state.call),
                _ => None,
            })
            .collect();
        // root, two halves, four leaves
        let mut ids: Vec<_> = calls.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());
        assert!(calls.iter().all(|c| (c.id == 0) == c.parent.is_none()));
        assert_eq!(calls.iter().map(|c| c.depth).max(), Some(2));
        assert_eq!(trace.count(StepKind::Split), 3);
        assert_eq!(trace.count(StepKind::Base), 4);
        assert_eq!(trace.count(StepKind::Merge), 3);
    }

    #[test]
    fn test_merge_sort_takes_left_on_ties() {
        let trace = SortAlgorithm::new(SortKind::Merge)
            .run_trace(&[7, 7])
            .unwrap();
        let taken = trace.iter().find_map(|s| match &s.payload {
            Payload::CallTree(CallTreeState {
                detail: CallDetail::Compare { taken, .. },
                ..
            }) => Some(*taken),
            _ => None,
        });
        assert_eq!(taken, Some(Side::Left));
    }

    #[test]
    fn test_quick_sort_partitions_on_last_element() {
        let trace = SortAlgorithm::new(SortKind::Quick)
            .run_trace(&[3, 6, 1, 3, 4])
            .unwrap();
        let Some(CallDetail::Partition {
            pivot,
            less,
            equal,
            greater,
        }) = trace.iter().find_map(|s| match &s.payload {
            Payload::CallTree(state) => match &state.detail {
                d @ CallDetail::Partition { .. } => Some(d.clone()),
                _ => None,
            },
            _ => None,
        })
        else {
            panic!("expected a partition step");
        };
        assert_eq!(pivot, 4);
        assert_eq!(less, vec![3, 1, 3]);
        assert_eq!(equal, vec![4]);
        assert_eq!(greater, vec![6]);
    }

    #[test]
    fn test_empty_and_single() {
        for kind in SortKind::ALL {
            assert!(SortAlgorithm::new(kind).run(&[]).unwrap().output.is_empty());
            assert_eq!(SortAlgorithm::new(kind).run(&[42]).unwrap().output, vec![42]);
        }
    }

    #[test]
    fn test_sort_kind_from_str() {
        assert_eq!("Quick".parse::<SortKind>().unwrap(), SortKind::Quick);
        assert!("heap".parse::<SortKind>().is_err());
    }
}
