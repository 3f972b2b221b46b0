//! Binary tree traversals.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use algotrace_common::utils::error::EngineError;
use algotrace_core::trace::TreeState;
use algotrace_core::{AlgorithmKind, BinaryTree, Highlight, Step, StepKind, TraceRecorder};
use serde::{Deserialize, Serialize};

use super::traits::TracedAlgorithm;

/// Visit order for a tree walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeOrder {
    /// Node, left, right.
    Preorder,
    /// Left, node, right.
    #[default]
    Inorder,
    /// Left, right, node.
    Postorder,
    /// Breadth-first, left to right.
    LevelOrder,
}

impl TreeOrder {
    /// Returns a short label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Preorder => "preorder",
            Self::Inorder => "inorder",
            Self::Postorder => "postorder",
            Self::LevelOrder => "level-order",
        }
    }

    /// Computes the node visit sequence (arena indices).
    fn sequence(self, tree: &BinaryTree) -> Vec<usize> {
        let mut out = Vec::with_capacity(tree.len());
        match self {
            Self::LevelOrder => {
                let mut queue: VecDeque<usize> = tree.root().into_iter().collect();
                while let Some(index) = queue.pop_front() {
                    out.push(index);
                    if let Some(node) = tree.node(index) {
                        queue.extend(node.left);
                        queue.extend(node.right);
                    }
                }
            }
            order => walk(tree, tree.root(), order, &mut out),
        }
        out
    }
}

fn walk(tree: &BinaryTree, index: Option<usize>, order: TreeOrder, out: &mut Vec<usize>) {
    let Some((index, node)) = index.and_then(|i| tree.node(i).map(|n| (i, n))) else {
        return;
    };
    if order == TreeOrder::Preorder {
        out.push(index);
    }
    walk(tree, node.left, order, out);
    if order == TreeOrder::Inorder {
        out.push(index);
    }
    walk(tree, node.right, order, out);
    if order == TreeOrder::Postorder {
        out.push(index);
    }
}

impl fmt::Display for TreeOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "preorder" | "pre" => Ok(Self::Preorder),
            "inorder" | "in" => Ok(Self::Inorder),
            "postorder" | "post" => Ok(Self::Postorder),
            "levelorder" | "level" | "bfs" => Ok(Self::LevelOrder),
            _ => Err(EngineError::InvalidParameter(format!(
                "unknown traversal order '{s}'"
            ))),
        }
    }
}

/// Walks `tree` in the given order, recording one `Visit` step per node.
///
/// Returns the node values in visit order.
pub fn traverse_tree(
    tree: &BinaryTree,
    order: TreeOrder,
    recorder: &mut TraceRecorder,
) -> Result<Vec<i64>, EngineError> {
    let mut state = TreeState::default();
    recorder.record(
        Step::new(
            StepKind::Init,
            format!("Starting {order} traversal of {} nodes", tree.len()),
        )
        .with_payload(state.clone()),
    )?;

    for index in order.sequence(tree) {
        let Some(node) = tree.node(index) else {
            continue;
        };
        state.visited.push(index);
        state.values.push(node.value);
        state.current = Some(index);
        recorder.record(
            Step::new(StepKind::Visit, format!("Visiting {}", node.value))
                .highlight(Highlight::Node(index))
                .with_payload(state.clone()),
        )?;
    }

    state.current = None;
    let values = state.values.clone();
    recorder.record(
        Step::new(
            StepKind::Done,
            format!("{order} traversal: {values:?}"),
        )
        .with_payload(state),
    )?;
    Ok(values)
}

/// Tree traversal as a [`TracedAlgorithm`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeTraversalAlgorithm {
    order: TreeOrder,
}

impl TreeTraversalAlgorithm {
    /// Creates a walk in the given order.
    #[must_use]
    pub fn new(order: TreeOrder) -> Self {
        Self { order }
    }
}

impl TracedAlgorithm for TreeTraversalAlgorithm {
    type Input = BinaryTree;
    type Output = Vec<i64>;

    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::TreeTraversal
    }

    fn execute(
        &self,
        input: &BinaryTree,
        recorder: &mut TraceRecorder,
    ) -> Result<Vec<i64>, EngineError> {
        traverse_tree(input, self.order, recorder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryTree {
        //        1
        //      /   \
        //     2     3
        //    / \   /
        //   4   5 6
        "1,2,3,4,5,6".parse().unwrap()
    }

    fn run(order: TreeOrder) -> Vec<i64> {
        TreeTraversalAlgorithm::new(order)
            .run(&sample())
            .unwrap()
            .output
    }

    #[test]
    fn test_orders() {
        assert_eq!(run(TreeOrder::Preorder), vec![1, 2, 4, 5, 3, 6]);
        assert_eq!(run(TreeOrder::Inorder), vec![4, 2, 5, 1, 6, 3]);
        assert_eq!(run(TreeOrder::Postorder), vec![4, 5, 2, 6, 3, 1]);
        assert_eq!(run(TreeOrder::LevelOrder), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_one_visit_step_per_node() {
        let trace = TreeTraversalAlgorithm::new(TreeOrder::Inorder)
            .run_trace(&sample())
            .unwrap();
        assert_eq!(trace.count(StepKind::Visit), 6);
        assert_eq!(trace.len(), 8);
    }

    #[test]
    fn test_empty_tree() {
        let traced = TreeTraversalAlgorithm::default()
            .run(&BinaryTree::new())
            .unwrap();
        assert!(traced.output.is_empty());
        assert_eq!(traced.trace.len(), 2);
    }

    #[test]
    fn test_order_from_str() {
        assert_eq!("level-order".parse::<TreeOrder>().unwrap(), TreeOrder::LevelOrder);
        assert_eq!("PRE".parse::<TreeOrder>().unwrap(), TreeOrder::Preorder);
        assert!("sideways".parse::<TreeOrder>().is_err());
    }
}
