//! Arena-backed binary tree.
//!
//! Trees are built from a level-order listing where `null` marks a missing
//! child, e.g. `1,2,3,null,4`. Nodes are addressed by arena index, so
//! duplicate values stay distinguishable in traces.

use std::str::FromStr;

use algotrace_common::utils::error::EngineError;
use serde::{Deserialize, Serialize};

/// A node of a [`BinaryTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node value.
    pub value: i64,
    /// Arena index of the left child.
    pub left: Option<usize>,
    /// Arena index of the right child.
    pub right: Option<usize>,
}

/// A binary tree stored as a node arena.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryTree {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl BinaryTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from a level-order listing.
    ///
    /// Children are assigned left then right to each queued node in turn;
    /// `None` leaves a hole. An empty listing or a `None` root yields an
    /// empty tree.
    #[must_use]
    pub fn from_level_order(values: &[Option<i64>]) -> Self {
        let mut tree = Self::new();
        let Some(Some(root_value)) = values.first() else {
            return tree;
        };
        let root = tree.push(*root_value);
        tree.root = Some(root);

        let mut queue = std::collections::VecDeque::from([root]);
        let mut rest = values[1..].iter();
        while let Some(parent) = queue.pop_front() {
            let Some(left) = rest.next() else { break };
            if let Some(value) = left {
                let child = tree.push(*value);
                tree.nodes[parent].left = Some(child);
                queue.push_back(child);
            }
            let Some(right) = rest.next() else { break };
            if let Some(value) = right {
                let child = tree.push(*value);
                tree.nodes[parent].right = Some(child);
                queue.push_back(child);
            }
        }
        tree
    }

    /// Returns the root index.
    #[must_use]
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Returns the node at an arena index.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the height (0 for an empty tree).
    #[must_use]
    pub fn height(&self) -> usize {
        fn height_of(tree: &BinaryTree, node: Option<usize>) -> usize {
            node.and_then(|i| tree.node(i)).map_or(0, |n| {
                1 + height_of(tree, n.left).max(height_of(tree, n.right))
            })
        }
        height_of(self, self.root)
    }

    fn push(&mut self, value: i64) -> usize {
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }
}

impl FromStr for BinaryTree {
    type Err = EngineError;

    /// Parses a comma-separated level-order listing (`1,2,null,3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                if token.eq_ignore_ascii_case("null") {
                    Ok(None)
                } else {
                    token.parse::<i64>().map(Some).map_err(|_| {
                        EngineError::InvalidParameter(format!("invalid tree value '{token}'"))
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_level_order(&values))
    }
}
