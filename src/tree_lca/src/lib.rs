#![warn(clippy::pedantic)]

//! Lowest common ancestor queries on plain binary trees.

use log::debug;
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    #[must_use]
    pub fn new(value: T, left: Option<TreeNode<T>>, right: Option<TreeNode<T>>) -> TreeNode<T> {
        TreeNode {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    #[must_use]
    pub fn leaf(value: T) -> TreeNode<T> {
        TreeNode::new(value, None, None)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LcaError<T: Debug> {
    #[error("Cannot search an empty tree")]
    EmptyTree,
    #[error("The value {value:?} is not in the tree")]
    NotFound { value: T },
}

struct Search<'t, T> {
    found_a: bool,
    found_b: bool,
    ancestor: Option<&'t T>,
}

impl<T> Search<'_, T> {
    fn nothing() -> Self {
        Search {
            found_a: false,
            found_b: false,
            ancestor: None,
        }
    }
}

fn search<'t, T: PartialEq>(node: Option<&'t TreeNode<T>>, a: &T, b: &T) -> Search<'t, T> {
    let Some(node) = node else {
        return Search::nothing();
    };

    let left = search(node.left.as_deref(), a, b);
    if left.ancestor.is_some() {
        return left;
    }
    let right = search(node.right.as_deref(), a, b);
    if right.ancestor.is_some() {
        return right;
    }

    let found_a = left.found_a || right.found_a || node.value == *a;
    let found_b = left.found_b || right.found_b || node.value == *b;

    Search {
        found_a,
        found_b,
        // The first node below which both values were seen is the lowest one
        ancestor: (found_a && found_b).then_some(&node.value),
    }
}

/// Find the deepest node that has both `a` and `b` in its subtree. A node
/// counts as part of its own subtree, so the ancestor of a node and one of
/// its descendants is the node itself.
///
/// The tree is not assumed to be ordered.
///
/// # Errors
///
/// If the tree is empty or either value does not occur in it
pub fn lowest_common_ancestor<'t, T: PartialEq + Clone + Debug>(
    root: Option<&'t TreeNode<T>>,
    a: &T,
    b: &T,
) -> Result<&'t T, LcaError<T>> {
    if root.is_none() {
        return Err(LcaError::EmptyTree);
    }

    let result = search(root, a, b);
    match result.ancestor {
        Some(ancestor) => {
            debug!("Lowest common ancestor of {a:?} and {b:?} is {ancestor:?}");
            Ok(ancestor)
        }
        None if !result.found_a => Err(LcaError::NotFound { value: a.clone() }),
        None => Err(LcaError::NotFound { value: b.clone() }),
    }
}
