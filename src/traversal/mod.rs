//! Everything related to traversing binary trees.
//!
//! The module is home to the following items:
//! - [`Order`], the three depth-first visitation orders
//! - The free functions [`preorder`], [`inorder`] and [`postorder`], which walk the subtree under a node and invoke an action for every node they pass
//! - [`TraverseError`], the error produced when a rootless tree is asked to be traversed
//!
//! The actions are plain closures receiving a [`NodeRef`]; trees also offer the [`traverse`], [`collect`] and [`collect_cloned`] shorthands, which start from the root.
//!
//! [`Order`]: enum.Order.html " "
//! [`preorder`]: fn.preorder.html " "
//! [`inorder`]: fn.inorder.html " "
//! [`postorder`]: fn.postorder.html " "
//! [`TraverseError`]: enum.TraverseError.html " "
//! [`NodeRef`]: ../binary_tree/struct.NodeRef.html " "
//! [`traverse`]: ../binary_tree/struct.BinaryTree.html#method.traverse " "
//! [`collect`]: ../binary_tree/struct.BinaryTree.html#method.collect " "
//! [`collect_cloned`]: ../binary_tree/struct.BinaryTree.html#method.collect_cloned " "

use core::{
    fmt::{self, Formatter, Debug, Display},
    str::FromStr,
};
use thiserror::Error;
use crate::{
    binary_tree::{Node, NodeRef},
    storage::Storage,
};

/// A depth-first visitation order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node itself, then its left subtree, then its right subtree.
    Preorder,
    /// The left subtree, then the node itself, then the right subtree.
    Inorder,
    /// The left subtree, then the right subtree, then the node itself.
    Postorder,
}
impl Order {
    /// All orders, in the conventional listing order.
    pub const ALL: [Self; 3] = [Self::Preorder, Self::Inorder, Self::Postorder];

    /// Walks the subtree under `node` in this order, invoking `action` once per node. Walking an absent node does nothing.
    #[inline]
    pub fn walk<'a, T, K, S, F>(self, node: Option<NodeRef<'a, T, K, S>>, action: F)
    where
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
        F: FnMut(NodeRef<'a, T, K, S>),
    {
        match self {
            Self::Preorder => preorder(node, action),
            Self::Inorder => inorder(node, action),
            Self::Postorder => postorder(node, action),
        }
    }
    /// Returns the human-readable name of the order, e.g. `"Preorder"`.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preorder => "Preorder",
            Self::Inorder => "Inorder",
            Self::Postorder => "Postorder",
        }
    }
}
impl Display for Order {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
impl FromStr for Order {
    type Err = ParseOrderError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|order| order.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(ParseOrderError)
    }
}

/// The error returned when parsing an [`Order`] from a string which does not name one.
///
/// [`Order`]: enum.Order.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("expected one of \"preorder\", \"inorder\" or \"postorder\"")]
pub struct ParseOrderError;

/// The error returned by tree traversal shorthands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum TraverseError {
    /// The tree is rootless, so there is no data to traverse.
    #[error("cannot traverse an empty tree")]
    EmptyTree,
}

/// Visits the node, then walks its left subtree, then its right subtree.
pub fn preorder<'a, T, K, S, F>(node: Option<NodeRef<'a, T, K, S>>, mut action: F)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    F: FnMut(NodeRef<'a, T, K, S>),
{
    fn walk<'a, T, K, S, F>(node: Option<NodeRef<'a, T, K, S>>, action: &mut F)
    where
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
        F: FnMut(NodeRef<'a, T, K, S>),
    {
        if let Some(node) = node {
            let (left, right) = (node.left_child(), node.right_child());
            action(node);
            walk(left, action);
            walk(right, action);
        }
    }
    walk(node, &mut action)
}
/// Walks the left subtree, then visits the node, then walks the right subtree.
pub fn inorder<'a, T, K, S, F>(node: Option<NodeRef<'a, T, K, S>>, mut action: F)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    F: FnMut(NodeRef<'a, T, K, S>),
{
    fn walk<'a, T, K, S, F>(node: Option<NodeRef<'a, T, K, S>>, action: &mut F)
    where
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
        F: FnMut(NodeRef<'a, T, K, S>),
    {
        if let Some(node) = node {
            let (left, right) = (node.left_child(), node.right_child());
            walk(left, action);
            action(node);
            walk(right, action);
        }
    }
    walk(node, &mut action)
}
/// Walks the left subtree, then the right subtree, then visits the node.
pub fn postorder<'a, T, K, S, F>(node: Option<NodeRef<'a, T, K, S>>, mut action: F)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    F: FnMut(NodeRef<'a, T, K, S>),
{
    fn walk<'a, T, K, S, F>(node: Option<NodeRef<'a, T, K, S>>, action: &mut F)
    where
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
        F: FnMut(NodeRef<'a, T, K, S>),
    {
        if let Some(node) = node {
            let (left, right) = (node.left_child(), node.right_child());
            walk(left, action);
            walk(right, action);
            action(node);
        }
    }
    walk(node, &mut action)
}
