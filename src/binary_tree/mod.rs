//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! Each node owns at most one left and one right child, and every node has at most one parent, so the nodes reachable from the root always form a proper tree with no cycles and no shared children. The nodes live in an arena (see the [`storage`] module) and link to each other by key.
//!
//! # Example
//! ```rust
//! use treeroll::binary_tree::BinaryTree;
//!
//! // Create the tree from its level-order layout, using `None` for absent children. The turbofish
//! // there is needed to state that we are using the default storage method instead of asking the
//! // compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::from_level_order_options(vec![
//!     Some("Hello"), Some("World"), None, Some("Rust"),
//! ]);
//!
//! // Let's now try to access the structure of the tree and look around.
//! let root = tree.root().unwrap();
//! assert_eq!(*root.value(), "Hello");
//! let left_child = root.left_child().unwrap();
//! assert_eq!(*left_child.value(), "World");
//! assert!(root.right_child().is_none());
//! assert_eq!(*left_child.left_child().unwrap().value(), "Rust");
//!
//! // Let's take a mutable reference to the root, to mutate the tree!
//! let mut root = tree.root_mut().unwrap();
//! *root.value_mut() = "Greetings";
//! root.make_right_child("Ferris").unwrap();
//! assert_eq!(tree.size(), 4);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`storage`]: ../storage/index.html " "

use core::fmt::{self, Formatter, Debug, Display};

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;

pub(crate) use node::Side;
pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;
pub use base::BinaryTree;

/// The error type returned by [`NodeRefMut::make_left_child`] and [`NodeRefMut::make_right_child`] when the requested child slot is already taken.
///
/// [`NodeRefMut::make_left_child`]: struct.NodeRefMut.html#method.make_left_child " "
/// [`NodeRefMut::make_right_child`]: struct.NodeRefMut.html#method.make_right_child " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct OccupiedChildError<T> {
    /// The provided value for the new child, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
    pub value: T,
}
impl<T> OccupiedChildError<T> {
    /// Extracts the provided value for the new child, which was deemed useless when the operation failed.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        self.value
    }
}
impl<T> Display for OccupiedChildError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the node already has a child in that position")
    }
}
impl<T: Debug> core::error::Error for OccupiedChildError<T> {}

/// A binary tree which uses a `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, so this is only provided for explicitness and consistency.
pub type VecBinaryTree<T> = BinaryTree<T, usize, alloc::vec::Vec<Node<T, usize>>>;
/// A binary tree which stores its nodes inline in an array of type `A`, without allocating memory for them.
///
/// `A` is an array of nodes, such as `[Node<T, usize>; 16]`, of one of the sizes supported by `arrayvec`. Adding more nodes than fit, be it by building, growing or deep-copying a tree, panics.
pub type ArrayVecBinaryTree<T, A> = BinaryTree<T, usize, arrayvec::ArrayVec<A>>;
