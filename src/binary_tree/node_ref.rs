use core::{
    fmt::{self, Formatter, Debug},
    hash::{Hash, Hasher},
};
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, Node, NodeRefMut, Side};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
///
/// Comparing and hashing node references is *structural*: two references are equal if the subtrees under them have the same shape and equal values at every position, regardless of which trees or storage slots they live in.
pub struct NodeRef<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) tree: &'a BinaryTree<T, K, S>,
    pub(crate) key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    ///
    /// The key is not required to be reachable from the root of the tree.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the left child, or `None` if there is no left child.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.child(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if there is no right child.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.child(Side::Right)
    }
    /// Returns references to both children, or `None` if the node does not have exactly two children. To retreive one of the children regardless of the other, see [`left_child`] and [`right_child`].
    ///
    /// [`left_child`]: #method.left_child " "
    /// [`right_child`]: #method.right_child " "
    #[inline]
    pub fn children(&self) -> Option<(Self, Self)> {
        Some((self.left_child()?, self.right_child()?))
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns `true` if the node is a *branch*, i.e. has one or two child nodes; `false` otherwise.
    #[inline(always)]
    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }
    /// Returns `true` if the node is a *full branch*, i.e. has exactly two child nodes; `false` otherwise.
    #[inline]
    pub fn is_full_branch(&self) -> bool {
        let node = self.node();
        node.left.is_some() && node.right.is_some()
    }
    /// Returns the number of nodes in the subtree under this node, including the node itself.
    pub fn size(&self) -> usize {
        1 + self.left_child().map_or(0, |child| child.size())
            + self.right_child().map_or(0, |child| child.size())
    }
    /// Returns the number of nodes on the longest downward path starting at this node, including the node itself.
    pub fn height(&self) -> usize {
        let left = self.left_child().map_or(0, |child| child.height());
        let right = self.right_child().map_or(0, |child| child.height());
        1 + left.max(right)
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Self> {
        self.node().link(side).map(|key| Self {
            tree: self.tree,
            key: key.clone(),
        })
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        self.tree.node(&self.key)
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
impl<'a, T, K, S> From<&'a NodeRefMut<'_, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, T, K, S>) -> Self {
        Self {
            tree: &*op.tree,
            key: op.key.clone(),
        }
    }
}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
            && self.left_child() == other.left_child()
            && self.right_child() == other.right_child()
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    T: Eq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Hash for NodeRef<'_, T, K, S>
where
    T: Hash,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
        self.left_child().hash(state);
        self.right_child().hash(state);
    }
}
impl<T, K, S> Debug for NodeRef<'_, T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("left", &self.left_child())
            .field("right", &self.right_child())
            .finish()
    }
}
