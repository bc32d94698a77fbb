use core::{
    fmt::{self, Formatter, Debug, Display},
    hash::{Hash, Hasher},
    iter::FromIterator,
};
use alloc::collections::VecDeque;
use tracing::{debug, instrument};
use crate::{
    storage::{Storage, DefaultStorage},
    util::dangling_key,
    printer::TreePrinter,
};
use super::{Node, NodeRef, NodeRefMut, Side};

/// A binary tree.
///
/// The tree is a thin handle over an arena of nodes: it owns the storage and holds the key of the root node, if there is one. A tree without a root node is *rootless*; it is a perfectly valid state, but such a tree cannot be traversed.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct BinaryTree<T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) storage: S,
    pub(crate) root: Option<K>,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a rootless tree.
    ///
    /// # Example
    /// ```rust
    /// # use treeroll::BinaryTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<i32>::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// assert_eq!(tree.height(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
        }
    }
    /// Creates a tree with the specified value for the root node and no other nodes.
    pub fn with_root(value: T) -> Self {
        let mut storage = S::new();
        let root = storage.add(Node::leaf(value));
        Self {
            storage,
            root: Some(root),
        }
    }
    /// Builds a tree from its level-order ("array") layout, where values equal to `null_marker` denote a deliberately absent child.
    ///
    /// The first value becomes the root. Then, for every node in breadth-first order, the next two unconsumed values become its left and right child candidates; a candidate equal to the marker, or one past the end of the input, leaves the slot empty. Whatever input remains once there are no more nodes to give children to is ignored.
    ///
    /// If the input is empty or starts with the marker, the tree is rootless. A value which compares equal to the marker is never stored, even if the caller meant it as data.
    ///
    /// # Example
    /// ```rust
    /// # use treeroll::BinaryTree;
    /// let tree = BinaryTree::<_>::from_level_order(
    ///     vec!["E", "D", "H", "B", "#", "F", "J"],
    ///     &"#",
    /// );
    /// assert_eq!(tree.size(), 6);
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), "E");
    /// assert!(root.left_child().unwrap().right_child().is_none());
    /// ```
    pub fn from_level_order<I>(values: I, null_marker: &T) -> Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        Self::from_level_order_options(values.into_iter().map(|value| {
            if value == *null_marker {
                None
            } else {
                Some(value)
            }
        }))
    }
    /// Builds a tree from its level-order layout, with `None` denoting an absent child.
    ///
    /// Works exactly like [`from_level_order`], see its documentation for the layout.
    ///
    /// # Example
    /// ```rust
    /// # use treeroll::BinaryTree;
    /// let tree = BinaryTree::<_>::from_level_order_options(vec![
    ///     Some(1), Some(2), Some(3), None, None, Some(4), Some(5), None, Some(6),
    /// ]);
    /// assert_eq!(tree.size(), 6);
    /// assert_eq!(tree.height(), 4);
    /// ```
    ///
    /// [`from_level_order`]: #method.from_level_order " "
    #[instrument(level = "debug", skip_all)]
    pub fn from_level_order_options<I>(values: I) -> Self
    where I: IntoIterator<Item = Option<T>>,
    {
        let mut values = values.into_iter().fuse();
        let mut tree = Self::new();
        let root_value = match values.next() {
            Some(Some(value)) => value,
            _ => {
                debug!("level-order input has no root value, tree is rootless");
                return tree;
            }
        };
        let root = tree.storage.add(Node::leaf(root_value));
        tree.root = Some(root.clone());

        let mut queue = VecDeque::new();
        queue.push_back(root);
        while let Some(parent) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                // Slots past the end of the input read as absent
                if let Some(value) = values.next().flatten() {
                    let child = tree.storage.add(Node::leaf(value));
                    *tree.node_mut(&parent).link_mut(side) = Some(child.clone());
                    queue.push_back(child);
                }
            }
        }
        debug!(nodes = tree.storage.len(), "built tree from level-order input");
        tree
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is rootless.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(NodeRef { tree: self, key })
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is rootless.
    #[inline]
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(NodeRefMut { tree: self, key })
    }
    /// Returns `true` if the tree has no root node, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of nodes reachable from the root.
    pub fn size(&self) -> usize {
        self.root().map_or(0, |root| root.size())
    }
    /// Returns the number of nodes on the longest path from the root down to a leaf. A rootless tree has a height of 0, a lone root has a height of 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.height())
    }
    /// Creates a fully independent copy of the tree.
    ///
    /// The copy gets a fresh storage which only holds the nodes reachable from the root, so no node or link is shared with `self`; mutating or rolling one of the trees never affects the other. The copy compares equal to the original.
    ///
    /// # Panics
    /// Fixed-capacity storages panic if they cannot hold the copied nodes.
    #[instrument(level = "debug", skip_all)]
    pub fn deep_copy(&self) -> Self
    where T: Clone,
    {
        let mut copy = Self::new();
        if let Some(root) = self.root() {
            copy.storage.reserve(root.size());
            copy.root = Some(copy_subtree(&mut copy.storage, root));
        }
        debug!(nodes = copy.storage.len(), "deep-copied tree");
        copy
    }

    #[inline]
    #[track_caller]
    pub(crate) fn node(&self, key: &K) -> &Node<T, K> {
        self.storage.get(key).unwrap_or_else(|| dangling_key(key))
    }
    #[inline]
    #[track_caller]
    pub(crate) fn node_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage.get_mut(key).unwrap_or_else(|| dangling_key(key))
    }
}

/// Copies the subtree under `source` into `storage` in preorder, returning the key of the copied subtree root.
fn copy_subtree<T, K, S>(storage: &mut S, source: NodeRef<'_, T, K, S>) -> K
where
    T: Clone,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let key = storage.add(Node::leaf(source.value().clone()));
    let left = source.left_child().map(|child| copy_subtree(storage, child));
    let right = source.right_child().map(|child| copy_subtree(storage, child));
    let node = storage.get_mut(&key).unwrap_or_else(|| dangling_key(&key));
    node.left = left;
    node.right = right;
    key
}

impl<T, K, S> Default for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> Clone for BinaryTree<T, K, S>
where
    T: Clone,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}
impl<T, K, S> PartialEq for BinaryTree<T, K, S>
where
    T: PartialEq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}
impl<T, K, S> Eq for BinaryTree<T, K, S>
where
    T: Eq,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<T, K, S> Hash for BinaryTree<T, K, S>
where
    T: Hash,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root().hash(state)
    }
}
impl<T, K, S> Debug for BinaryTree<T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("root", &self.root())
            .finish()
    }
}
impl<T, K, S> Display for BinaryTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        TreePrinter::new(f).print_tree(self)
    }
}
impl<T, K, S> FromIterator<Option<T>> for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Builds the tree from its level-order layout, see [`from_level_order_options`].
    ///
    /// [`from_level_order_options`]: #method.from_level_order_options " "
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self::from_level_order_options(iter)
    }
}
