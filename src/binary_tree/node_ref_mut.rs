use core::fmt::{self, Formatter, Debug};
use crate::storage::{Storage, DefaultStorage};
use super::{BinaryTree, Node, NodeRef, OccupiedChildError, Side};

/// A *mutable* reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and grow it.
///
/// Links between existing nodes can only be rewritten by rolling the whole tree, which is why this type offers no way to detach or replace a child.
pub struct NodeRefMut<'a, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(crate) tree: &'a mut BinaryTree<T, K, S>,
    pub(crate) key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it does not exist.
    #[inline]
    pub fn new_raw(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(Self { tree, key })
        } else {
            None
        }
    }
    /// Returns a reference to the raw storage key for the node.
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
    pub fn value(&self) -> &T {
        &self.tree.node(&self.key).value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    #[inline(always)]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.tree.node_mut(&self.key).value
    }
    /// Consumes the reference and returns a *mutable* reference to the data stored in the node which lives as long as the original borrow of the tree.
    #[inline]
    pub fn into_value_mut(self) -> &'a mut T {
        let Self { tree, key } = self;
        &mut tree.node_mut(&key).value
    }
    /// Returns a reference to the left child, or `None` if there is no left child.
    #[inline]
    pub fn left_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::from(self).left_child()
    }
    /// Returns a reference to the right child, or `None` if there is no right child.
    #[inline]
    pub fn right_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::from(self).right_child()
    }
    /// Returns a *mutable* reference to the left child, or `None` if there is no left child.
    #[inline]
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        self.child_mut(Side::Left)
    }
    /// Returns a *mutable* reference to the right child, or `None` if there is no right child.
    #[inline]
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        self.child_mut(Side::Right)
    }
    /// Consumes the reference and returns a *mutable* reference to the left child, or `None` if there is no left child.
    #[inline]
    pub fn into_left_child(self) -> Option<Self> {
        self.into_child(Side::Left)
    }
    /// Consumes the reference and returns a *mutable* reference to the right child, or `None` if there is no right child.
    #[inline]
    pub fn into_right_child(self) -> Option<Self> {
        self.into_child(Side::Right)
    }
    /// Adds a new node with the specified value as the left child, returning a reference to it.
    ///
    /// # Errors
    /// Fails if the node already has a left child. The value is handed back inside the error.
    ///
    /// # Example
    /// ```rust
    /// # use treeroll::BinaryTree;
    /// let mut tree = BinaryTree::<_>::with_root(1);
    /// let mut root = tree.root_mut().unwrap();
    /// root.make_left_child(2).unwrap().make_right_child(4).unwrap();
    /// root.make_right_child(3).unwrap();
    ///
    /// // The slot is taken now, so the value comes back:
    /// assert_eq!(root.make_left_child(5).unwrap_err().into_value(), 5);
    /// assert_eq!(tree.size(), 4);
    /// ```
    #[inline]
    pub fn make_left_child(
        &mut self,
        value: T,
    ) -> Result<NodeRefMut<'_, T, K, S>, OccupiedChildError<T>> {
        self.make_child(Side::Left, value)
    }
    /// Adds a new node with the specified value as the right child, returning a reference to it.
    ///
    /// # Errors
    /// Fails if the node already has a right child. The value is handed back inside the error.
    #[inline]
    pub fn make_right_child(
        &mut self,
        value: T,
    ) -> Result<NodeRefMut<'_, T, K, S>, OccupiedChildError<T>> {
        self.make_child(Side::Right, value)
    }

    fn child_mut(&mut self, side: Side) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.tree.node(&self.key).link(side).cloned()?;
        Some(NodeRefMut {
            tree: &mut *self.tree,
            key,
        })
    }
    fn into_child(self, side: Side) -> Option<Self> {
        let key = self.tree.node(&self.key).link(side).cloned()?;
        Some(Self {
            tree: self.tree,
            key,
        })
    }
    fn make_child(
        &mut self,
        side: Side,
        value: T,
    ) -> Result<NodeRefMut<'_, T, K, S>, OccupiedChildError<T>> {
        if self.tree.node(&self.key).link(side).is_some() {
            return Err(OccupiedChildError { value });
        }
        let key = self.tree.storage.add(Node::leaf(value));
        *self.tree.node_mut(&self.key).link_mut(side) = Some(key.clone());
        Ok(NodeRefMut {
            tree: &mut *self.tree,
            key,
        })
    }
}
impl<'a, T, K, S> From<NodeRefMut<'a, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: NodeRefMut<'a, T, K, S>) -> Self {
        Self {
            tree: op.tree,
            key: op.key,
        }
    }
}
impl<T, K, S> Debug for NodeRefMut<'_, T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&NodeRef::from(self), f)
    }
}
