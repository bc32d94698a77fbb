use alloc::vec::Vec;
use tracing::debug;
use crate::{
    storage::Storage,
    traversal::{Order, TraverseError},
};
use super::*;

impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Walks the whole tree in the specified order, invoking `action` once for every node.
    ///
    /// # Errors
    /// Fails with [`TraverseError::EmptyTree`] if the tree is rootless. Nothing is visited in that case.
    ///
    /// # Example
    /// ```rust
    /// # use treeroll::{BinaryTree, traversal::Order};
    /// let tree = BinaryTree::<_>::from_level_order(vec!['T', 'E', 'X', 'A', 'R'], &'#');
    /// let mut letters = String::new();
    /// tree.traverse(Order::Inorder, |node| letters.push(*node.value()))?;
    /// assert_eq!(letters, "AERTX");
    /// # Ok::<(), treeroll::traversal::TraverseError>(())
    /// ```
    ///
    /// [`TraverseError::EmptyTree`]: ../traversal/enum.TraverseError.html#variant.EmptyTree " "
    pub fn traverse<'a, F>(&'a self, order: Order, action: F) -> Result<(), TraverseError>
    where F: FnMut(NodeRef<'a, T, K, S>),
    {
        let root = self.root().ok_or_else(|| {
            debug!(%order, "refusing to traverse a rootless tree");
            TraverseError::EmptyTree
        })?;
        order.walk(Some(root), action);
        Ok(())
    }
    /// Collects references to the values of all nodes in the specified order.
    ///
    /// # Errors
    /// Fails with [`TraverseError::EmptyTree`] if the tree is rootless.
    ///
    /// [`TraverseError::EmptyTree`]: ../traversal/enum.TraverseError.html#variant.EmptyTree " "
    pub fn collect(&self, order: Order) -> Result<Vec<&T>, TraverseError> {
        let mut values = Vec::new();
        self.traverse(order, |node| values.push(node.value()))?;
        Ok(values)
    }
    /// Collects clones of the values of all nodes in the specified order.
    ///
    /// # Errors
    /// Fails with [`TraverseError::EmptyTree`] if the tree is rootless.
    ///
    /// [`TraverseError::EmptyTree`]: ../traversal/enum.TraverseError.html#variant.EmptyTree " "
    pub fn collect_cloned(&self, order: Order) -> Result<Vec<T>, TraverseError>
    where T: Clone,
    {
        let mut values = Vec::new();
        self.traverse(order, |node| values.push(node.value().clone()))?;
        Ok(values)
    }
}
