use core::fmt::Debug;
use tracing::trace;
use crate::{
    binary_tree::{BinaryTree, Node, Side},
    storage::Storage,
};
use super::RollDirection;

/// Rolls the tree in place, replacing its root with the rolled one.
pub(super) fn roll_in_place<T, K, S>(tree: &mut BinaryTree<T, K, S>, direction: RollDirection)
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    let root = match tree.root.take() {
        Some(root) => root,
        None => return,
    };
    let mut roller = Roller {
        tree: &mut *tree,
        spine: direction.spine(),
        rolled_root: None,
    };
    roller.roll(root, None);
    let rolled_root = roller.rolled_root;
    debug_assert!(rolled_root.is_some(), "roll did not resolve a root");
    tree.root = rolled_root;
}

/// State of a single roll: the tree being rewritten and the slot for the new root, which gets filled once the bottom of the root's pivot spine is reached.
///
/// Everything is described in terms of the pivot spine: for a clockwise roll, the *spine* side is the left one and the *far* side is the right one, and the other way around for a counterclockwise roll.
struct Roller<'t, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'t mut BinaryTree<T, K, S>,
    spine: Side,
    rolled_root: Option<K>,
}
impl<T, K, S> Roller<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Rolls the subtree under `node`.
    ///
    /// `attach_point` is the node which receives the bottom of `node`'s spine as its spine-side child, or `None` if that node is to become the root of the rolled tree. A spine child inherits the attach point of its parent, while the far child of a node gets the node itself as its attach point.
    fn roll(&mut self, node: K, attach_point: Option<K>) {
        let spine = self.spine;
        let far = spine.opposite();
        // Steps below never write the far link of `node` itself, so reading it upfront is the same as reading it last.
        let (spine_child, far_child) = {
            let links = self.tree.node(&node);
            (links.link(spine).cloned(), links.link(far).cloned())
        };

        if let Some(spine_child) = spine_child {
            self.roll(spine_child.clone(), attach_point);
            // The former child becomes the parent.
            *self.tree.node_mut(&spine_child).link_mut(far) = Some(node.clone());
            *self.tree.node_mut(&node).link_mut(spine) = None;
        } else if let Some(attach_point) = attach_point {
            let attach = self.tree.node_mut(&attach_point);
            *attach.link_mut(spine) = Some(node.clone());
            // Still points into the subtree being rolled, which gets re-linked under `node`.
            *attach.link_mut(far) = None;
        } else {
            trace!(root = ?node, "resolved root of the rolled tree");
            self.rolled_root = Some(node.clone());
        }

        if let Some(far_child) = far_child {
            self.roll(far_child, Some(node));
        }
    }
}
