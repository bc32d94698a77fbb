use core::fmt::Debug;

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(crate) value: T,
    pub(crate) left: Option<K>,
    pub(crate) right: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a node without children. It only becomes part of a tree once some other node (or the tree's root slot) links to it.
    #[inline(always)]
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
    #[inline(always)]
    pub(crate) fn link(&self, side: Side) -> Option<&K> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }
    #[inline(always)]
    pub(crate) fn link_mut(&mut self, side: Side) -> &mut Option<K> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// One of the two child slots of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Side {
    Left,
    Right,
}
impl Side {
    #[inline(always)]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
