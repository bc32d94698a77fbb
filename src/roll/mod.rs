//! Rolling binary trees by 90 degrees.
//!
//! A *roll* rewrites every left and right link of a tree so that the whole structure turns a quarter of a turn, clockwise or counterclockwise, around its leftmost or rightmost spine. Values are never touched, only links, and the node count stays the same. The traversal orders of the tree change in a fixed way:
//!
//! | Direction          | Before      | After       |
//! |--------------------|-------------|-------------|
//! | clockwise          | inorder     | preorder    |
//! | clockwise          | postorder   | inorder     |
//! | counterclockwise   | preorder    | inorder     |
//! | counterclockwise   | inorder     | postorder   |
//!
//! A roll is selected with a [`RollStrategy`], which combines a [`RollDirection`] with the choice of either rewriting the tree in place or rolling a deep copy while leaving the original untouched. Rolling a rootless tree does nothing.
//!
//! # Example
//! ```rust
//! use treeroll::{BinaryTree, roll::{RollDirection, RollStrategy}, traversal::Order};
//!
//! let mut tree = BinaryTree::<_>::from_level_order_options(vec![
//!     Some(1), Some(2), Some(3), None, None, Some(4), Some(5), None, Some(6),
//! ]);
//! let inorder = tree.collect_cloned(Order::Inorder)?;
//!
//! // Roll a copy, leaving the tree itself as it was...
//! let rolled = tree
//!     .roll_with(RollStrategy::immutable(RollDirection::Clockwise))
//!     .into_copy()
//!     .expect("immutable strategies roll a copy");
//! assert_eq!(rolled.collect_cloned(Order::Preorder)?, inorder);
//!
//! // ...or roll the tree in place.
//! tree.roll(RollDirection::Clockwise);
//! assert_eq!(tree.collect_cloned(Order::Preorder)?, [2, 1, 4, 6, 3, 5]);
//! assert_eq!(tree.collect_cloned(Order::Inorder)?, [2, 6, 4, 5, 3, 1]);
//! # Ok::<(), treeroll::traversal::TraverseError>(())
//! ```
//!
//! [`RollStrategy`]: enum.RollStrategy.html " "
//! [`RollDirection`]: enum.RollDirection.html " "

mod roller;

use core::{
    fmt::{self, Formatter, Debug, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};
use alloc::string::{String, ToString};
use thiserror::Error;
use tracing::instrument;
use crate::{
    binary_tree::{BinaryTree, Node, Side},
    storage::{Storage, DefaultStorage},
};

/// The direction in which a tree is rolled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RollDirection {
    /// Turns the tree to the right: the leftmost node becomes the root, and every left child becomes the parent of its former parent.
    Clockwise,
    /// Turns the tree to the left: the rightmost node becomes the root, and every right child becomes the parent of its former parent.
    Counterclockwise,
}
impl RollDirection {
    /// Both directions.
    pub const ALL: [Self; 2] = [Self::Clockwise, Self::Counterclockwise];

    /// Returns the opposite direction.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::Counterclockwise,
            Self::Counterclockwise => Self::Clockwise,
        }
    }
    /// The side along which the roll pivots: the spine on this side is walked first, and its deepest node becomes the new root.
    #[inline]
    pub(crate) const fn spine(self) -> Side {
        match self {
            Self::Clockwise => Side::Left,
            Self::Counterclockwise => Side::Right,
        }
    }
}
impl Display for RollDirection {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Clockwise => "clockwise",
            Self::Counterclockwise => "counterclockwise",
        })
    }
}
impl FromStr for RollDirection {
    type Err = ParseRollDirectionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let is_one_of = |names: &[&str]| names.iter().any(|name| name.eq_ignore_ascii_case(trimmed));
        if is_one_of(&["clockwise", "cw"]) {
            Ok(Self::Clockwise)
        } else if is_one_of(&["counterclockwise", "counter-clockwise", "anticlockwise", "ccw"]) {
            Ok(Self::Counterclockwise)
        } else {
            Err(ParseRollDirectionError {
                input: s.to_string(),
            })
        }
    }
}

/// The error returned when a roll direction is selected from a string which does not name one, including an empty one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("invalid roll direction {input:?}, expected \"clockwise\" or \"counterclockwise\"")]
pub struct ParseRollDirectionError {
    input: String,
}
impl ParseRollDirectionError {
    /// Returns the string which failed to parse.
    #[inline(always)]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// One of the four ways to roll a tree: a direction, combined with whether the tree itself is rewritten or a deep copy of it is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RollStrategy {
    /// Rolls the tree clockwise, rewriting its links in place.
    Clockwise,
    /// Rolls the tree counterclockwise, rewriting its links in place.
    Counterclockwise,
    /// Rolls a deep copy of the tree clockwise, leaving the original untouched.
    ImmutableClockwise,
    /// Rolls a deep copy of the tree counterclockwise, leaving the original untouched.
    ImmutableCounterclockwise,
}
impl RollStrategy {
    /// All four strategies.
    pub const ALL: [Self; 4] = [
        Self::Clockwise,
        Self::Counterclockwise,
        Self::ImmutableClockwise,
        Self::ImmutableCounterclockwise,
    ];

    /// Selects the strategy which rolls the tree in place in the specified direction.
    #[inline]
    pub const fn new(direction: RollDirection) -> Self {
        match direction {
            RollDirection::Clockwise => Self::Clockwise,
            RollDirection::Counterclockwise => Self::Counterclockwise,
        }
    }
    /// Selects the strategy which rolls a deep copy of the tree in the specified direction.
    #[inline]
    pub const fn immutable(direction: RollDirection) -> Self {
        match direction {
            RollDirection::Clockwise => Self::ImmutableClockwise,
            RollDirection::Counterclockwise => Self::ImmutableCounterclockwise,
        }
    }
    /// Returns the direction of the roll.
    #[inline]
    pub const fn direction(self) -> RollDirection {
        match self {
            Self::Clockwise | Self::ImmutableClockwise => RollDirection::Clockwise,
            Self::Counterclockwise | Self::ImmutableCounterclockwise => {
                RollDirection::Counterclockwise
            }
        }
    }
    /// Returns `true` if the strategy rolls a deep copy instead of the tree itself, `false` otherwise.
    #[inline]
    pub const fn is_immutable(self) -> bool {
        matches!(self, Self::ImmutableClockwise | Self::ImmutableCounterclockwise)
    }
    /// Rolls the tree according to the strategy.
    ///
    /// In-place strategies rewrite the links of `tree` and hand the same tree back. Immutable strategies leave every node and link of `tree` as it was and return a freshly rolled deep copy instead.
    #[instrument(level = "debug", skip(tree))]
    pub fn apply<T, K, S>(self, tree: &mut BinaryTree<T, K, S>) -> Rolled<'_, T, K, S>
    where
        T: Clone,
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
    {
        if self.is_immutable() {
            Rolled::Copied(tree.rolled(self.direction()))
        } else {
            Rolled::InPlace(tree.roll(self.direction()))
        }
    }
}

/// The tree produced by [`RollStrategy::apply`].
///
/// Dereferences to the rolled tree either way.
///
/// [`RollStrategy::apply`]: enum.RollStrategy.html#method.apply " "
pub enum Rolled<'t, T, K = usize, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// The original tree, rolled in place.
    InPlace(&'t mut BinaryTree<T, K, S>),
    /// A rolled deep copy; the original tree was left untouched.
    Copied(BinaryTree<T, K, S>),
}
impl<'t, T, K, S> Rolled<'t, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Returns `true` if the rolled tree is a separate copy, `false` if it's the original tree.
    #[inline]
    pub const fn is_copy(&self) -> bool {
        matches!(self, Self::Copied(..))
    }
    /// Returns the rolled copy, or `None` if the original tree was rolled in place.
    #[inline]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_copy(self) -> Option<BinaryTree<T, K, S>> {
        match self {
            Self::InPlace(..) => None,
            Self::Copied(tree) => Some(tree),
        }
    }
}
impl<T, K, S> Deref for Rolled<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Target = BinaryTree<T, K, S>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::InPlace(tree) => &**tree,
            Self::Copied(tree) => tree,
        }
    }
}
impl<T, K, S> DerefMut for Rolled<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Self::InPlace(tree) => &mut **tree,
            Self::Copied(tree) => tree,
        }
    }
}
impl<T, K, S> Debug for Rolled<'_, T, K, S>
where
    T: Debug,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let variant = if self.is_copy() { "Copied" } else { "InPlace" };
        f.debug_tuple(variant).field(&**self).finish()
    }
}

impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Rolls the tree in place in the specified direction, returning the same tree.
    ///
    /// The nodes are not moved or cloned: their links are rewritten and the root is replaced with the node found at the bottom of the pivot spine.
    ///
    /// # Panics
    /// The roll recurses once per node, so a degenerate tree which is hundreds of thousands of nodes deep can overflow the stack.
    #[inline]
    pub fn roll(&mut self, direction: RollDirection) -> &mut Self {
        roller::roll_in_place(self, direction);
        self
    }
    /// Returns a deep copy of the tree, rolled in the specified direction. The tree itself is left untouched.
    ///
    /// # Panics
    /// Both the copy and the roll recurse once per node, so a degenerate tree which is hundreds of thousands of nodes deep can overflow the stack.
    #[inline]
    pub fn rolled(&self, direction: RollDirection) -> Self
    where T: Clone,
    {
        let mut copy = self.deep_copy();
        roller::roll_in_place(&mut copy, direction);
        copy
    }
    /// Rolls the tree according to the specified strategy. See [`RollStrategy::apply`].
    ///
    /// [`RollStrategy::apply`]: ../roll/enum.RollStrategy.html#method.apply " "
    #[inline(always)]
    pub fn roll_with(&mut self, strategy: RollStrategy) -> Rolled<'_, T, K, S>
    where T: Clone,
    {
        strategy.apply(self)
    }
}

#[cfg(test)]
mod tests;
