//! Text rendering of binary trees and their traversals.
//!
//! [`TreePrinter`] writes into anything implementing [`fmt::Write`], such as a `String` or a `Formatter`. Trees whose values implement `Display` also implement `Display` themselves, which renders them the same way [`print_tree`] does.
//!
//! # Example
//! ```rust
//! use treeroll::{BinaryTree, printer::TreePrinter, traversal::Order};
//!
//! let tree = BinaryTree::<_>::from_level_order_options(vec![Some(1), Some(2), Some(3)]);
//! let mut printer = TreePrinter::new(String::new());
//! printer.print_tree(&tree)?;
//! printer.print_order(&tree, Order::Inorder)?;
//! assert_eq!(
//!     printer.into_inner(),
//!     "      3\n1 ————┤\n      2\n2 1 3  Inorder\n",
//! );
//! # Ok::<(), treeroll::printer::PrintError>(())
//! ```
//!
//! [`TreePrinter`]: struct.TreePrinter.html " "
//! [`fmt::Write`]: https://doc.rust-lang.org/core/fmt/trait.Write.html " "
//! [`print_tree`]: struct.TreePrinter.html#method.print_tree " "

use core::fmt::{self, Debug, Display, Write};
use alloc::string::{String, ToString};
use thiserror::Error;
use crate::{
    binary_tree::{BinaryTree, Node, NodeRef, Side},
    storage::Storage,
    traversal::{Order, TraverseError},
};

/// The number of dashes in an edge unless specified otherwise.
pub const DEFAULT_EDGE_LENGTH: usize = 4;

const EDGE: char = '—';
const GUIDE: char = '│';

/// Renders trees into a text sink.
#[derive(Copy, Clone, Debug)]
pub struct TreePrinter<W: Write> {
    out: W,
    edge_length: usize,
}
impl<W: Write> TreePrinter<W> {
    /// Creates a printer which writes into `out` and draws edges [`DEFAULT_EDGE_LENGTH`] dashes long.
    ///
    /// [`DEFAULT_EDGE_LENGTH`]: constant.DEFAULT_EDGE_LENGTH.html " "
    #[inline]
    pub const fn new(out: W) -> Self {
        Self::with_edge_length(out, DEFAULT_EDGE_LENGTH)
    }
    /// Creates a printer which writes into `out` and draws edges `edge_length` dashes long.
    #[inline]
    pub const fn with_edge_length(out: W, edge_length: usize) -> Self {
        Self { out, edge_length }
    }
    /// Writes a string as-is.
    #[inline]
    pub fn print(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)
    }
    /// Writes a string followed by a line break.
    #[inline]
    pub fn println(&mut self, s: &str) -> fmt::Result {
        self.out.write_str(s)?;
        self.out.write_char('\n')
    }
    /// Draws the tree sideways, one node per line: the root is in the leftmost column, right subtrees are drawn above their parent and left subtrees below it.
    ///
    /// A node with children ends its line with an edge and a junction which shows where its children are: `┘` for a right child only, `┐` for a left child only and `┤` for both. A rootless tree is drawn as a single `NULL` line.
    pub fn print_tree<T, K, S>(&mut self, tree: &BinaryTree<T, K, S>) -> fmt::Result
    where
        T: Display,
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
    {
        match tree.root() {
            Some(root) => self.print_subtree(root, None, ""),
            None => self.println("NULL"),
        }
    }
    /// Writes the values of the tree in the specified order on a single line, each followed by a space, and finishes the line with the name of the order.
    ///
    /// # Errors
    /// Fails with [`PrintError::Traverse`] without writing anything if the tree is rootless.
    ///
    /// [`PrintError::Traverse`]: enum.PrintError.html#variant.Traverse " "
    pub fn print_order<T, K, S>(
        &mut self,
        tree: &BinaryTree<T, K, S>,
        order: Order,
    ) -> Result<(), PrintError>
    where
        T: Display,
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
    {
        let mut result = Ok(());
        tree.traverse(order, |node| {
            if result.is_ok() {
                result = write!(self.out, "{} ", node.value());
            }
        })?;
        result?;
        writeln!(self.out, " {}", order)?;
        Ok(())
    }
    /// Consumes the printer and returns the sink it was writing into.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `came_from` is the side of its parent the node hangs from, `None` for the root.
    fn print_subtree<T, K, S>(
        &mut self,
        node: NodeRef<'_, T, K, S>,
        came_from: Option<Side>,
        prefix: &str,
    ) -> fmt::Result
    where
        T: Display,
        S: Storage<Element = Node<T, K>, Key = K>,
        K: Clone + Debug + Eq,
    {
        let value = node.value().to_string();
        let indent = self.edge_length + value.chars().count();
        let (left, right) = (node.left_child(), node.right_child());
        let junction = match (left.is_some(), right.is_some()) {
            (false, false) => None,
            (false, true) => Some('┘'),
            (true, false) => Some('┐'),
            (true, true) => Some('┤'),
        };

        if let Some(right) = right {
            // The guide continues the edge of a left child up to its own right subtree.
            let guide = if came_from == Some(Side::Left) { GUIDE } else { ' ' };
            self.print_subtree(right, Some(Side::Right), &child_prefix(prefix, guide, indent))?;
        }

        self.out.write_str(prefix)?;
        self.out.write_str(&value)?;
        if let Some(junction) = junction {
            self.out.write_char(' ')?;
            for _ in 0..self.edge_length {
                self.out.write_char(EDGE)?;
            }
            self.out.write_char(junction)?;
        }
        self.out.write_char('\n')?;

        if let Some(left) = left {
            let guide = if came_from == Some(Side::Right) { GUIDE } else { ' ' };
            self.print_subtree(left, Some(Side::Left), &child_prefix(prefix, guide, indent))?;
        }
        Ok(())
    }
}

fn child_prefix(prefix: &str, guide: char, indent: usize) -> String {
    let mut child = String::with_capacity(prefix.len() + guide.len_utf8() + indent);
    child.push_str(prefix);
    child.push(guide);
    child.extend(core::iter::repeat(' ').take(indent));
    child
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl TreePrinter<IoSink<std::io::Stdout>> {
    /// Creates a printer which writes to the standard output.
    #[inline]
    pub fn stdout() -> Self {
        Self::new(IoSink::new(std::io::stdout()))
    }
}

/// Adapts a byte sink from `std::io` to be written into by a [`TreePrinter`].
///
/// `fmt::Write` cannot carry I/O errors, so the sink keeps the last one around until it's retrieved with [`take_error`].
///
/// [`TreePrinter`]: struct.TreePrinter.html " "
/// [`take_error`]: #method.take_error " "
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
#[derive(Debug)]
pub struct IoSink<W: std::io::Write> {
    inner: W,
    error: Option<std::io::Error>,
}
#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps the specified byte sink.
    #[inline]
    pub const fn new(inner: W) -> Self {
        Self { inner, error: None }
    }
    /// Returns the I/O error which made the last failed write fail, if any, and forgets it.
    #[inline]
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }
    /// Consumes the adapter and returns the wrapped byte sink.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)] // const fn cannot evaluate drop
    pub fn into_inner(self) -> W {
        self.inner
    }
}
#[cfg(feature = "std")]
impl<W: std::io::Write> Write for IoSink<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|error| {
            self.error = Some(error);
            fmt::Error
        })
    }
}

/// The error type returned by [`TreePrinter::print_order`].
///
/// [`TreePrinter::print_order`]: struct.TreePrinter.html#method.print_order " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PrintError {
    /// The tree could not be traversed.
    #[error(transparent)]
    Traverse(#[from] TraverseError),
    /// The sink refused the output.
    #[error("failed to write to the output")]
    Format(#[from] fmt::Error),
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use super::*;

    fn sample() -> BinaryTree<i32> {
        BinaryTree::from_level_order_options([
            Some(1), Some(2), Some(3), None, None, Some(4), Some(5), None, Some(6),
        ])
    }
    fn render(tree: &BinaryTree<i32>) -> String {
        let mut printer = TreePrinter::new(String::new());
        printer.print_tree(tree).unwrap();
        printer.into_inner()
    }

    #[test]
    fn sideways_tree() {
        let expected = "            5\n\
                        \x20     3 ————┤\n\
                        \x20     │     │     6\n\
                        \x20     │     4 ————┘\n\
                        1 ————┤\n\
                        \x20     2\n";
        assert_eq!(render(&sample()), expected);
        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn junction_shapes() {
        let left_only = BinaryTree::from_level_order_options([Some(7), Some(8)]);
        assert_eq!(render(&left_only), "7 ————┐\n      8\n");
        let right_only = BinaryTree::from_level_order_options([Some(7), None, Some(9)]);
        assert_eq!(render(&right_only), "      9\n7 ————┘\n");
        assert_eq!(render(&BinaryTree::with_root(42)), "42\n");
    }

    #[test]
    fn full_branch_in_inline_storage() {
        use crate::binary_tree::ArrayVecBinaryTree;
        let tree = ArrayVecBinaryTree::<char, [Node<char, usize>; 3]>::from_level_order_options([
            Some('a'), Some('b'), Some('c'),
        ]);
        assert_eq!(tree.to_string(), "      c\na ————┤\n      b\n");
    }

    #[test]
    fn edge_length() {
        let tree = BinaryTree::<_>::from_level_order_options([Some("ab"), Some("c")]);
        let mut printer = TreePrinter::with_edge_length(String::new(), 1);
        printer.print_tree(&tree).unwrap();
        assert_eq!(printer.into_inner(), "ab —┐\n    c\n");
    }

    #[test]
    fn rootless_tree() {
        assert_eq!(render(&BinaryTree::new()), "NULL\n");
    }

    #[test]
    fn orders() {
        let tree = sample();
        let mut printer = TreePrinter::new(String::new());
        for order in Order::ALL.iter().copied() {
            printer.print_order(&tree, order).unwrap();
        }
        assert_eq!(
            printer.into_inner(),
            "1 2 3 4 6 5  Preorder\n2 1 4 6 3 5  Inorder\n2 6 4 5 3 1  Postorder\n",
        );
    }

    #[test]
    fn order_of_rootless_tree() {
        let mut printer = TreePrinter::new(String::new());
        let error = printer.print_order(&BinaryTree::<i32>::new(), Order::Inorder);
        assert_eq!(error, Err(PrintError::Traverse(TraverseError::EmptyTree)));
        assert!(printer.into_inner().is_empty());
    }

    #[test]
    #[cfg(feature = "std")]
    fn io_sink() {
        let mut printer = TreePrinter::new(IoSink::new(Vec::new()));
        printer.print_order(&sample(), Order::Postorder).unwrap();
        let bytes = printer.into_inner().into_inner();
        assert_eq!(bytes, b"2 6 4 5 3 1  Postorder\n");
    }

    #[test]
    #[cfg(feature = "std")]
    fn io_sink_keeps_the_error() {
        let mut buffer = [0_u8; 4];
        let mut printer = TreePrinter::new(IoSink::new(&mut buffer[..]));
        let error = printer.print_order(&sample(), Order::Inorder);
        assert_eq!(error, Err(PrintError::Format(fmt::Error)));
        let mut sink = printer.into_inner();
        assert_eq!(
            sink.take_error().map(|error| error.kind()),
            Some(std::io::ErrorKind::WriteZero),
        );
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn passthrough() {
        let mut printer = TreePrinter::new(String::new());
        printer.print("Rolled").unwrap();
        printer.println(" tree:").unwrap();
        assert_eq!(printer.into_inner(), "Rolled tree:\n");
    }
}
