//! Arena-allocated binary trees which can be rolled by 90 degrees, clockwise or counterclockwise.
//!
//! # Overview
//! A [`BinaryTree`] keeps its nodes in a backing storage, typically a [`Vec`] (or an [`ArrayVec`] when dynamic memory allocation is undesirable), and links them by keys into that storage instead of pointers. This is the technique known as ["arena-allocated trees"][arena tree blog post], described by Ben Lovy.
//!
//! Trees are built from their level-order layout, traversed in preorder, inorder or postorder, and *rolled*: a roll rewrites every link of the tree so that it turns a quarter of a turn, such that one of its traversal orders becomes another one. The [`roll`] module describes the exact correspondence. Rolls can happen in place or on a deep copy, leaving the original untouched.
//!
//! # Example
//! ```rust
//! use treeroll::prelude::*;
//!
//! let mut tree = BinaryTree::<_>::from_level_order_options(vec![
//!     Some(1), Some(2), Some(3), None, None, Some(4), Some(5), None, Some(6),
//! ]);
//! assert_eq!(tree.collect_cloned(TraversalOrder::Inorder)?, [2, 1, 4, 6, 3, 5]);
//!
//! tree.roll(RollDirection::Clockwise);
//! assert_eq!(tree.collect_cloned(TraversalOrder::Preorder)?, [2, 1, 4, 6, 3, 5]);
//! # Ok::<(), treeroll::traversal::TraverseError>(())
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type is [`Storage`]. It's implemented for [`Vec`], which is the default, and for [`ArrayVec`], which stores the nodes inline and panics once it runs out of room.
//!
//! # Logging
//! The crate emits [`tracing`] events when trees are built, copied and rolled. It never installs a subscriber on its own.
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. The crate always requires an allocator.
//! - `doc_cfg` - nightly-only, used for building the documentation.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) - `^0.5`
//!
//! [`BinaryTree`]: binary_tree/struct.BinaryTree.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`roll`]: roll/index.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, DefaultStorage};

pub mod binary_tree;
#[doc(no_inline)]
pub use binary_tree::BinaryTree;

pub mod traversal;
#[doc(no_inline)]
pub use traversal::Order;

pub mod roll;
#[doc(no_inline)]
pub use roll::{RollDirection, RollStrategy};

pub mod printer;
#[doc(no_inline)]
pub use printer::TreePrinter;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Order as TraversalOrder;
    #[doc(no_inline)]
    pub use crate::roll::{RollDirection, RollStrategy};
    #[doc(no_inline)]
    pub use crate::printer::TreePrinter;
}

pub(crate) mod util;
