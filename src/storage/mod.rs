//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the trait for the arenas which hold the nodes of a tree
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified
//!
//! Out of the box, [`Storage`] is implemented for [`Vec`] (growable, the default) and for [`ArrayVec`] (fixed capacity, nodes are stored inline without a dynamic memory allocation).
//!
//! Trees never remove nodes from their storage while they're alive. Rolling a tree only rewrites the links between nodes, which means that every key handed out by `add` stays valid for as long as the storage exists.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "

mod arrayvec_impl;
mod vec_impl;

use core::fmt::Debug;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// There's a number of invariants which have to be followed by the container:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - a key returned by `add` must resolve to the very same element through `get` and `get_mut` for as long as the storage lives;
/// - `contains_key` must return `true` exactly for the keys which `get` resolves.
///
/// Tree structures rely on those invariants to never follow a dangling link.
pub trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are already full.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// For storages which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least `additional` more elements to be inserted in the given storage. The storage may reserve more space to avoid frequent reallocations. Does nothing if capacity is already sufficient.
    ///
    /// # Panics
    /// The default implementation panics if the requested amount of elements does not fit into `capacity`, which is the correct behavior for storages which cannot reallocate.
    #[inline]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is always a [`Vec`], with keys being plain indices.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
pub type DefaultStorage<T> = alloc::vec::Vec<T>;
