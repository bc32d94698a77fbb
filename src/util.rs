use core::fmt::Debug;

/// Panics for a key which is linked from the tree but missing from its storage.
///
/// Only reachable if a `Storage` implementation breaks its contract, since trees never remove nodes.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn dangling_key<K: Debug>(key: &K) -> ! {
    panic!("tree corruption: key {:?} is linked but not present in the storage", key)
}
