/*!
# Utilities

Abstractions over [`Set`] and [`Map`] data structures. Traversals are generic over the storage
they use to remember visited nodes and per-node values; graphs select it via
[`GraphNodes`](crate::ops::GraphNodes):
- index graphs use dense storage (`BitSetImpl`, `Vec<Option<T>>`),
- label graphs use hashed storage (`FxHashSet`, `FxHashMap`).

You probably do not need to interact with this module directly.
*/

use std::{
    collections::{HashMap, HashSet},
    hash::RandomState,
};

use fxhash::{FxBuildHasher, FxHashMap, FxHashSet};

pub mod map;
pub mod set;

pub use map::Map;
pub use set::Set;

use stream_bitset::{PrimIndex, bitset::BitSetImpl};

/// Helper trait for datastructure that can be initialized with capacity.
/// Can be interpreted as reserved space or guaranteed used space.
///
/// Note that this should mainly be used in conjunction with either [`Set`] or [`Map`]
/// datastructures: dense structures are initialized to the *total* capacity (ie. the number of
/// nodes), while hashed structures only reserve the *used* capacity.
pub trait FromCapacity: Sized {
    /// Create a new instance with a given capacity
    fn from_capacity(capacity: usize) -> Self {
        Self::from_total_used_capacity(capacity, capacity)
    }

    /// Creates a new instance from the total capacity (ie. max-value for example) and the actual
    /// capacity that will be used (space-wise).
    ///
    /// If you only have one value as an upper bound, provide it as both arguments.
    fn from_total_used_capacity(total: usize, used: usize) -> Self;
}

impl<T> FromCapacity for Vec<Option<T>> {
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `Vec<Option<T>>` as a Map requires intializing to the maximum element
        std::iter::repeat_with(|| None).take(total).collect()
    }
}

impl<I> FromCapacity for BitSetImpl<I>
where
    I: PrimIndex,
{
    fn from_total_used_capacity(total: usize, _used: usize) -> Self {
        // Using `BitSetImpl<I>` as a Set requires intializing to the maximum element
        Self::new(I::from_usize(total).expect("capacity exceeds the index type"))
    }
}

impl<T> FromCapacity for HashSet<T, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<T> FromCapacity for FxHashSet<T> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}

impl<K, V> FromCapacity for HashMap<K, V, RandomState> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity(used)
    }
}

impl<K, V> FromCapacity for FxHashMap<K, V> {
    fn from_total_used_capacity(_total: usize, used: usize) -> Self {
        Self::with_capacity_and_hasher(used, FxBuildHasher::default())
    }
}
