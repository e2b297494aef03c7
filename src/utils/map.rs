/*!
# Generalized Maps

Abstractions over `Map` data structures, allowing traversals to choose the most efficient
implementation based on the graph:
- sparse maps / arbitrary node labels -> `HashMap`, `FxHashMap`
- dense maps over `0..n` -> `Vec<Option<T>>`
*/

use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use num::ToPrimitive;

/// Minimalist trait for map-like collections.
pub trait Map<K, V> {
    /// Inserts an `(key, value)` pair into the map.
    /// If the key was present before, returns the previous value, otherwise returns `None`.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes a key from the map and returns the associated value if it existed.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns a reference to the value corresponding to the given key, or `None` if the key is not present.
    fn get(&self, key: &K) -> Option<&V>;

    /// Returns `true` if the key is present.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Clears all elements from the map.
    fn clear(&mut self);

    /// Returns the number of elements currently stored in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map is empty. Default implementation uses `len()`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> Map<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn clear(&mut self) {
        HashMap::clear(self)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// `Vec<Option<T>>` usable as `Map`.
///
/// Keys outside of the allocated range are treated as absent; inserting such a key grows the vector.
impl<I, T> Map<I, T> for Vec<Option<T>>
where
    I: ToPrimitive,
{
    fn insert(&mut self, key: I, value: T) -> Option<T> {
        let key = key.to_usize().expect("key is not a valid index");
        if key >= self.len() {
            self.resize_with(key + 1, || None);
        }
        self[key].replace(value)
    }

    fn remove(&mut self, key: &I) -> Option<T> {
        let key = key.to_usize()?;
        self.get_mut(key)?.take()
    }

    fn get(&self, key: &I) -> Option<&T> {
        let key = key.to_usize()?;
        self.as_slice().get(key)?.as_ref()
    }

    fn clear(&mut self) {
        self.iter_mut().for_each(|x| *x = None);
    }

    fn len(&self) -> usize {
        self.iter().filter(|x| x.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;

    use super::*;
    use crate::utils::FromCapacity;

    fn check_map<M: Map<u32, f64>>(mut map: M) {
        assert!(map.is_empty());
        assert_eq!(map.insert(2, 1.5), None);
        assert_eq!(map.insert(2, 2.5), Some(1.5));
        assert_eq!(map.get(&2), Some(&2.5));
        assert_eq!(map.get(&3), None);
        assert!(map.contains_key(&2));

        assert_eq!(map.insert(10, 0.0), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.remove(&2), Some(2.5));
        assert_eq!(map.remove(&2), None);

        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn dense_and_hashed_maps() {
        check_map(Vec::<Option<f64>>::from_capacity(4));
        check_map(FxHashMap::<u32, f64>::from_capacity(4));
        check_map(HashMap::<u32, f64>::from_capacity(4));
    }

    #[test]
    fn dense_map_out_of_range() {
        let map: Vec<Option<u8>> = FromCapacity::from_capacity(2);
        assert_eq!(map.as_slice().len(), 2);
        assert_eq!(Map::<u32, u8>::get(&map, &7), None);
    }
}
