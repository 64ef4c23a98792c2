//! `IndexMap` — an open-addressing hash map with tombstone deletion.
//!
//! This is the key/value store underneath the graph: it indexes vertices by
//! identifier and, per vertex, outgoing edges by destination.
//!
//! Layout and policy:
//! - **Tagged slots**: every slot is `Empty`, `Tombstone` or `Occupied`;
//!   there are no nullable markers or uninitialized buckets.
//! - **Linear probing**: lookups walk forward from `hash(key) mod capacity`,
//!   skipping tombstones, and never wrap past one full cycle of the table.
//! - **Fixed increments**: capacity grows and shrinks by
//!   [`MapConfig::growth_increment`] slots; a rehash drops all tombstones.
//! - **Deferred compaction**: deletions leave tombstones that are purged by a
//!   same-capacity rehash once they dominate the table.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

use crate::config::MapConfig;

/// A single table slot.
#[derive(Clone)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied { key: K, value: V },
}

impl<K, V> Slot<K, V> {
    #[inline(always)]
    fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Occupied { key, value } => Some((key, value)),
            _ => None,
        }
    }
}

/// Which mutation a resize decision follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A new key was stored.
    Insert,
    /// A key was retired to a tombstone.
    Delete,
}

/// Outcome of [`plan_resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// Rehash into a larger table of the given capacity.
    Grow(usize),
    /// Rehash into a smaller table of the given capacity.
    Shrink(usize),
    /// Rehash at the same capacity to purge tombstones.
    Compact,
    /// Leave the table alone.
    Keep,
}

/// Decides how the table reacts to a mutation.
///
/// After an insertion the table grows by one increment once
/// `size / capacity` exceeds the load factor. After a deletion it shrinks by
/// one increment when the smaller table would still sit under the load
/// factor (only while capacity exceeds one increment), and otherwise compacts when
/// tombstones reach the configured ratio or outnumber live entries.
pub fn plan_resize(
    size: usize,
    tombstones: usize,
    capacity: usize,
    config: &MapConfig,
    mutation: Mutation,
) -> Resize {
    let step = config.growth_increment;
    match mutation {
        Mutation::Insert => {
            if capacity == 0 || size as f32 / capacity as f32 > config.load_factor {
                Resize::Grow(capacity + step)
            } else {
                Resize::Keep
            }
        }
        Mutation::Delete => {
            if size > 0 && capacity > step {
                let smaller = capacity - step;
                if (size as f32 / smaller as f32) < config.load_factor {
                    return Resize::Shrink(smaller);
                }
            }
            if tombstones > 0
                && (tombstones >= size
                    || tombstones as f32 / capacity as f32 >= config.tombstone_ratio)
            {
                Resize::Compact
            } else {
                Resize::Keep
            }
        }
    }
}

/// Result of walking a probe sequence.
enum Locate {
    /// The key lives in this slot.
    Found(usize),
    /// The key is absent; the slot (if any) is where it would be stored.
    Vacant(Option<usize>),
}

/// Open-addressing hash map with tombstone deletion.
#[derive(Clone)]
pub struct IndexMap<K, V, S = RandomState> {
    slots: Vec<Slot<K, V>>,
    /// Occupied slots.
    len: usize,
    /// Tombstoned slots.
    tombstones: usize,
    config: MapConfig,
    hash_builder: S,
}

impl<K, V> IndexMap<K, V, RandomState> {
    /// Creates an empty map with the default policy.
    #[inline]
    pub fn new() -> Self {
        Self::with_config(MapConfig::default())
    }

    /// Creates an empty map with `capacity` initial slots.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(MapConfig::default().with_initial_capacity(capacity))
    }

    /// Creates an empty map following `config`.
    ///
    /// The config is expected to be validated; a zero initial capacity is
    /// bumped to a single slot.
    #[inline]
    pub fn with_config(config: MapConfig) -> Self {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<K, V, S> IndexMap<K, V, S> {
    /// Creates an empty map with `capacity` slots and a custom hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::with_config_and_hasher(
            MapConfig::default().with_initial_capacity(capacity),
            hash_builder,
        )
    }

    /// Creates an empty map with a policy and a custom hasher.
    pub fn with_config_and_hasher(config: MapConfig, hash_builder: S) -> Self {
        Self {
            slots: empty_slots(config.initial_capacity.max(1)),
            len: 0,
            tombstones: 0,
            config,
            hash_builder,
        }
    }

    /// Number of live entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map holds no live entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the table.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots awaiting compaction.
    #[inline(always)]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Live entries divided by capacity.
    #[inline]
    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.slots.len() as f32
    }

    /// The policy this map resizes by.
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Removes every entry and resets the table to its initial capacity.
    pub fn clear(&mut self) {
        self.slots = empty_slots(self.config.initial_capacity.max(1));
        self.len = 0;
        self.tombstones = 0;
    }

    /// Iterates live entries in slot order.
    ///
    /// The order is stable between mutations but not across a rehash.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Iterates live entries in slot order with mutable values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            slots: self.slots.iter_mut(),
            remaining: self.len,
        }
    }

    /// Iterates live keys in slot order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterates live values in slot order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Iterates live values mutably in slot order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.iter_mut().map(|(_, v)| v)
    }

    /// Returns the first live entry satisfying `f`, in slot order.
    pub fn find_ref<F>(&self, f: F) -> Option<(&K, &V)>
    where
        F: Fn(&K, &V) -> bool,
    {
        self.iter().find(|(k, v)| f(k, v))
    }

    /// Returns `true` if any live entry satisfies `f`.
    pub fn any_ref<F>(&self, f: F) -> bool
    where
        F: Fn(&K, &V) -> bool,
    {
        self.find_ref(f).is_some()
    }

    /// Returns `true` if every live entry satisfies `f` (vacuously for an empty map).
    pub fn all_ref<F>(&self, f: F) -> bool
    where
        F: Fn(&K, &V) -> bool,
    {
        self.iter().all(|(k, v)| f(k, v))
    }
}

impl<K, V, S> IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Home slot of `key` in the current table.
    #[inline(always)]
    fn home<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        (self.hash_builder.hash_one(key) % self.slots.len() as u64) as usize
    }

    /// Walks the probe sequence of `key` for at most one full cycle.
    ///
    /// Remembers the first tombstone passed so insertions can reuse it, but
    /// keeps scanning until an empty slot proves the key absent.
    fn locate<Q>(&self, key: &Q) -> Locate
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.len();
        let mut idx = self.home(key);
        let mut reusable = None;

        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return Locate::Vacant(Some(reusable.unwrap_or(idx))),
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(idx);
                    }
                }
                Slot::Occupied { key: k, .. } if k.borrow() == key => {
                    return Locate::Found(idx);
                }
                Slot::Occupied { .. } => {}
            }
            idx += 1;
            if idx == capacity {
                idx = 0;
            }
        }

        Locate::Vacant(reusable)
    }

    /// Returns `true` if `key` is live in the map.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        matches!(self.locate(key), Locate::Found(_))
    }

    /// Returns the value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.locate(key) {
            Locate::Found(idx) => self.slots[idx].entry().map(|(_, v)| v),
            Locate::Vacant(_) => None,
        }
    }

    /// Returns the stored key and value for `key`.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.locate(key) {
            Locate::Found(idx) => self.slots[idx].entry(),
            Locate::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.locate(key) {
            Locate::Found(idx) => match &mut self.slots[idx] {
                Slot::Occupied { value, .. } => Some(value),
                _ => None,
            },
            Locate::Vacant(_) => None,
        }
    }

    /// Stores `value` under `key`, returning the previous value if the key was live.
    ///
    /// New keys land in the first tombstone or empty slot of their probe
    /// sequence; the table may grow afterwards.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(&key) {
            Locate::Found(idx) => match &mut self.slots[idx] {
                Slot::Occupied { value: current, .. } => Some(core::mem::replace(current, value)),
                _ => None,
            },
            Locate::Vacant(Some(idx)) => {
                if matches!(self.slots[idx], Slot::Tombstone) {
                    self.tombstones -= 1;
                }
                self.slots[idx] = Slot::Occupied { key, value };
                self.len += 1;
                self.apply(Mutation::Insert);
                None
            }
            Locate::Vacant(None) => {
                // Only reachable with a policy that lets the table saturate.
                let grown = self.slots.len() + self.config.growth_increment.max(1);
                self.rehash(grown);
                self.put(key, value)
            }
        }
    }

    /// Removes `key`, leaving a tombstone, and returns its value.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = match self.locate(key) {
            Locate::Found(idx) => idx,
            Locate::Vacant(_) => return None,
        };
        let value = match core::mem::replace(&mut self.slots[idx], Slot::Tombstone) {
            Slot::Occupied { value, .. } => value,
            _ => return None,
        };
        self.len -= 1;
        self.tombstones += 1;
        self.apply(Mutation::Delete);
        Some(value)
    }

    fn apply(&mut self, mutation: Mutation) {
        match plan_resize(
            self.len,
            self.tombstones,
            self.slots.len(),
            &self.config,
            mutation,
        ) {
            Resize::Grow(capacity) | Resize::Shrink(capacity) => self.rehash(capacity),
            Resize::Compact => self.rehash(self.slots.len()),
            Resize::Keep => {}
        }
    }

    /// Moves every live entry into a fresh table of `capacity` slots.
    fn rehash(&mut self, capacity: usize) {
        trace_event!(
            from = self.slots.len(),
            to = capacity,
            live = self.len,
            tombstones = self.tombstones,
            "index map rehash"
        );
        let old = core::mem::replace(&mut self.slots, empty_slots(capacity));
        self.tombstones = 0;
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                let mut idx = self.home(&key);
                while !matches!(self.slots[idx], Slot::Empty) {
                    idx += 1;
                    if idx == capacity {
                        idx = 0;
                    }
                }
                self.slots[idx] = Slot::Occupied { key, value };
            }
        }
    }
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    core::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// Borrowing iterator over live entries.
pub struct Iter<'a, K, V> {
    slots: core::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Borrowing iterator over live entries with mutable values.
pub struct IterMut<'a, K, V> {
    slots: core::slice::IterMut<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining -= 1;
                return Some((&*key, value));
            }
        }
        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

/// Consuming iterator over live entries.
pub struct IntoIter<K, V> {
    slots: std::vec::IntoIter<Slot<K, V>>,
    remaining: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V, S> IntoIterator for IndexMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.slots.into_iter(),
            remaining: self.len,
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a IndexMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> Default for IndexMap<K, V, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> FromIterator<(K, V)> for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::with_config_and_hasher(MapConfig::default(), S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for IndexMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for IndexMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Slot dump: `k:v` for live entries, `|M|` for tombstones, `|X|` for empty slots.
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for IndexMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match slot {
                Slot::Empty => f.write_str("|X|")?,
                Slot::Tombstone => f.write_str("|M|")?,
                Slot::Occupied { key, value } => write!(f, "{key}:{value}")?,
            }
        }
        f.write_str("]")
    }
}
