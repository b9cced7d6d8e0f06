//! ChainMap<K, V>: bucketed, chained hash map.
//!
//! The bucket array length is always a power of two, so a stored 32-bit
//! hash selects its bucket with `hash & (capacity - 1)`. Each bucket holds
//! a singly-linked chain of owned entries; a fresh key appends at the
//! chain tail, an existing key is updated in place (entry identity
//! preserved). Every entry caches its key's hash, so probing short-circuits
//! on hash inequality and rehashing never re-invokes `KeyHash`.
//!
//! Occupancy is checked before each insert: once `len >= 0.75 * capacity`
//! the bucket array doubles and every entry is relinked to its new bucket,
//! keeping the relative order of entries that land in the same new chain.
//! There is no shrink on deletion.
//!
//! Values are owned: removing an entry hands the value back, and dropping
//! the map drops every entry, nested containers included. Iterators borrow
//! the map, so mutation while an iterator is outstanding is rejected at
//! compile time rather than left undefined.

use crate::key_hash::KeyHash;
use crate::render::Render;
use core::borrow::Borrow;
use core::fmt;
use core::mem;

/// Bucket count used by [`ChainMap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

// Grow once len/capacity reaches 3/4, checked before each insert.
const LOAD_NUM: usize = 3;
const LOAD_DEN: usize = 4;

type Link<K, V> = Option<Box<Entry<K, V>>>;

struct Entry<K, V> {
    key: K,
    value: V,
    hash: u32,
    next: Link<K, V>,
}

pub struct ChainMap<K, V> {
    buckets: Vec<Link<K, V>>,
    len: usize,
}

/// Rejected explicit capacity: zero or not a power of two. Raised before
/// any bucket allocation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    NotPowerOfTwo(usize),
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::NotPowerOfTwo(n) => {
                write!(f, "map capacity must be a power of two, got {}", n)
            }
        }
    }
}

impl std::error::Error for CapacityError {}

impl<K, V> ChainMap<K, V> {
    /// New empty map with the default capacity (16 buckets).
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY)
    }

    /// New empty map with an explicit bucket count, which must be a power
    /// of two. The check runs before any allocation.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if !capacity.is_power_of_two() {
            return Err(CapacityError::NotPowerOfTwo(capacity));
        }
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: usize) -> Self {
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self { buckets, len: 0 }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn bucket_index(&self, hash: u32) -> usize {
        hash as usize & (self.buckets.len() - 1)
    }

    /// Drop every entry in every bucket. The bucket array is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.buckets {
            // Unlink iteratively so long chains don't recurse on drop.
            let mut chain = slot.take();
            while let Some(mut entry) = chain {
                chain = entry.next.take();
            }
        }
        self.len = 0;
    }

    // Doubles the bucket array and relinks every entry into
    // `hash & (new_capacity - 1)`. Tail-append keeps the relative order of
    // entries that land in the same new chain.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut new_buckets = Vec::with_capacity(new_capacity);
        new_buckets.resize_with(new_capacity, || None);
        let old_buckets = mem::replace(&mut self.buckets, new_buckets);

        for mut chain in old_buckets {
            while let Some(mut entry) = chain {
                chain = entry.next.take();
                let index = entry.hash as usize & (new_capacity - 1);
                let mut cursor = &mut self.buckets[index];
                while let Some(existing) = cursor {
                    cursor = &mut existing.next;
                }
                *cursor = Some(entry);
            }
        }
    }

    /// Forward iterator over `(key, value)` pairs in bucket-then-chain
    /// order (not insertion order).
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            entry: None,
        }
    }

    /// Render as a brace-delimited `key: value` listing in bucket-then-
    /// chain order: `{k1: v1, k2: v2}`. Display-only, not a stable
    /// serialization format.
    pub fn display(&self, out: &mut dyn fmt::Write) -> fmt::Result
    where
        K: Render,
        V: Render,
    {
        out.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            key.render(out)?;
            out.write_str(": ")?;
            value.render(out)?;
        }
        out.write_str("}")
    }
}

impl<K, V> ChainMap<K, V>
where
    K: KeyHash + PartialEq,
{
    /// Insert or update. An existing key keeps its entry and gets the new
    /// value; the previous value is returned. A fresh key appends a new
    /// entry at its chain tail and returns `None`.
    ///
    /// The occupancy check runs before hashing, so a triggered growth
    /// decides the bucket layout the new entry lands in.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.len * LOAD_DEN >= self.buckets.len() * LOAD_NUM {
            self.grow();
        }
        let hash = key.key_hash();
        let index = self.bucket_index(hash);
        let mut cursor = &mut self.buckets[index];
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key == key {
                return Some(mem::replace(&mut entry.value, value));
            }
            cursor = &mut entry.next;
        }
        *cursor = Some(Box::new(Entry {
            key,
            value,
            hash,
            next: None,
        }));
        self.len += 1;
        None
    }

    /// Read-only access to the value for `key`, `None` when absent. The
    /// borrowed form `Q` must hash and compare like the owned key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + PartialEq,
    {
        let hash = key.key_hash();
        let mut cursor = self.buckets[self.bucket_index(hash)].as_deref();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key.borrow() == key {
                return Some(&entry.value);
            }
            cursor = entry.next.as_deref();
        }
        None
    }

    /// Mutable access to the value for `key`, `None` when absent.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + PartialEq,
    {
        let hash = key.key_hash();
        let index = self.bucket_index(hash);
        let mut cursor = self.buckets[index].as_deref_mut();
        while let Some(entry) = cursor {
            if entry.hash == hash && entry.key.borrow() == key {
                return Some(&mut entry.value);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + PartialEq,
    {
        self.get(key).is_some()
    }

    /// Unlink and drop the single entry for `key`, returning its value.
    /// `None` when the key is absent; the map is unchanged in that case.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + KeyHash + PartialEq,
    {
        let hash = key.key_hash();
        let index = self.bucket_index(hash);
        let mut cursor = &mut self.buckets[index];
        loop {
            let matches = match cursor.as_deref() {
                None => return None,
                Some(entry) => entry.hash == hash && entry.key.borrow() == key,
            };
            if matches {
                let mut removed = cursor.take().unwrap();
                *cursor = removed.next.take();
                self.len -= 1;
                return Some(removed.value);
            }
            cursor = &mut cursor.as_mut().unwrap().next;
        }
    }
}

impl<K: Render, V: Render> Render for ChainMap<K, V> {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.display(out)
    }
}

impl<K, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ChainMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Drop for ChainMap<K, V> {
    fn drop(&mut self) {
        // Same iterative unlink as `clear`; Box's recursive drop would
        // otherwise walk pathological chains on the stack.
        self.clear();
    }
}

/// Lazy, forward-only iterator in bucket-then-chain order. Holding one
/// borrows the map, so the entries it walks cannot move under it.
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Link<K, V>>,
    entry: Option<&'a Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                return Some((&entry.key, &entry.value));
            }
            match self.buckets.next() {
                Some(slot) => self.entry = slot.as_deref(),
                None => return None,
            }
        }
    }
}

impl<'a, K, V> IntoIterator for &'a ChainMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
