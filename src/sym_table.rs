//! SymTable: string-keyed separate-chaining table with staged bucket growth.

use crate::capacity;
use crate::hash;
use slotmap::{DefaultKey, SlotMap};

/// One key/value association. Chains are threaded through the node arena
/// by `DefaultKey` links instead of raw pointers, so unlinking a binding
/// can never dangle.
#[derive(Debug)]
struct Binding<V> {
    key: Box<str>,
    value: V,
    next: Option<DefaultKey>,
}

/// A mutable string-keyed symbol table.
///
/// Keys are copied at the boundary (`&str` in, owned copy stored) and are
/// unique table-wide. Values are owned while stored and handed back by
/// value on [`remove`](SymTable::remove) and [`replace`](SymTable::replace).
/// Buckets step through a fixed prime sequence as bindings accumulate;
/// the bucket count never shrinks.
pub struct SymTable<V> {
    buckets: Vec<Option<DefaultKey>>, // chain heads, most-recent-first
    nodes: SlotMap<DefaultKey, Binding<V>>,
}

/// Rejected insert. Carries the value back so the caller keeps ownership.
#[derive(Debug)]
pub enum InsertError<V> {
    DuplicateKey(V),
}

impl<V> SymTable<V> {
    /// Create an empty table at the first bucket-count stage.
    pub fn new() -> Self {
        Self {
            buckets: vec![None; capacity::INITIAL_BUCKET_COUNT],
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of bindings, from a maintained counter.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current bucket count; one of the staged primes, starting at 509.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Walk the chain at `key`'s bucket and return its node, if bound.
    fn find_node(&self, key: &str) -> Option<DefaultKey> {
        let idx = hash::bucket_index(key, self.buckets.len());
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            let binding = &self.nodes[k];
            if &*binding.key == key {
                return Some(k);
            }
            cur = binding.next;
        }
        None
    }

    /// Insert a new binding for `key`.
    ///
    /// If `key` is already bound the table is left unchanged and the value
    /// comes back in [`InsertError::DuplicateKey`]. Growth, when due, runs
    /// before the binding is linked so the new binding hashes under the
    /// new bucket count.
    pub fn put(&mut self, key: &str, value: V) -> Result<(), InsertError<V>> {
        if self.find_node(key).is_some() {
            return Err(InsertError::DuplicateKey(value));
        }

        if self.nodes.len() + 1 >= capacity::growth_threshold(self.buckets.len()) {
            self.grow();
        }

        let idx = hash::bucket_index(key, self.buckets.len());
        let k = self.nodes.insert(Binding {
            key: key.into(),
            value,
            next: self.buckets[idx],
        });
        self.buckets[idx] = Some(k);
        Ok(())
    }

    /// Overwrite the value bound to `key`, returning the previous value.
    ///
    /// On an absent key nothing changes and the unconsumed value comes
    /// back as `Err(value)`.
    pub fn replace(&mut self, key: &str, value: V) -> Result<V, V> {
        match self.find_node(key) {
            Some(k) => Ok(core::mem::replace(&mut self.nodes[k].value, value)),
            None => Err(value),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_node(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.find_node(key).map(|k| &self.nodes[k].value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let k = self.find_node(key)?;
        Some(&mut self.nodes[k].value)
    }

    /// Unlink and return the value bound to `key`, or `None` if absent.
    /// Handles head and interior nodes; the owned key copy is released
    /// with the node.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = hash::bucket_index(key, self.buckets.len());
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[idx];
        while let Some(k) = cur {
            if &*self.nodes[k].key == key {
                let binding = self.nodes.remove(k).unwrap();
                match prev {
                    None => self.buckets[idx] = binding.next,
                    Some(p) => self.nodes[p].next = binding.next,
                }
                return Some(binding.value);
            }
            prev = Some(k);
            cur = self.nodes[k].next;
        }
        None
    }

    /// Iterate bindings in bucket-index order, most-recently-inserted
    /// first within a bucket. Order is not stable across growth.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: &self.buckets,
            nodes: &self.nodes,
            bucket: 0,
            cur: None,
        }
    }

    /// Apply `apply` to every binding exactly once, threading `extra`
    /// through each call. Same order as [`iter`](SymTable::iter).
    pub fn for_each<T, F>(&self, extra: &mut T, mut apply: F)
    where
        F: FnMut(&str, &V, &mut T),
    {
        for (key, value) in self.iter() {
            apply(key, value, extra);
        }
    }

    /// Like [`for_each`](SymTable::for_each) but with mutable access to
    /// each value. The key set cannot change mid-walk: this method holds
    /// the only exclusive borrow.
    pub fn for_each_mut<T, F>(&mut self, extra: &mut T, mut apply: F)
    where
        F: FnMut(&str, &mut V, &mut T),
    {
        for bucket in 0..self.buckets.len() {
            let mut cur = self.buckets[bucket];
            while let Some(k) = cur {
                let binding = &mut self.nodes[k];
                cur = binding.next;
                apply(&*binding.key, &mut binding.value, extra);
            }
        }
    }

    /// Advance to the next bucket-count stage and re-thread every binding
    /// into its new chain. Nodes are moved by relinking, never
    /// re-allocated; keys are never re-copied. No-op at the final stage.
    fn grow(&mut self) {
        let Some(next_count) = capacity::next_bucket_count(self.buckets.len()) else {
            return;
        };
        let old_heads = core::mem::replace(&mut self.buckets, vec![None; next_count]);
        for mut cur in old_heads {
            while let Some(k) = cur {
                cur = self.nodes[k].next.take();
                let idx = hash::bucket_index(&self.nodes[k].key, next_count);
                self.nodes[k].next = self.buckets[idx].replace(k);
            }
        }
    }
}

impl<V> Default for SymTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: core::fmt::Debug> core::fmt::Debug for SymTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over bindings in bucket-index order.
pub struct Iter<'a, V> {
    buckets: &'a [Option<DefaultKey>],
    nodes: &'a SlotMap<DefaultKey, Binding<V>>,
    bucket: usize,
    cur: Option<DefaultKey>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cur {
                let binding = &self.nodes[k];
                self.cur = binding.next;
                return Some((&*binding.key, &binding.value));
            }
            if self.bucket == self.buckets.len() {
                return None;
            }
            self.cur = self.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}

impl<'a, V> IntoIterator for &'a SymTable<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
