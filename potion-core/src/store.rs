//! Ordered potion store: the public facade over the red-black tree.
//!
//! Records are ordered by a [`SortKey`] or any pure integer projection, and
//! changing the key rebuilds the store from its own records.

use crate::rbtree::{Iter, RedBlackTree};
use crate::{Potion, SortKey};
use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, Write};

/// Enumeration direction for [`OrderedStore::ordered`] and friends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first (the reverse of the ascending sequence)
    Descending,
}

/// Configuration options for [`OrderedStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Key the store is ordered by
    pub sort_key: SortKey,

    /// Number of records to preallocate room for
    pub capacity: usize,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self { sort_key: SortKey::Total, capacity: 0 }
    }
}

/// In-memory potion inventory ordered by a fixed key projection.
///
/// Records are looked up and removed by name; they are enumerated by key.
/// Names are not required to be unique. With duplicate names, `search`
/// returns the first match in pre-order while `remove` drops the first match
/// in ascending key order, so the two may pick different records.
pub struct OrderedStore {
    /// Balanced tree holding the records
    tree: RedBlackTree<Potion>,

    /// Catalogue key, when built from one
    sort_key: Option<SortKey>,
}

impl OrderedStore {
    /// Create an empty store ordered by an arbitrary projection.
    ///
    /// The projection must be pure. It cannot be changed afterwards; use
    /// [`rekeyed`](Self::rekeyed) to rebuild under a different one.
    pub fn new(projection: impl Fn(&Potion) -> i64 + 'static) -> Self {
        Self { tree: RedBlackTree::new(projection), sort_key: None }
    }

    /// Create an empty store ordered by a catalogue key
    #[must_use]
    pub fn with_sort_key(sort_key: SortKey) -> Self {
        Self::with_options(StoreOptions { sort_key, ..StoreOptions::default() })
    }

    /// Create an empty store from options
    #[must_use]
    pub fn with_options(options: StoreOptions) -> Self {
        let sort_key = options.sort_key;
        Self {
            tree: RedBlackTree::with_capacity(move |p: &Potion| sort_key.key(p), options.capacity),
            sort_key: Some(sort_key),
        }
    }

    /// Catalogue key this store is ordered by, `None` for a custom projection
    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    /// Insert a copy of a record. Equal keys are kept, never merged.
    pub fn insert(&mut self, potion: Potion) {
        self.tree.insert(potion);
    }

    /// Find a record by exact name.
    ///
    /// Returns `None` when no record has that name. The returned borrow keeps
    /// the store immutable while it is alive:
    ///
    /// ```compile_fail
    /// use potion_core::{OrderedStore, Potion};
    ///
    /// let mut store = OrderedStore::default();
    /// store.insert(Potion::new("Tonic", 1, 2, 3));
    ///
    /// let found = store.search("Tonic");
    /// store.insert(Potion::new("Other", 1, 1, 1));
    /// println!("{found:?}");
    /// ```
    pub fn search(&self, name: &str) -> Option<&Potion> {
        self.tree.find(|p| p.name == name)
    }

    /// Remove one record by exact name, returning it.
    ///
    /// When several records share the name, the one with the smallest key is
    /// removed. Returns `None` and leaves the store unchanged when nothing
    /// matches. Costs O(n): the tree is rebuilt from the remaining records,
    /// so no borrow into the store may outlive the call:
    ///
    /// ```compile_fail
    /// use potion_core::{Order, OrderedStore, Potion};
    ///
    /// let mut store = OrderedStore::default();
    /// store.insert(Potion::new("Tonic", 1, 2, 3));
    ///
    /// let listing = store.ordered(Order::Ascending);
    /// store.remove("Tonic");
    /// println!("{}", listing.len());
    /// ```
    pub fn remove(&mut self, name: &str) -> Option<Potion> {
        if self.tree.is_empty() {
            return None;
        }
        let removed = self.tree.remove_first(|p| p.name == name);
        if removed.is_none() {
            log::debug!("remove: no record named {name:?}");
        }
        removed
    }

    /// Records in the requested key order
    pub fn ordered(&self, order: Order) -> Vec<&Potion> {
        let mut records: Vec<&Potion> = self.tree.iter().collect();
        if order == Order::Descending {
            records.reverse();
        }
        records
    }

    /// Print every record to stdout, one per line, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns an error if stdout cannot be written.
    pub fn inorder(&self, order: Order) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_inorder(&mut out, order)?;
        out.flush().context("Failed to flush stdout")
    }

    /// Write every record to `out`, one per line, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns an error if a write fails.
    pub fn write_inorder<W: Write>(&self, out: &mut W, order: Order) -> Result<()> {
        for potion in self.ordered(order) {
            writeln!(out, "{potion}").with_context(|| format!("Failed to write record {}", potion.name))?;
        }
        Ok(())
    }

    /// Remove every record. Clearing an empty store is a no-op.
    pub fn clear(&mut self) {
        if !self.tree.is_empty() {
            log::debug!("clearing {} records", self.tree.len());
        }
        self.tree.clear();
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Iterate records in ascending key order
    pub fn iter(&self) -> Iter<'_, Potion> {
        self.tree.iter()
    }

    /// Consume the store, returning its records in ascending key order
    pub fn into_records(self) -> Vec<Potion> {
        self.tree.into_vec()
    }

    /// Rebuild every record into a new store ordered by `projection`
    #[must_use]
    pub fn rekeyed(self, projection: impl Fn(&Potion) -> i64 + 'static) -> Self {
        let mut store = Self::new(projection);
        store.extend_from(self);
        store
    }

    /// Rebuild every record into a new store ordered by a catalogue key
    #[must_use]
    pub fn resort(self, sort_key: SortKey) -> Self {
        let mut store = Self::with_options(StoreOptions { sort_key, capacity: self.len() });
        store.extend_from(self);
        store
    }

    fn extend_from(&mut self, other: Self) {
        let records = other.into_records();
        log::debug!("rebuilding {} records under sort key {:?}", records.len(), self.sort_key);
        self.extend(records);
    }

    /// Check the underlying tree's invariants, returning its black height.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first violated invariant.
    pub fn validate(&self) -> Result<usize> {
        self.tree.validate().context("Ordered store invariants violated")
    }
}

impl Default for OrderedStore {
    fn default() -> Self {
        Self::with_options(StoreOptions::default())
    }
}

impl fmt::Debug for OrderedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedStore")
            .field("sort_key", &self.sort_key)
            .field("tree", &self.tree)
            .finish()
    }
}

impl Extend<Potion> for OrderedStore {
    fn extend<I: IntoIterator<Item = Potion>>(&mut self, iter: I) {
        for potion in iter {
            self.insert(potion);
        }
    }
}

impl<'a> IntoIterator for &'a OrderedStore {
    type Item = &'a Potion;
    type IntoIter = Iter<'a, Potion>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
