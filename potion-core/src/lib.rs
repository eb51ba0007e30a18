//! Potion Station - in-memory ordered potion inventory
//!
//! Potion Station keeps a set of potion records ordered by a numeric key
//! chosen by the caller (total stats, strength, speed, health, or any custom
//! projection). Records are stored in a red-black tree, so insertion stays
//! logarithmic no matter what order records arrive in.
//!
//! # Features
//!
//! - Balanced insertion with duplicate keys kept in arrival order
//! - Lookup and removal by name, independent of the sort key
//! - Ascending or descending enumeration
//! - Rebuild into a new store when the sort key changes
//!
//! # Example
//!
//! ```
//! use potion_core::{Order, OrderedStore, Potion, SortKey};
//!
//! let mut store = OrderedStore::with_sort_key(SortKey::Total);
//! store.insert(Potion::new("A", 5, 3, 2));
//! store.insert(Potion::new("B", 10, 10, 10));
//! store.insert(Potion::new("C", 10, 5, 5));
//!
//! let names: Vec<&str> = store.ordered(Order::Descending).into_iter().map(|p| p.name.as_str()).collect();
//! assert_eq!(names, ["B", "C", "A"]);
//!
//! assert!(store.search("C").is_some());
//! store.remove("C");
//! assert!(store.search("C").is_none());
//! ```
//!
//! # Design Philosophy
//!
//! The store is single-threaded and purely in memory. It does not persist,
//! share, or validate records; prompting and input validation belong to the
//! application layer (see the `potion-cli` crate).

mod potion;
mod sort_key;
mod store;

#[cfg(feature = "internals")]
pub mod rbtree;
#[cfg(not(feature = "internals"))]
pub(crate) mod rbtree;

pub use potion::Potion;
pub use rbtree::Iter;
pub use sort_key::SortKey;
pub use store::{Order, OrderedStore, StoreOptions};
