//! chained-symtable: a single-threaded, string-keyed symbol table using
//! separate chaining with staged bucket-count growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative container whose collision and growth
//!   behavior is explicit and observable, rather than delegated to a
//!   general-purpose hash table.
//! - Layers:
//!   - capacity: the fixed ascending prime sequence of bucket counts
//!     {509, 1021, 2039, 4093, 8191, 16381, 32749, 65521} and the
//!     occupancy threshold (bucket count minus one) that advances it.
//!   - hash: the fixed multiplicative string hash
//!     (`h = h * 65599 + byte`, reduced modulo the bucket count).
//!   - SymTable<V>: the public container. Buckets hold chain heads;
//!     chain nodes live in a slotmap arena and link to each other by
//!     generational key, so unlink logic cannot dangle.
//!
//! Constraints
//! - Single-threaded, synchronous: every operation completes before
//!   returning, no interior mutability.
//! - Keys are copied once at the boundary and owned by the table;
//!   callers keep their original buffer. Values are owned while stored
//!   and handed back by value on `remove`/`replace`.
//! - Duplicate inserts fail and return the value to the caller.
//! - Bucket count only grows, one stage at a time, and caps at the last
//!   stage; chains grow unbounded past the cap instead of failing.
//! - Growth relinks existing nodes under the new bucket count; it never
//!   re-allocates a node or re-copies a key, and it runs before the
//!   triggering insert so that insert hashes under the new count.
//!
//! Why a fixed hash?
//! - Lookup and removal must recompute the exact bucket index used at
//!   insertion time, so the hash is part of the contract and the table
//!   is deliberately not generic over `BuildHasher`.
//!
//! Enumeration
//! - Bucket-index order, most-recently-inserted-first within a bucket;
//!   not stable across growth. The borrow checker rules out key-set
//!   mutation mid-walk: `iter`/`for_each` hold a shared borrow and
//!   `for_each_mut` holds the only exclusive one.
//!
//! Notes and non-goals
//! - Not thread-safe for concurrent mutation; callers serialize
//!   externally.
//! - No persistence, no ordering guarantees beyond the enumeration
//!   order above, no `clear()`.

mod capacity;
mod hash;
mod sym_table;
mod sym_table_proptest;

// Public surface
pub use sym_table::{InsertError, Iter, SymTable};
