//! seqmap: generic, single-threaded containers (a growable [`Sequence`]
//! and a bucketed, chained [`ChainMap`]) with the per-type hash, equality,
//! and display behavior supplied through small capability traits.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one generic implementation per container, parameterized over the
//!   element/key/value types, instead of per-type code generation.
//! - Components:
//!   - Sequence<T>: contiguous, index-addressable storage with doubling
//!     growth (default initial capacity 10). Leaf component, no dependency
//!     on the map.
//!   - ChainMap<K, V>: power-of-two bucket array of singly-linked entry
//!     chains, cached per-entry hashes, 0.75 load-factor doubling with
//!     order-preserving relink. Values are unconstrained; a value may be a
//!     Sequence, which nests ownership.
//!   - Behavior strategy: KeyHash (type-directed default hashing; bit
//!     pattern for narrow scalars, XOR-folded halves for wide ones,
//!     31-multiplier polynomial for strings), PartialEq for equality, and
//!     Render for display. Structured types implement the traits
//!     themselves; that is the custom-behavior seam.
//!
//! Constraints
//! - Single-threaded, synchronous: every operation runs to completion; no
//!   internal locking or atomics, exclusive-owner access per instance.
//! - Ownership is encoded in the types: containers own their elements and
//!   values, so dropping an outer container drops nested containers too.
//!   There is no manual shallow-release discipline.
//! - Caller errors (out-of-range index, absent key or element) are
//!   recoverable `Option`/`bool` results that never disturb container
//!   state. An invalid explicit map capacity is a typed construction
//!   error, checked before any allocation.
//! - Iterators borrow their container, so iteration during mutation is a
//!   compile error rather than undefined behavior.
//!
//! Notes and non-goals
//! - Display output (`[e1, e2]` for sequences, `{k: v}` for maps in
//!   bucket-then-chain order) is terminal text, not a serialization
//!   format.
//! - No thread-safety layer; wrap externally if shared access is needed.
//! - Allocation failure follows the global allocator's abort policy; no
//!   fallible-allocation API.

pub mod chain_map;
mod chain_map_proptest;
pub mod key_hash;
pub mod render;
pub mod sequence;

// Public surface
pub use chain_map::{CapacityError, ChainMap};
pub use key_hash::KeyHash;
pub use render::{Render, Rendered};
pub use sequence::Sequence;
