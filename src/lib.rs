//! # `gyre` — ring-buffer containers over pluggable raw storage
//!
//! The centerpiece is [`RingVec`]: a double-ended, random-access vector
//! implemented as a circular buffer over a single allocated block. It offers
//! amortized O(1) insertion and removal at both ends, O(1) indexing, and a
//! compact memory footprint — the interface of a deque without its segmented
//! storage.
//!
//! ## Design
//!
//! - **Two layers.** A storage engine owns the raw block and the cyclic
//!   cursor arithmetic over partially initialized memory; the public handle
//!   is a thin value-semantic wrapper that turns empty-container access into
//!   [`None`] and delegates the rest.
//! - **One sentinel slot.** The block always holds one slot more than the
//!   reported capacity, so the begin/end cursors plus an explicit length
//!   never conflate "empty" with "full".
//! - **Pluggable allocation.** Storage is obtained through the
//!   [`BlockAlloc`] strategy trait with a symmetric allocate/deallocate
//!   contract; failures surface as [`AllocError`] values, and the `try_`
//!   operation variants propagate them with the container left untouched.
//! - **Single-threaded by contract.** None of the containers synchronize;
//!   sharing one across threads requires external synchronization, exactly
//!   as with the standard library's cell types.
//!
//! Alongside the core live three companion structures: [`LinkedList`] (a
//! doubly linked list over a slot arena), [`Matrix`] (a dense fixed-dimension
//! matrix with scalar and matrix products), and [`BitTrie`] (a binary trie
//! keyed by bit sequences, with merge-based union and intersection).
//!
//! ## Example
//!
//! ```rust
//! use gyre::ring_vec;
//!
//! let mut window = ring_vec![3, 4, 5];
//! window.push_front(2);
//! window.push_back(6);
//!
//! assert_eq!(window.len(), 5);
//! assert_eq!(window[0], 2);
//! assert_eq!(window.iter().sum::<i32>(), 20);
//!
//! window.pop_front();
//! window.pop_back();
//! assert_eq!(window, [3, 4, 5]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod collections;

pub use alloc::{AllocError, BlockAlloc, Heap};
pub use collections::ring::{IntoIter, Iter, IterMut};
pub use collections::{BitTrie, LinkedList, Matrix, NodeId, RingVec, ShapeError};

// Compile-time layout checks: the handle stays a flat five-word value (block
// pointer, capacity, two cursors, length) with no overhead for the default
// strategy, and the ZST strategies stay invisible.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<Heap>() == 0);
    assert!(mem::size_of::<RingVec<u64>>() == mem::size_of::<usize>() * 5);
    assert!(mem::size_of::<RingVec<u64>>() == mem::size_of::<RingVec<String>>());
};
