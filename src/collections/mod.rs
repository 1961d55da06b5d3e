//! The containers.
//!
//! Organized by structure:
//! - `ring`: the double-ended ring-buffer vector and its iterators
//! - `list`: a doubly linked list over a slot arena
//! - `matrix`: a dense fixed-dimension matrix
//! - `trie`: a binary trie keyed by bit sequences

pub mod list;
pub mod matrix;
pub mod ring;
pub mod trie;

pub use list::{LinkedList, NodeId};
pub use matrix::{Matrix, ShapeError};
pub use ring::RingVec;
pub use trie::BitTrie;
