//! A growable contiguous container that separates raw storage ownership from element
//! lifecycle, with explicit panic-safety guarantees on every mutation.
//!
//! This crate provides [`ElasticVec`], a dynamic array built on a raw storage layer that
//! owns uninitialized memory without ever constructing or destroying elements. The vector
//! layers the element lifecycle on top: it tracks how many leading slots hold live values,
//! constructs new values in place, and commits every reallocation through an infallible
//! storage swap so that a failure partway through growth can never corrupt or leak the
//! existing contents.
//!
//! # Key Features
//!
//! - **Strict layering**: raw capacity ownership below, element lifecycle above
//! - **Allocate-relocate-swap growth**: the replacement storage is fully built before the
//!   original is released
//! - **Exact doubling policy**: capacity doubles when exhausted, starting from one slot
//! - **In-place construction**: [`push_with()`][ElasticVec::push_with] and
//!   [`insert_with()`][ElasticVec::insert_with] build the element directly in its final
//!   slot
//! - **Panic-safe batch construction**: a failed element constructor destroys exactly the
//!   already-constructed prefix and leaves lengths unchanged
//! - **Slice access**: the live range is an ordinary Rust slice for reading, mutation and
//!   iteration
//!
//! # Example
//!
//! ```rust
//! use elastic_vec::ElasticVec;
//!
//! let mut vec = ElasticVec::new();
//!
//! // Capacity doubles as the vector grows: 1, 2, 4, ...
//! vec.push(1);
//! vec.push(2);
//! vec.push(3);
//! assert_eq!(vec.capacity(), 4);
//!
//! // Inserting and removing at a position are exact inverses.
//! vec.insert(1, 99);
//! assert_eq!(vec.as_slice(), &[1, 99, 2, 3]);
//! assert_eq!(vec.remove(1), 99);
//! assert_eq!(vec.as_slice(), &[1, 2, 3]);
//! ```
//!
//! # In-place construction
//!
//! ```rust
//! use elastic_vec::ElasticVec;
//!
//! let mut vec = ElasticVec::new();
//!
//! // The closure runs once and its result is written straight into the final slot,
//! // even when the vector has to grow first.
//! vec.push_with(|| "expensive".repeat(3));
//!
//! assert_eq!(vec[0], "expensiveexpensiveexpensive");
//! ```

mod elastic_vec;
mod raw_storage;

pub use elastic_vec::ElasticVec;
pub(crate) use raw_storage::*;
