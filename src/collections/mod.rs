//! Collection types.
//!
//! # Purpose
//! These types exist to learn about the data structures themselves as well as concepts such as
//! ownership of recursive structures, iterators and typed errors.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
