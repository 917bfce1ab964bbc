//! This crate is a small study of binary trees: a plain [`BinaryTree`] that can be built into any
//! shape, a [`BinarySearchTree`] that keeps its values ordered, and the four classic ways of
//! walking them.
//!
//! # Purpose
//! This is a learning project, written to understand and appreciate the data structure properly
//! rather than to be used in production. It still aims to be written to a level where it could
//! be.
//!
//! # Method
//! Nodes exclusively own their children (`Option<Box<Node<T>>>`), so the tree can't contain
//! cycles or shared nodes. Since the search tree performs no rebalancing, inserting sorted values
//! produces a tree as deep as it is long. Because of that, every operation except formatting is
//! iterative: traversals keep an explicit stack or queue and dropping a tree tears it down node by
//! node.
//!
//! # Error Handling
//! Conditions that a caller can cause, like inserting a value twice or asking for the minimum of
//! an empty tree, are reported through [`Result`]s with strongly typed errors. Each error is its
//! own struct implementing [`Error`](std::error::Error), and functions that can fail in more than
//! one way return an enum of them for static dispatch. Nothing in the library prints or panics.
//!
//! # Dependencies
//! This crate depends on `derive_more` for its derive macros, because they remove the need for
//! some very repetitive programming.
//!
//! [`BinaryTree`]: collections::binary_tree::BinaryTree
//! [`BinarySearchTree`]: collections::binary_tree::BinarySearchTree

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
