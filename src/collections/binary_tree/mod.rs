//! A module containing [`BinarySearchTree`], the plain [`BinaryTree`] it is built on and the
//! traversals shared by both.
//!
//! A [`BinaryTree`] can take any shape, with nodes attached by hand. A [`BinarySearchTree`] only
//! grows through [`insert`](BinarySearchTree::insert), which keeps its values ordered. Both can
//! be walked in pre-order, in-order, post-order or level-order, selected statically through the
//! dedicated iterators or at runtime through [`TraversalOrder`], which can also be parsed from a
//! name such as `"levelorder"`.

mod binary_tree;
mod error;
mod node;
mod search_tree;
mod traversal;
mod tests;

pub use binary_tree::*;
pub use error::*;
pub(crate) use node::Branch;
pub use node::Node;
pub use search_tree::*;
pub use traversal::*;
