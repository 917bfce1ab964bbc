use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

use super::BinaryTree;

/// Returned by [`BinarySearchTree::insert`](super::BinarySearchTree::insert) when the value is
/// already present in the tree. The rejected value is handed back and the tree is unchanged.
#[derive(Debug, PartialEq, Eq)]
pub struct DuplicateValue<T>(pub T);

impl<T> DuplicateValue<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Display for DuplicateValue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "value is already present in tree")
    }
}

impl<T: Debug> Error for DuplicateValue<T> {}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("tree contains no values")]
pub struct EmptyTree;

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("traversal type {name:?} is not supported")]
pub struct UnsupportedTraversal {
    pub name: String,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("child position is already occupied")]
pub struct OccupiedChild;

/// Returned when converting a [`BinaryTree`] whose shape violates the search tree property. The
/// rejected tree is handed back.
pub struct NotSearchTree<T>(pub BinaryTree<T>);

impl<T> NotSearchTree<T> {
    pub fn into_inner(self) -> BinaryTree<T> {
        self.0
    }
}

impl<T: Debug> Debug for NotSearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotSearchTree").field(&self.0).finish()
    }
}

impl<T> Display for NotSearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "tree does not satisfy the binary search tree property")
    }
}

impl<T: Debug> Error for NotSearchTree<T> {}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error, IsVariant)]
pub enum TreeQueryError {
    EmptyTree(EmptyTree),
    UnsupportedTraversal(UnsupportedTraversal),
}
