use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::binary_tree::DebugNodes;
use super::{
    BinaryTree, Branch, DuplicateValue, EmptyTree, InOrder, LevelOrder, Node, NotSearchTree,
    PostOrder, PreOrder, Traversal, TraversalOrder, TreeQueryError, UnsupportedTraversal,
};

/// A binary search tree: a [`BinaryTree`] in which every value in the left subtree of a node is
/// less than the node's value and every value in its right subtree is greater.
///
/// The tree performs no rebalancing, so inserting values in sorted order produces a degenerate
/// tree with a height equal to its length minus one. Every operation apart from `Debug` formatting
/// is iterative, so this costs time but never stack space.
///
/// ```
/// use tree_walk::collections::binary_tree::{BinarySearchTree, DuplicateValue, TraversalOrder};
///
/// let mut tree = BinarySearchTree::new(8);
/// for value in [3, 10, 1, 6] {
///     tree.insert(value).unwrap();
/// }
///
/// assert_eq!(tree.insert(6), Err(DuplicateValue(6)));
/// assert!(tree.search(&10));
/// assert_eq!(tree.min_value(), Ok(&1));
/// assert_eq!(tree.render_order(TraversalOrder::LevelOrder), "8-3-10-1-6-");
/// ```
pub struct BinarySearchTree<T: Ord> {
    pub(crate) tree: BinaryTree<T>,
    pub(crate) len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates a tree holding a single root value.
    pub fn new(root: T) -> BinarySearchTree<T> {
        BinarySearchTree {
            tree: BinaryTree::new(root),
            len: 1,
        }
    }

    pub const fn empty() -> BinarySearchTree<T> {
        BinarySearchTree {
            tree: BinaryTree::empty(),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.tree.root()
    }

    /// Returns the number of links on the longest path from the root to a leaf, or [`None`] for an
    /// empty tree.
    pub fn height(&self) -> Option<usize> {
        self.tree.height()
    }

    /// Inserts a value as a new leaf, descending left past larger values and right past smaller
    /// ones. An empty tree takes the value as its root.
    ///
    /// # Errors
    /// Returns [`DuplicateValue`] holding `value` if an equal value is already present. The tree
    /// is unchanged in that case.
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValue<T>> {
        let mut branch: &mut Branch<T> = &mut self.tree.root;

        while let Some(node) = &branch.0 {
            let ordering = value.cmp(&node.value);
            // SAFETY: The loop condition has just matched branch.0 as a Some, but we need a
            // mutable reference that can outlive this iteration.
            let node = unsafe { branch.0.as_mut().unwrap_unchecked() };
            branch = match ordering {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(DuplicateValue(value)),
            };
        }

        *branch = Branch::leaf(value);
        self.len += 1;
        Ok(())
    }

    /// Returns true if a value equal to `value` is present in the tree.
    pub fn search<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut next = self.root();

        while let Some(node) = next {
            next = match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(&node.value),
            };
        }

        // Ran off the bottom of the tree on the side the value would have to be on.
        None
    }

    /// Returns the smallest value in the tree, found by following left children from the root.
    ///
    /// # Errors
    /// Returns [`EmptyTree`] if the tree has no values.
    pub fn min_value(&self) -> Result<&T, EmptyTree> {
        let mut node = self.root().ok_or(EmptyTree)?;
        while let Some(left) = node.left() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest value in the tree, found by following right children from the root.
    ///
    /// # Errors
    /// Returns [`EmptyTree`] if the tree has no values.
    pub fn max_value(&self) -> Result<&T, EmptyTree> {
        let mut node = self.root().ok_or(EmptyTree)?;
        while let Some(right) = node.right() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Returns the first value the named traversal would visit.
    ///
    /// # Errors
    /// Returns [`TreeQueryError::UnsupportedTraversal`] for an unknown name and
    /// [`TreeQueryError::EmptyTree`] if the tree has no values.
    pub fn first_in(&self, name: &str) -> Result<&T, TreeQueryError> {
        Ok(self.traverse_named(name)?.next().ok_or(EmptyTree)?)
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        self.tree.pre_order()
    }

    /// Visits the values in ascending order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        self.tree.in_order()
    }

    pub fn post_order(&self) -> PostOrder<'_, T> {
        self.tree.post_order()
    }

    pub fn level_order(&self) -> LevelOrder<'_, T> {
        self.tree.level_order()
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        self.tree.traverse(order)
    }

    /// # Errors
    /// Returns [`UnsupportedTraversal`] if `name` isn't a known traversal order.
    pub fn traverse_named(&self, name: &str) -> Result<Traversal<'_, T>, UnsupportedTraversal> {
        self.tree.traverse_named(name)
    }

    pub fn render_order(&self, order: TraversalOrder) -> String
    where
        T: Display,
    {
        self.tree.render_order(order)
    }

    /// # Errors
    /// Returns [`UnsupportedTraversal`] if `name` isn't a known traversal order.
    pub fn render(&self, name: &str) -> Result<String, UnsupportedTraversal>
    where
        T: Display,
    {
        self.tree.render(name)
    }

    pub fn iter(&self) -> InOrder<'_, T> {
        self.into_iter()
    }

    pub const fn as_tree(&self) -> &BinaryTree<T> {
        &self.tree
    }

    pub fn into_tree(self) -> BinaryTree<T> {
        self.tree
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Ord> TryFrom<BinaryTree<T>> for BinarySearchTree<T> {
    type Error = NotSearchTree<T>;

    fn try_from(tree: BinaryTree<T>) -> Result<Self, Self::Error> {
        if !tree.is_search_tree() {
            return Err(NotSearchTree(tree));
        }
        let len = tree.len();
        Ok(BinarySearchTree { tree, len })
    }
}

impl<T: Ord> From<BinarySearchTree<T>> for BinaryTree<T> {
    fn from(value: BinarySearchTree<T>) -> Self {
        value.into_tree()
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    /// Inserts every value, skipping those already present.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            let _ = self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::empty();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// Draws the tree sideways, see [`Node`](super::Node)'s `Debug` implementation.
///
/// # Panics
/// The drawing recurses once per level and copies every line at each level, so formatting a
/// tree thousands of levels deep, such as one built from sorted values, can overflow the stack.
impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("nodes", &DebugNodes(&self.tree.root))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
