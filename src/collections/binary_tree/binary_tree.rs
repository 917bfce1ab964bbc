use std::fmt::{self, Debug, Display, Formatter};

use super::{
    Branch, InOrder, LevelOrder, Node, OccupiedChild, PostOrder, PreOrder, Traversal, TraversalOrder,
    UnsupportedTraversal,
};

/// A binary tree with no ordering constraint on its values, built by attaching nodes by hand.
///
/// ```
/// use tree_walk::collections::binary_tree::{BinaryTree, TraversalOrder};
///
/// let mut tree = BinaryTree::new(1);
/// let root = tree.root_mut().unwrap();
/// let left = root.attach_left(2).unwrap();
/// left.attach_left(4).unwrap();
/// left.attach_right(5).unwrap();
/// root.attach_right(3).unwrap();
///
/// assert_eq!(tree.render_order(TraversalOrder::PreOrder), "1-2-4-5-3-");
/// ```
///
/// For a tree that keeps its values ordered, see
/// [`BinarySearchTree`](super::BinarySearchTree).
pub struct BinaryTree<T> {
    pub(crate) root: Branch<T>,
}

impl<T> BinaryTree<T> {
    /// Creates a tree holding a single root node.
    pub fn new(root: T) -> BinaryTree<T> {
        BinaryTree {
            root: Branch::leaf(root),
        }
    }

    pub const fn empty() -> BinaryTree<T> {
        BinaryTree {
            root: Branch::empty(),
        }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.node_mut()
    }

    /// Sets the root of an empty tree, returning a mutable reference to the new node.
    ///
    /// # Errors
    /// Returns [`OccupiedChild`] if the tree already has a root.
    pub fn attach_root(&mut self, value: T) -> Result<&mut Node<T>, OccupiedChild> {
        self.root.attach(value)
    }

    pub const fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Counts the nodes in the tree. Nodes can be attached without going through the tree, so
    /// this walks every node.
    pub fn len(&self) -> usize {
        self.pre_order().count()
    }

    /// Returns the number of links on the longest path from the root to a leaf, or [`None`] for an
    /// empty tree.
    pub fn height(&self) -> Option<usize> {
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 0)).into_iter().collect();
        let mut height = None;

        while let Some((node, depth)) = stack.pop() {
            height = height.max(Some(depth));
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(&self.root)
    }

    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root)
    }

    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(&self.root)
    }

    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.root)
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traversal<'_, T> {
        Traversal::new(&self.root, order)
    }

    /// Like [`BinaryTree::traverse`], but with the order given by name, as parsed by
    /// [`TraversalOrder`]'s `FromStr` implementation.
    ///
    /// # Errors
    /// Returns [`UnsupportedTraversal`] if `name` isn't a known traversal order.
    pub fn traverse_named(&self, name: &str) -> Result<Traversal<'_, T>, UnsupportedTraversal> {
        Ok(self.traverse(name.parse()?))
    }

    /// Renders the values in the given order, each followed by a `-`.
    pub fn render_order(&self, order: TraversalOrder) -> String
    where
        T: Display,
    {
        self.traverse(order).render()
    }

    /// Renders the values in the named order, each followed by a `-`.
    ///
    /// # Errors
    /// Returns [`UnsupportedTraversal`] if `name` isn't a known traversal order.
    pub fn render(&self, name: &str) -> Result<String, UnsupportedTraversal>
    where
        T: Display,
    {
        Ok(self.traverse_named(name)?.render())
    }

    /// Checks the whole tree for the search tree property: every value in a node's left subtree
    /// is strictly less than the node's value and every value in its right subtree is strictly
    /// greater.
    pub fn is_search_tree(&self) -> bool
    where
        T: Ord,
    {
        // Each entry carries the exclusive bounds inherited from its ancestors.
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> =
            self.root().map(|n| (n, None, None)).into_iter().collect();

        while let Some((node, lower, upper)) = stack.pop() {
            let value = &node.value;
            if lower.is_some_and(|l| value <= l) || upper.is_some_and(|u| value >= u) {
                return false;
            }
            stack.extend(node.left().map(|n| (n, lower, Some(value))));
            stack.extend(node.right().map(|n| (n, Some(value), upper)));
        }

        true
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        // Dropping boxed nodes recursively would use one stack frame per level.
        let mut stack: Vec<Box<Node<T>>> = self.root.0.take().into_iter().collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

/// Draws the tree sideways, see [`Node`]'s `Debug` implementation.
///
/// # Panics
/// The drawing recurses once per level and copies every line at each level, so formatting a
/// tree thousands of levels deep, such as one built from sorted values, can overflow the stack.
impl<T: Debug> Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryTree")
            .field("nodes", &DebugNodes(&self.root))
            .finish()
    }
}

/// Prints the sideways tree drawing on its own lines, inside a debug struct.
pub(crate) struct DebugNodes<'a, T>(pub &'a Branch<T>);

impl<'a, T: Debug> Debug for DebugNodes<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "\n{:?}\n", self.0)
    }
}
