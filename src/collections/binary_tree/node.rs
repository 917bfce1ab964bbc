use std::fmt::{self, Debug, Formatter};

use super::OccupiedChild;

/// A possibly empty, exclusively owned slot for a subtree. Both the root of a tree and the
/// children of every [`Node`] are stored as a `Branch`.
pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

/// A single element of a binary tree, holding a value and up to two child subtrees.
///
/// Nodes have no reference to their parent, so the only path to a node is the one from the root
/// of the tree that owns it.
pub struct Node<T> {
    pub(crate) left: Branch<T>,
    pub(crate) right: Branch<T>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    /// Creates a new leaf node.
    pub const fn new(value: T) -> Node<T> {
        Node {
            left: Branch(None),
            right: Branch(None),
            value,
        }
    }

    pub const fn value(&self) -> &T {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.node()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.node()
    }

    /// Returns true if this node has no children.
    pub const fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    /// Attaches a new leaf holding `value` as the left child of this node, returning a mutable
    /// reference to it so that building can continue from there.
    ///
    /// # Errors
    /// Returns [`OccupiedChild`] if this node already has a left child, in which case the node is
    /// left untouched.
    pub fn attach_left(&mut self, value: T) -> Result<&mut Node<T>, OccupiedChild> {
        self.left.attach(value)
    }

    /// Attaches a new leaf holding `value` as the right child of this node. See
    /// [`Node::attach_left`].
    ///
    /// # Errors
    /// Returns [`OccupiedChild`] if this node already has a right child.
    pub fn attach_right(&mut self, value: T) -> Result<&mut Node<T>, OccupiedChild> {
        self.right.attach(value)
    }

    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.node_mut()
    }

    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.node_mut()
    }
}

impl<T> Branch<T> {
    pub const fn empty() -> Branch<T> {
        Branch(None)
    }

    pub fn leaf(value: T) -> Branch<T> {
        Branch(Some(Box::new(Node::new(value))))
    }

    pub fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    pub fn node_mut(&mut self) -> Option<&mut Node<T>> {
        self.0.as_deref_mut()
    }

    pub fn attach(&mut self, value: T) -> Result<&mut Node<T>, OccupiedChild> {
        if self.0.is_some() {
            return Err(OccupiedChild);
        }
        Ok(&mut **self.0.insert(Box::new(Node::new(value))))
    }
}

impl<T: Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(f, "{:?}", node),
            None => write!(f, "-"),
        }
    }
}

/// Draws the subtree sideways: the left subtree above the value, the right one below.
///
/// # Panics
/// Recurses once per level of the subtree, so a subtree thousands of levels deep can overflow
/// the stack. The cost is also quadratic in the height, since each level re-indents every line
/// below it.
impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n({:?})\n{}",
            format!("{:?}", self.left)
                .lines()
                .map(|l| String::from("┌    ") + l)
                .collect::<Vec<_>>()
                .join("\n"),
            self.value,
            format!("{:?}", self.right)
                .lines()
                .map(|l| String::from("└    ") + l)
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}
