//! The traversal engine shared by [`BinaryTree`](super::BinaryTree) and
//! [`BinarySearchTree`](super::BinarySearchTree).
//!
//! Every traversal borrows the tree and yields references to its values. None of them recurse:
//! the depth-first orders keep an explicit stack and level order keeps a FIFO queue, so even a
//! degenerate tree (one shaped like a linked list) can be walked without exhausting the call
//! stack. Creating a traversal again starts over from the root.

use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;
use std::str::FromStr;

use derive_more::IsVariant;

use super::{Branch, Node, UnsupportedTraversal};

/// The order in which a traversal visits the nodes of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree. The root comes first.
    PreOrder,
    /// Left subtree, then node, then right subtree. Ascending for a search tree.
    InOrder,
    /// Left subtree, then right subtree, then node. The root comes last.
    PostOrder,
    /// Breadth first, by increasing depth and left to right within a level.
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::PreOrder,
        TraversalOrder::InOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TraversalOrder::PreOrder => "preorder",
            TraversalOrder::InOrder => "inorder",
            TraversalOrder::PostOrder => "postorder",
            TraversalOrder::LevelOrder => "levelorder",
        }
    }
}

impl Display for TraversalOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TraversalOrder {
    type Err = UnsupportedTraversal;

    /// Accepts the plain names (`"preorder"`, `"inorder"`, `"postorder"`, `"levelorder"`) ignoring
    /// ASCII case and any `-` or `_` separators, so `"Pre-Order"` and `"level_order"` work too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        TraversalOrder::ALL
            .into_iter()
            .find(|order| order.name() == normalized)
            .ok_or_else(|| UnsupportedTraversal {
                name: s.to_owned(),
            })
    }
}

/// Pre-order traversal. See [`TraversalOrder::PreOrder`].
pub struct PreOrder<'a, T> {
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> PreOrder<'a, T> {
        PreOrder {
            stack: root.node().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so that the left subtree is finished before it is popped.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for PreOrder<'a, T> {}

/// In-order traversal. See [`TraversalOrder::InOrder`].
pub struct InOrder<'a, T> {
    // Nodes whose left subtree is being visited, with the next node to yield on top.
    pub(crate) stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> InOrder<'a, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(root.node());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for InOrder<'a, T> {}

/// Post-order traversal. See [`TraversalOrder::PostOrder`].
pub struct PostOrder<'a, T> {
    // The flag records whether the node's children have already been pushed.
    pub(crate) stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> PostOrder<'a, T> {
        PostOrder {
            stack: root.node().map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<'a, T> FusedIterator for PostOrder<'a, T> {}

/// Level-order (breadth first) traversal. See [`TraversalOrder::LevelOrder`].
pub struct LevelOrder<'a, T> {
    pub(crate) queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>) -> LevelOrder<'a, T> {
        LevelOrder {
            queue: root.node().into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}

/// A traversal in an order chosen at runtime, dispatching to one of the dedicated iterators.
#[derive(IsVariant)]
pub enum Traversal<'a, T> {
    PreOrder(PreOrder<'a, T>),
    InOrder(InOrder<'a, T>),
    PostOrder(PostOrder<'a, T>),
    LevelOrder(LevelOrder<'a, T>),
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, order: TraversalOrder) -> Traversal<'a, T> {
        match order {
            TraversalOrder::PreOrder => Traversal::PreOrder(PreOrder::new(root)),
            TraversalOrder::InOrder => Traversal::InOrder(InOrder::new(root)),
            TraversalOrder::PostOrder => Traversal::PostOrder(PostOrder::new(root)),
            TraversalOrder::LevelOrder => Traversal::LevelOrder(LevelOrder::new(root)),
        }
    }

    pub const fn order(&self) -> TraversalOrder {
        match self {
            Traversal::PreOrder(_) => TraversalOrder::PreOrder,
            Traversal::InOrder(_) => TraversalOrder::InOrder,
            Traversal::PostOrder(_) => TraversalOrder::PostOrder,
            Traversal::LevelOrder(_) => TraversalOrder::LevelOrder,
        }
    }

    /// Consumes the traversal, writing every remaining value followed by a `-`, so a tree with
    /// values 1, 2 and 3 visited in that order renders as `"1-2-3-"`.
    pub fn render(self) -> String
    where
        T: Display,
    {
        self.fold(String::new(), |mut rendered, value| {
            rendered.push_str(&value.to_string());
            rendered.push('-');
            rendered
        })
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Traversal::PreOrder(iter) => iter.next(),
            Traversal::InOrder(iter) => iter.next(),
            Traversal::PostOrder(iter) => iter.next(),
            Traversal::LevelOrder(iter) => iter.next(),
        }
    }
}

impl<'a, T> FusedIterator for Traversal<'a, T> {}
