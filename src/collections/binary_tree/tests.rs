#![cfg(test)]

use super::*;

/// Builds the tree
/// ```text
///       1
///     /   \
///    2     3
///   / \
///  4   5
/// ```
/// which is not a search tree.
fn sample_tree() -> BinaryTree<i32> {
    let mut tree = BinaryTree::new(1);
    let root = tree.root_mut().unwrap();
    let left = root.attach_left(2).unwrap();
    left.attach_left(4).unwrap();
    left.attach_right(5).unwrap();
    root.attach_right(3).unwrap();
    tree
}

fn search_tree(values: &[i32]) -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::empty();
    for value in values {
        tree.insert(*value).unwrap();
    }
    tree
}

#[test]
fn test_traversal_orders() {
    let tree = sample_tree();

    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [1, 2, 4, 5, 3],
        "Pre-order should visit each node before its subtrees."
    );
    assert_eq!(
        tree.in_order().copied().collect::<Vec<_>>(),
        [4, 2, 5, 1, 3],
        "In-order should visit each node between its subtrees."
    );
    assert_eq!(
        tree.post_order().copied().collect::<Vec<_>>(),
        [4, 5, 2, 3, 1],
        "Post-order should visit each node after its subtrees."
    );
    assert_eq!(
        tree.level_order().copied().collect::<Vec<_>>(),
        [1, 2, 3, 4, 5],
        "Level-order should visit nodes by depth, left to right."
    );

    for order in TraversalOrder::ALL {
        assert_eq!(
            tree.traverse(order).order(),
            order,
            "A runtime traversal should report the order it was created with."
        );
    }
}

#[test]
fn test_render() {
    let tree = sample_tree();

    assert_eq!(tree.render("preorder").unwrap(), "1-2-4-5-3-");
    assert_eq!(tree.render("inorder").unwrap(), "4-2-5-1-3-");
    assert_eq!(tree.render("postorder").unwrap(), "4-5-2-3-1-");
    assert_eq!(tree.render("levelorder").unwrap(), "1-2-3-4-5-");

    assert_eq!(
        BinaryTree::<i32>::empty().render_order(TraversalOrder::LevelOrder),
        "",
        "An empty tree should render as nothing."
    );
}

#[test]
fn test_traversal_restarts() {
    let tree = sample_tree();
    let mut partial = tree.traverse(TraversalOrder::InOrder);
    partial.next();
    partial.next();

    assert_eq!(
        tree.traverse(TraversalOrder::InOrder).collect::<Vec<_>>(),
        [&4, &2, &5, &1, &3],
        "A new traversal should start from the root regardless of other traversals."
    );
    assert_eq!(partial.count(), 3);
}

#[test]
fn test_traversal_names() {
    assert_eq!("preorder".parse(), Ok(TraversalOrder::PreOrder));
    assert_eq!("InOrder".parse(), Ok(TraversalOrder::InOrder));
    assert_eq!("post-order".parse(), Ok(TraversalOrder::PostOrder));
    assert_eq!("level_order".parse(), Ok(TraversalOrder::LevelOrder));

    for order in TraversalOrder::ALL {
        assert_eq!(
            order.to_string().parse(),
            Ok(order),
            "Every order should parse from its own name."
        );
    }

    assert_eq!(
        "bogus".parse::<TraversalOrder>(),
        Err(UnsupportedTraversal {
            name: String::from("bogus"),
        }),
    );
    assert_eq!(
        "depthfirst".parse::<TraversalOrder>().unwrap_err().to_string(),
        "traversal type \"depthfirst\" is not supported"
    );
}

#[test]
fn test_unsupported_traversal() {
    let tree = search_tree(&[5, 3, 8]);

    assert!(tree.traverse_named("bogus").is_err());
    assert_eq!(
        tree.render("bogus"),
        Err(UnsupportedTraversal {
            name: String::from("bogus"),
        })
    );
    assert_eq!(
        tree.render_order(TraversalOrder::PreOrder),
        "5-3-8-",
        "A rejected traversal name shouldn't modify the tree."
    );
    assert_eq!(tree.len(), 3);
}

#[test]
fn test_empty_traversals() {
    let tree = BinarySearchTree::<i32>::empty();

    for order in TraversalOrder::ALL {
        assert_eq!(
            tree.traverse(order).next(),
            None,
            "Traversing an empty tree should yield nothing."
        );
    }
}

#[test]
fn test_insert() {
    let mut tree = BinarySearchTree::new(50);
    for value in [30, 70, 20, 40, 60, 80] {
        assert_eq!(tree.insert(value), Ok(()));
    }

    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), Some(2));
    assert_eq!(
        tree.level_order().copied().collect::<Vec<_>>(),
        [50, 30, 70, 20, 40, 60, 80],
        "Values should descend left when smaller and right when larger."
    );

    let root = tree.root().unwrap();
    assert_eq!(root.value(), &50);
    assert_eq!(root.left().map(Node::value), Some(&30));
    assert_eq!(root.right().map(Node::value), Some(&70));
    assert!(root.left().unwrap().left().unwrap().is_leaf());
}

#[test]
fn test_insert_into_empty() {
    let mut tree = BinarySearchTree::empty();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), None);

    tree.insert("m").unwrap();
    assert_eq!(tree.root().map(Node::value), Some(&"m"));
    assert_eq!(tree.height(), Some(0));
    assert_eq!(tree.len(), 1);
}

#[test]
fn test_insert_duplicate() {
    let mut tree = search_tree(&[4, 2, 6, 1, 3]);
    let before = tree.render_order(TraversalOrder::PreOrder);

    assert_eq!(
        tree.insert(3),
        Err(DuplicateValue(3)),
        "Inserting an existing value should hand it back."
    );
    assert_eq!(tree.insert(4).unwrap_err().into_inner(), 4);
    assert_eq!(tree.len(), 5, "A rejected insert shouldn't change the length.");
    assert_eq!(
        tree.render_order(TraversalOrder::PreOrder),
        before,
        "A rejected insert shouldn't change the shape of the tree."
    );
    assert_eq!(
        DuplicateValue(3).to_string(),
        "value is already present in tree"
    );
}

#[test]
fn test_search() {
    let tree = search_tree(&[1, 2, 3, 4, 5]);

    assert!(tree.search(&4));
    assert!(tree.search(&1));
    assert!(!tree.search(&6), "A value past the largest one shouldn't be found.");
    assert!(!tree.search(&0), "A value before the smallest one shouldn't be found.");
    assert!(!BinarySearchTree::<i32>::empty().search(&1));

    let words: BinarySearchTree<String> = ["pear", "apple", "quince"]
        .into_iter()
        .map(String::from)
        .collect();
    assert!(words.search("apple"), "Searching should accept borrowed forms.");
    assert_eq!(words.get("quince").map(String::as_str), Some("quince"));
    assert_eq!(words.get("fig"), None);
}

#[test]
fn test_min_max() {
    let tree = search_tree(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(tree.min_value(), Ok(&1));
    assert_eq!(tree.max_value(), Ok(&14));

    let single = BinarySearchTree::new('x');
    assert_eq!(single.min_value(), Ok(&'x'));
    assert_eq!(single.max_value(), Ok(&'x'));

    let empty = BinarySearchTree::<u8>::empty();
    assert_eq!(empty.min_value(), Err(EmptyTree));
    assert_eq!(empty.max_value(), Err(EmptyTree));
}

#[test]
fn test_first_in() {
    let tree = search_tree(&[8, 3, 10, 1, 6]);
    assert_eq!(tree.first_in("preorder"), Ok(&8));
    assert_eq!(tree.first_in("inorder"), Ok(&1));
    assert_eq!(tree.first_in("postorder"), Ok(&1));

    assert!(tree.first_in("sideways").unwrap_err().is_unsupported_traversal());
    assert!(
        BinarySearchTree::<i32>::empty()
            .first_in("levelorder")
            .unwrap_err()
            .is_empty_tree()
    );
}

#[test]
fn test_in_order_sorted() {
    let tree: BinarySearchTree<i32> = [15, -4, 23, 0, 8, 42, -16, 4].into_iter().collect();

    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        [-16, -4, 0, 4, 8, 15, 23, 42],
        "In-order traversal of a search tree should be sorted."
    );
    assert_eq!(tree.to_string(), "{-16, -4, 0, 4, 8, 15, 23, 42}");
}

#[test]
fn test_collect_skips_duplicates() {
    let mut tree: BinarySearchTree<i32> = [3, 1, 3, 2, 1].into_iter().collect();
    assert_eq!(tree.len(), 3);

    tree.extend([4, 2, 0]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_is_search_tree() {
    assert!(!sample_tree().is_search_tree());
    assert!(search_tree(&[5, 2, 8, 1, 3, 7, 9]).as_tree().is_search_tree());
    assert!(BinaryTree::<i32>::empty().is_search_tree());

    // 1 is smaller than its parent 5, but sits in the right subtree of 2.
    let mut tree = BinaryTree::new(2);
    let root = tree.root_mut().unwrap();
    root.attach_right(5).unwrap().attach_left(1).unwrap();
    assert!(
        !tree.is_search_tree(),
        "The property should hold against every ancestor, not just the parent."
    );
}

#[test]
fn test_try_from_tree() {
    let rejected = BinarySearchTree::try_from(sample_tree()).unwrap_err();
    assert_eq!(
        rejected.into_inner().render_order(TraversalOrder::LevelOrder),
        "1-2-3-4-5-",
        "A rejected tree should be handed back intact."
    );

    let mut tree = BinaryTree::new(4);
    let root = tree.root_mut().unwrap();
    root.attach_left(2).unwrap().attach_right(3).unwrap();
    root.attach_right(6).unwrap();

    let mut tree = BinarySearchTree::try_from(tree).unwrap();
    assert_eq!(tree.len(), 4);
    assert!(tree.search(&3));
    tree.insert(5).unwrap();
    assert_eq!(BinaryTree::from(tree).render_order(TraversalOrder::InOrder), "2-3-4-5-6-");
}

#[test]
fn test_attach() {
    let mut tree = BinaryTree::empty();
    assert_eq!(tree.len(), 0);

    let root = tree.attach_root(10).unwrap();
    root.attach_left(5).unwrap();
    assert_eq!(root.attach_left(7).unwrap_err(), OccupiedChild);
    assert_eq!(
        root.left().map(Node::value),
        Some(&5),
        "Attaching to an occupied side shouldn't replace the child."
    );

    root.left_mut().unwrap().attach_right(7).unwrap();
    assert!(root.right_mut().is_none());
    assert!(tree.attach_root(1).is_err());
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.height(), Some(2));
}

#[test]
fn test_degenerate_tree() {
    const COUNT: u32 = 20_000;

    let tree: BinarySearchTree<u32> = (0..COUNT).collect();
    assert_eq!(tree.len(), COUNT as usize);
    assert_eq!(tree.height(), Some(COUNT as usize - 1));
    assert!(tree.search(&(COUNT - 1)));
    assert_eq!(tree.max_value(), Ok(&(COUNT - 1)));

    for order in TraversalOrder::ALL {
        assert_eq!(
            tree.traverse(order).count(),
            COUNT as usize,
            "Traversing a degenerate tree shouldn't overflow the stack."
        );
    }
    assert!(tree.as_tree().is_search_tree());

    // Dropped at the end of the test without recursing.
}

#[test]
fn test_render_multi_character_values() {
    let words: BinarySearchTree<&str> = ["kiwi", "fig", "plum"].into_iter().collect();
    assert_eq!(
        words.render("inorder").unwrap(),
        "fig-kiwi-plum-",
        "Each value should be written whole, followed by a separator."
    );

    let tree = search_tree(&[100, -20, 3000]);
    assert_eq!(tree.render_order(TraversalOrder::PostOrder), "-20-3000-100-");
}

#[test]
fn test_debug_deep_tree() {
    let tree: BinarySearchTree<u16> = (0..200).collect();
    let debug = format!("{:?}", tree);

    assert_eq!(
        debug.lines().filter(|l| l.ends_with(')')).count(),
        200,
        "Every value of a moderately deep tree should be drawn."
    );
    assert!(debug.contains(&format!("{}(199)", "└    ".repeat(199))));
}

#[test]
fn test_debug() {
    let tree = search_tree(&[2, 1, 3]);
    let debug = format!("{:?}", tree);

    assert!(debug.starts_with("BinarySearchTree"));
    assert!(debug.contains("┌    (1)"), "The left subtree should be drawn above.");
    assert!(debug.contains("\n(2)\n"));
    assert!(debug.contains("└    (3)"), "The right subtree should be drawn below.");
    assert!(debug.contains("len: 3"));
}
