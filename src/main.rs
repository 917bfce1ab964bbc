use tree_walk::collections::binary_tree::{BinarySearchTree, BinaryTree, TraversalOrder};

fn main() {
    println!("\n[BinaryTree]\n");

    let mut tree = BinaryTree::new(1);
    if let Some(root) = tree.root_mut() {
        match root.attach_left(2) {
            Ok(left) => {
                if let Err(e) = left.attach_left(4) {
                    println!("attaching 4: {}", e);
                }
                if let Err(e) = left.attach_right(5) {
                    println!("attaching 5: {}", e);
                }
            },
            Err(e) => println!("attaching 2: {}", e),
        }
        if let Err(e) = root.attach_right(3) {
            println!("attaching 3: {}", e);
        }
    }

    println!("{:?}", tree);
    for order in TraversalOrder::ALL {
        println!("{}: {}", order, tree.render_order(order));
    }

    println!("\n[BinarySearchTree]\n");

    let mut tree: BinarySearchTree<i32> = [4, 2, 5, 1, 3].into_iter().collect();
    println!("{:?}", tree);

    match tree.insert(6) {
        Ok(()) => println!("inserted 6"),
        Err(e) => println!("{}", e),
    }
    if let Err(e) = tree.insert(6) {
        println!("inserting 6 again: {}", e);
    }
    println!("levelorder: {}", tree.render_order(TraversalOrder::LevelOrder));

    println!("min: {:?}", tree.min_value());
    println!("max: {:?}", tree.max_value());

    for value in [4, 6, 7] {
        println!("search {}: {}", value, tree.search(&value));
    }

    match tree.render("zigzag") {
        Ok(rendered) => println!("zigzag: {}", rendered),
        Err(e) => println!("{}", e),
    }

    println!("{}", tree);
}
