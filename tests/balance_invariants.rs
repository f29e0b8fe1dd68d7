use ordered_trees::avl_tree::AvlTree;
use ordered_trees::red_black_tree::{Color, RedBlackTree};
use ordered_trees::{NodeRef, OrderedTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::cmp;

const NUM_OF_OPERATIONS: usize = 5_000;

fn init_logger() {
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());
}

fn subtree_height<T, M>(node: Result<NodeRef<'_, T, M>, ordered_trees::TreeError>) -> i32
where
    M: ordered_trees::bst::Augment,
{
    node.map(|node| node.height()).unwrap_or(-1)
}

fn check_avl(tree: &AvlTree<u32>) {
    tree.pre_order(|node| {
        let left = subtree_height(node.left());
        let right = subtree_height(node.right());
        assert_eq!(node.height(), cmp::max(left, right) + 1);
        assert_eq!(node.balance(), left - right);
        assert!(node.balance().abs() <= 1, "node {} leans by {}", node.element(), node.balance());

        if let Ok(left) = node.left() {
            assert!(left.element() <= node.element());
        }
        if let Ok(right) = node.right() {
            assert!(right.element() >= node.element());
        }
    });
}

fn check_red_black(tree: &RedBlackTree<u32>) {
    if let Ok(root) = tree.root() {
        assert_eq!(root.color(), Color::Black);
    }

    let mut black_height = None;
    tree.pre_order(|node| {
        if node.color() == Color::Red {
            assert_eq!(RedBlackTree::color_of(node.left().ok()), Color::Black);
            assert_eq!(RedBlackTree::color_of(node.right().ok()), Color::Black);
        }
        if !node.has_left() || !node.has_right() {
            let mut blacks = 0;
            let mut curr = Some(node);
            while let Some(ancestor) = curr {
                if ancestor.color() == Color::Black {
                    blacks += 1;
                }
                curr = ancestor.parent().ok();
            }
            assert_eq!(*black_height.get_or_insert(blacks), blacks);
        }
    });

    let elements: Vec<&u32> = tree.iter().collect();
    assert!(elements.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn int_test_avl_random_operations() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(17);
    let mut tree = AvlTree::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let element = rng.gen_range(0..1_000u32);
        if rng.gen_bool(0.55) {
            tree.insert(element);
        } else {
            tree.remove(&element);
        }
        check_avl(&tree);
    }
}

#[test]
fn int_test_avl_height_is_logarithmic() {
    let tree: AvlTree<u32> = (0..1_023).collect();
    check_avl(&tree);
    // an avl tree with n nodes is at most 1.44 * log2(n + 2) tall
    assert!(tree.height() <= 14);
}

#[test]
fn int_test_avl_drain_in_random_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut elements: Vec<u32> = (0..300).collect();
    let mut tree: AvlTree<u32> = elements.iter().cloned().collect();

    while !elements.is_empty() {
        let element = elements.swap_remove(rng.gen_range(0..elements.len()));
        assert_eq!(tree.remove(&element), Some(element));
        check_avl(&tree);
    }
    assert!(tree.is_empty());
}

#[test]
fn int_test_red_black_random_operations() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(29);
    let mut tree = RedBlackTree::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let element = rng.gen_range(0..1_000u32);
        if rng.gen_bool(0.55) {
            tree.insert(element);
        } else {
            tree.remove(&element);
        }
        check_red_black(&tree);
    }
}

#[test]
fn int_test_red_black_height_is_logarithmic() {
    let tree: RedBlackTree<u32> = (0..1_023).collect();
    check_red_black(&tree);
    assert!(tree.height() <= 20);
}

#[test]
fn int_test_red_black_drain_in_random_order() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut elements: Vec<u32> = (0..300).collect();
    let mut tree: RedBlackTree<u32> = elements.iter().cloned().collect();

    while !elements.is_empty() {
        let element = elements.swap_remove(rng.gen_range(0..elements.len()));
        assert_eq!(tree.remove(&element), Some(element));
        check_red_black(&tree);
    }
    assert!(tree.is_empty());
}

#[test]
fn int_test_red_black_three_ascending() {
    let tree: RedBlackTree<u32> = vec![10, 20, 30].into_iter().collect();
    let root = tree.root().unwrap();
    assert_eq!(root.element(), &20);
    assert_eq!(root.color(), Color::Black);
    assert_eq!(root.left().unwrap().color(), Color::Red);
    assert_eq!(root.right().unwrap().color(), Color::Red);
}
