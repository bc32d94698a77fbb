use alloc::{string::ToString, vec::Vec};
use crate::{traversal::Order, BinaryTree};
use super::*;

fn sample() -> BinaryTree<i32> {
    BinaryTree::from_level_order_options([
        Some(1), Some(2), Some(3), None, None, Some(4), Some(5), None, Some(6),
    ])
}

fn orders(tree: &BinaryTree<i32>) -> [Vec<i32>; 3] {
    let collect = |order: Order| tree.collect_cloned(order).expect("tree has a root");
    [collect(Order::Preorder), collect(Order::Inorder), collect(Order::Postorder)]
}

#[test]
fn clockwise() {
    let mut tree = sample();
    tree.roll(RollDirection::Clockwise);
    let [preorder, inorder, postorder] = orders(&tree);
    assert_eq!(preorder, [2, 1, 4, 6, 3, 5]);
    assert_eq!(inorder, [2, 6, 4, 5, 3, 1]);
    assert_eq!(postorder, [6, 5, 3, 4, 1, 2]);
    assert_eq!(tree.size(), 6);
    assert_eq!(*tree.root().unwrap().value(), 2);
}

#[test]
fn counterclockwise() {
    let mut tree = sample();
    tree.roll(RollDirection::Counterclockwise);
    let [preorder, inorder, postorder] = orders(&tree);
    assert_eq!(preorder, [5, 3, 1, 2, 6, 4]);
    assert_eq!(inorder, [1, 2, 3, 4, 6, 5]);
    assert_eq!(postorder, [2, 1, 4, 6, 3, 5]);
    assert_eq!(*tree.root().unwrap().value(), 5);
}

#[test]
fn opposite_rolls_cancel_out() {
    for direction in RollDirection::ALL.iter().copied() {
        let mut tree = sample();
        tree.roll(direction).roll(direction.reversed());
        assert_eq!(tree, sample());
    }
}

#[test]
fn single_node() {
    for direction in RollDirection::ALL.iter().copied() {
        let mut tree = BinaryTree::<_>::with_root('x');
        tree.roll(direction);
        assert_eq!(tree, BinaryTree::with_root('x'));
    }
}

#[test]
fn rootless_is_a_no_op() {
    for strategy in RollStrategy::ALL.iter().copied() {
        let mut tree = BinaryTree::<i32>::new();
        let rolled = tree.roll_with(strategy);
        assert!(rolled.is_empty());
        assert_eq!(rolled.is_copy(), strategy.is_immutable());
        drop(rolled);
        assert!(tree.is_empty());
    }
}

#[test]
fn immutable_leaves_the_original_untouched() {
    let original = sample();
    for direction in RollDirection::ALL.iter().copied() {
        let mut tree = sample();
        let rolled = tree
            .roll_with(RollStrategy::immutable(direction))
            .into_copy()
            .expect("immutable strategy rolled in place");
        assert_eq!(tree, original);
        assert_eq!(orders(&tree), orders(&original));

        let mut in_place = sample();
        in_place.roll(direction);
        assert_eq!(rolled, in_place);
    }
}

#[test]
fn in_place_strategy_returns_the_same_tree() {
    let mut tree = sample();
    let mut rolled = tree.roll_with(RollStrategy::Clockwise);
    assert!(!rolled.is_copy());
    *rolled.root_mut().unwrap().value_mut() = 20;
    assert!(rolled.into_copy().is_none());
    assert_eq!(tree.collect_cloned(Order::Preorder).unwrap(), [20, 1, 4, 6, 3, 5]);
}

#[test]
fn strategy_selection() {
    for direction in RollDirection::ALL.iter().copied() {
        let in_place = RollStrategy::new(direction);
        let immutable = RollStrategy::immutable(direction);
        assert_eq!(in_place.direction(), direction);
        assert_eq!(immutable.direction(), direction);
        assert!(!in_place.is_immutable());
        assert!(immutable.is_immutable());
    }
    assert_eq!(
        RollStrategy::immutable(RollDirection::Counterclockwise),
        RollStrategy::ImmutableCounterclockwise,
    );
}

#[test]
fn direction_reversal() {
    assert_eq!(RollDirection::Clockwise.reversed(), RollDirection::Counterclockwise);
    assert_eq!(RollDirection::Counterclockwise.reversed(), RollDirection::Clockwise);
    assert_eq!(RollDirection::Clockwise.spine(), crate::binary_tree::Side::Left);
    assert_eq!(RollDirection::Counterclockwise.spine(), crate::binary_tree::Side::Right);
}

#[test]
fn parse_direction() {
    assert_eq!("clockwise".parse(), Ok(RollDirection::Clockwise));
    assert_eq!(" CW ".parse(), Ok(RollDirection::Clockwise));
    assert_eq!("counterclockwise".parse(), Ok(RollDirection::Counterclockwise));
    assert_eq!("Anticlockwise".parse(), Ok(RollDirection::Counterclockwise));
    assert_eq!("ccw".parse(), Ok(RollDirection::Counterclockwise));

    let error = "".parse::<RollDirection>().unwrap_err();
    assert_eq!(error.input(), "");
    let error = "sideways".parse::<RollDirection>().unwrap_err();
    assert_eq!(error.input(), "sideways");
    assert_eq!(
        error.to_string(),
        "invalid roll direction \"sideways\", expected \"clockwise\" or \"counterclockwise\"",
    );
    for direction in RollDirection::ALL.iter().copied() {
        assert_eq!(direction.to_string().parse(), Ok(direction));
    }
}

#[test]
fn deep_left_chain() {
    const DEPTH: i32 = 2_000;
    let mut values = Vec::new();
    values.push(Some(0));
    for value in 1..DEPTH {
        values.extend([Some(value), None].iter().copied());
    }
    let mut tree = BinaryTree::<i32>::from_level_order_options(values);
    assert_eq!(tree.height(), DEPTH as usize);

    tree.roll(RollDirection::Clockwise);
    let descending: Vec<_> = (0..DEPTH).rev().collect();
    assert_eq!(tree.collect_cloned(Order::Preorder).unwrap(), descending);
    assert_eq!(*tree.root().unwrap().value(), DEPTH - 1);
    assert!(tree.root().unwrap().left_child().is_none());
    assert_eq!(tree.height(), DEPTH as usize);

    tree.roll(RollDirection::Counterclockwise);
    assert_eq!(*tree.root().unwrap().value(), 0);
    assert_eq!(tree.collect_cloned(Order::Inorder).unwrap(), descending);
}
