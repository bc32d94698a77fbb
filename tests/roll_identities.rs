//! Rolls sample trees of various shapes and value types with every strategy, and checks the traversal orders of the result against those of the original.

use std::fmt::Debug;
use rstest::rstest;
use tracing_subscriber::EnvFilter;
use treeroll::{
    roll::{RollDirection, RollStrategy},
    traversal::Order,
    BinaryTree, TreePrinter,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A sample tree with its value type erased, so that trees of different types can share test cases.
trait Sample {
    fn check_roll(&self, strategy: RollStrategy);
}
impl<T> Sample for BinaryTree<T>
where T: Clone + Debug + PartialEq + std::fmt::Display,
{
    fn check_roll(&self, strategy: RollStrategy) {
        let mut printer = TreePrinter::new(String::new());
        printer.print_tree(self).expect("printing into a String");
        tracing::info!(?strategy, "rolling\n{}", printer.into_inner());

        let before = Orders::of(self);
        let mut tree = self.deep_copy();
        let rolled = tree.roll_with(strategy);
        assert_eq!(rolled.is_copy(), strategy.is_immutable());
        assert_eq!(rolled.size(), self.size());
        let after = Orders::of(&*rolled);
        before.check_identities(&after, strategy.direction());
        drop(rolled);

        if strategy.is_immutable() {
            assert_eq!(&tree, self);
            assert_eq!(Orders::of(&tree), before);
        }
    }
}

#[derive(Debug, PartialEq)]
struct Orders<T> {
    preorder: Vec<T>,
    inorder: Vec<T>,
    postorder: Vec<T>,
}
impl<T: Clone + Debug + PartialEq> Orders<T> {
    fn of(tree: &BinaryTree<T>) -> Self {
        let collect = |order: Order| tree.collect_cloned(order).expect("sample trees have a root");
        Self {
            preorder: collect(Order::Preorder),
            inorder: collect(Order::Inorder),
            postorder: collect(Order::Postorder),
        }
    }
    fn check_identities(&self, after: &Self, direction: RollDirection) {
        match direction {
            RollDirection::Clockwise => {
                assert_eq!(self.inorder, after.preorder);
                assert_eq!(self.postorder, after.inorder);
            }
            RollDirection::Counterclockwise => {
                assert_eq!(self.preorder, after.inorder);
                assert_eq!(self.inorder, after.postorder);
            }
        }
    }
}

fn options<T>(values: impl IntoIterator<Item = Option<T>>) -> Box<dyn Sample>
where T: Clone + Debug + PartialEq + std::fmt::Display + 'static,
{
    Box::new(BinaryTree::<T>::from_level_order_options(values))
}
fn marked<T>(values: impl IntoIterator<Item = T>, marker: T) -> Box<dyn Sample>
where T: Clone + Debug + PartialEq + std::fmt::Display + 'static,
{
    Box::new(BinaryTree::<T>::from_level_order(values, &marker))
}

#[rstest]
#[case::singleton(options([Some(1)]))]
#[case::perfect_fibonacci(options(
    [1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987].iter().copied().map(Some),
))]
#[case::right_skewed_ints(options([
    Some(1), None, Some(2), None, Some(3), None, Some(4), None, Some(5),
    None, Some(6), None, Some(7), None, Some(8), None, Some(9),
]))]
#[case::left_skewed_ints(options([
    Some(0), Some(1), None, Some(2), None, Some(3), None, Some(4), None,
    Some(5), None, Some(6), None, Some(7), None, Some(8), None, Some(9),
]))]
#[case::symmetric_booleans(options([
    Some(true), Some(true), None, Some(true), None, None, Some(false), None, Some(false),
]))]
#[case::right_subtree_floats(options([
    Some(1.6_f32), None, Some(3.0), Some(6.4), Some(12.0), Some(25.6), Some(51.0),
    Some(102.4), Some(204.0), None, None, None, Some(409.6),
]))]
#[case::left_subtree_doubles(options([
    Some(9.999_f64), Some(8.0), None, Some(7.75), Some(6.0), Some(5.5), Some(4.0),
    Some(3.25), Some(2.0), None, None, None, None, Some(1.1),
]))]
#[case::balanced_chars(options([
    Some('A'), Some('B'), Some('C'), Some('D'), Some('E'), None, Some('F'), Some('G'),
    None, Some('H'), Some('I'), Some('J'), Some('K'), Some('L'), Some('M'),
]))]
#[case::complete_strings(options(
    ["ARRAY", "OF", "STRINGS", "ON", "A", "TREE"].iter().map(|s| Some(s.to_string())),
))]
#[case::custom_marker(marked("E,D,H,B,#,F,J,A,C,#,G,I".split(','), "#"))]
fn roll_preserves_traversal_identities(
    #[case] tree: Box<dyn Sample>,
    #[values(
        RollStrategy::Clockwise,
        RollStrategy::Counterclockwise,
        RollStrategy::ImmutableClockwise,
        RollStrategy::ImmutableCounterclockwise
    )]
    strategy: RollStrategy,
) {
    init_tracing();
    tree.check_roll(strategy);
}

#[rstest]
#[case::clockwise(RollDirection::Clockwise, [2, 1, 4, 6, 3, 5], [2, 6, 4, 5, 3, 1])]
#[case::counterclockwise(RollDirection::Counterclockwise, [5, 3, 1, 2, 6, 4], [1, 2, 3, 4, 6, 5])]
fn documented_example(
    #[case] direction: RollDirection,
    #[case] preorder: [i32; 6],
    #[case] inorder: [i32; 6],
) {
    init_tracing();
    let mut tree = BinaryTree::<_>::from_level_order_options([
        Some(1), Some(2), Some(3), None, None, Some(4), Some(5), None, Some(6),
    ]);
    tree.roll(direction);
    assert_eq!(tree.collect_cloned(Order::Preorder).unwrap(), preorder);
    assert_eq!(tree.collect_cloned(Order::Inorder).unwrap(), inorder);
}

mod properties {
    use proptest::prelude::*;
    use super::*;

    fn level_order() -> impl Strategy<Value = Vec<Option<u8>>> {
        prop::collection::vec(prop::option::weighted(0.8, any::<u8>()), 0..64)
    }

    proptest! {
        #[test]
        fn identities_hold(values in level_order()) {
            let tree = BinaryTree::<u8>::from_level_order_options(values);
            prop_assume!(!tree.is_empty());
            let before = Orders::of(&tree);
            for direction in RollDirection::ALL.iter().copied() {
                let rolled = tree.rolled(direction);
                prop_assert_eq!(rolled.size(), tree.size());
                before.check_identities(&Orders::of(&rolled), direction);
            }
            prop_assert_eq!(Orders::of(&tree), before);
        }

        #[test]
        fn opposite_rolls_cancel_out(values in level_order()) {
            let tree = BinaryTree::<u8>::from_level_order_options(values);
            for direction in RollDirection::ALL.iter().copied() {
                let mut rolled = tree.deep_copy();
                rolled.roll(direction).roll(direction.reversed());
                prop_assert_eq!(&rolled, &tree);
            }
        }

        #[test]
        fn deep_copies_are_independent(values in level_order()) {
            let tree = BinaryTree::<u8>::from_level_order_options(values);
            let mut copy = tree.deep_copy();
            prop_assert_eq!(&copy, &tree);
            prop_assert_eq!(copy.height(), tree.height());
            if let Some(mut root) = copy.root_mut() {
                let bumped = root.value().wrapping_add(1);
                *root.value_mut() = bumped;
                prop_assert_ne!(&copy, &tree);
            }
        }

        #[test]
        fn rootless_trees_stay_rootless(strategy in prop::sample::select(RollStrategy::ALL.to_vec())) {
            let mut tree = BinaryTree::<u8>::new();
            let rolled = tree.roll_with(strategy);
            prop_assert!(rolled.is_empty());
            prop_assert_eq!(rolled.collect(Order::Inorder), Err(treeroll::traversal::TraverseError::EmptyTree));
        }
    }
}
