//! Property-based tests for the optimizer.
//!
//! 1. **Idempotent**: `optimize(optimize(x)) == optimize(x)`
//! 2. **Sum preserved**: numeric literals reachable through nested `add` calls sum to the folded literal
//! 3. **Other leaves preserved**: non-numeric arguments under `add` keep their left-to-right order

use proptest::prelude::*;

use minilang_syntax::{Node, FOLDABLE_OPERATOR};

use crate::optimize;

// ============================================================================
// Generators
// ============================================================================

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        (0u64..1_000).prop_map(Node::number),
        "[a-z]{1,3}".prop_map(Node::variable),
        "[a-z]{0,3}".prop_map(Node::string),
    ]
}

fn tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(5, 48, 4, |inner| {
        (
            prop_oneof![Just(FOLDABLE_OPERATOR.to_string()), Just("foo".to_string())],
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, arguments)| Node::call(name, arguments))
    })
}

/// 穿过连续的 `add` 调用收集叶子
fn add_leaves(node: &Node, numbers: &mut Vec<u64>, others: &mut Vec<Node>) {
    match node {
        Node::Call { name, arguments } if name == FOLDABLE_OPERATOR => {
            for argument in arguments {
                add_leaves(argument, numbers, others);
            }
        }
        Node::Number { value } => numbers.push(*value),
        other => others.push(optimize(other)),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn optimize_is_idempotent(node in tree()) {
        let once = optimize(&node);
        prop_assert_eq!(optimize(&once), once);
    }

    #[test]
    fn assignment_wrapper_is_transparent(node in tree()) {
        let wrapped = Node::assign("a", node.clone());
        prop_assert_eq!(optimize(&wrapped), Node::assign("a", optimize(&node)));
    }

    #[test]
    fn folding_preserves_sum_and_other_leaves(arguments in prop::collection::vec(tree(), 0..5)) {
        let node = Node::call(FOLDABLE_OPERATOR, arguments);

        let mut numbers = Vec::new();
        let mut expected_others = Vec::new();
        add_leaves(&node, &mut numbers, &mut expected_others);

        let Node::Call { name, arguments } = optimize(&node) else {
            panic!("add call must stay a call");
        };
        prop_assert_eq!(name, FOLDABLE_OPERATOR);

        let mut rest = arguments.as_slice();
        if !numbers.is_empty() {
            prop_assert_eq!(&rest[0], &Node::number(numbers.iter().sum()));
            rest = &rest[1..];
        }
        prop_assert_eq!(rest, expected_others.as_slice());
    }
}

