//! Constant Folding
//!
//! `add` 参数列表的改写步骤：
//! 1. 直接参数中的 `add` 调用展开一层
//! 2. 递归优化每个参数
//! 3. 嵌套超过一层时，优化后的参数仍可能是 `add` 调用，再展开一次
//! 4. 数字字面量求和并放到最前面，其余参数保持相对顺序

use minilang_syntax::{Node, FOLDABLE_OPERATOR};
use tracing::warn;

use crate::optimize;

pub(crate) fn fold_arguments(arguments: &[Node]) -> Vec<Node> {
    let optimized: Vec<Node> = splice(arguments.iter().cloned())
        .iter()
        .map(optimize)
        .collect();
    let flat = splice(optimized.into_iter());

    let mut numbers = Vec::new();
    let mut others = Vec::new();
    for argument in &flat {
        match argument {
            Node::Number { value } => numbers.push(*value),
            other => others.push(other.clone()),
        }
    }

    if numbers.is_empty() {
        return others;
    }

    match numbers
        .iter()
        .try_fold(0u64, |sum, value| sum.checked_add(*value))
    {
        Some(sum) => {
            let mut folded = Vec::with_capacity(others.len() + 1);
            folded.push(Node::number(sum));
            folded.extend(others);
            folded
        }
        None => {
            warn!(?numbers, "sum overflows u64, leaving literals unfolded");
            flat
        }
    }
}

/// 把 `add` 调用替换为它的参数（只展开一层）
fn splice(arguments: impl Iterator<Item = Node>) -> Vec<Node> {
    let mut out = Vec::new();
    for argument in arguments {
        match argument {
            Node::Call { name, arguments } if name == FOLDABLE_OPERATOR => out.extend(arguments),
            other => out.push(other),
        }
    }
    out
}
