//! Minilang Optimizer
//!
//! 对 AST 做函数式改写：展平并常量折叠内置的结合律运算符 `add`。
//! 原始语法树不会被修改，返回的是一棵新树。

mod fold;

#[cfg(test)]
mod property_tests;

use minilang_syntax::{Node, FOLDABLE_OPERATOR};

/// 优化一棵语法树
pub fn optimize(node: &Node) -> Node {
    match node {
        Node::Assign { variable, value } => Node::assign(variable.as_str(), optimize(value)),

        Node::Call { name, arguments } if name == FOLDABLE_OPERATOR => {
            Node::call(name.as_str(), fold::fold_arguments(arguments))
        }

        Node::Call { name, arguments } => {
            Node::call(name.as_str(), arguments.iter().map(optimize).collect())
        }

        // 叶子节点已是规范形式
        Node::Number { .. } | Node::Variable { .. } | Node::String { .. } => node.clone(),
    }
}
